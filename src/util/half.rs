use std::fmt;

/// Difference between the single-precision exponent bias (127) and the
/// half-precision exponent bias (15).
const EXPONENT_REBIAS: i32 = 127 - 15;
/// Bit pattern of positive infinity in half precision.
const INFINITY_BITS: u16 = 0x7C00;
/// Largest half-precision exponent field; reserved for infinity and NaN.
const MAX_EXPONENT: i32 = 0x1F;

/// A value stored in IEEE-754 binary16 layout.
///
/// The wrapped pattern holds 1 sign bit, 5 exponent bits (bias 15) and 10
/// mantissa bits. Every operand on the evaluation stack, the memory cell and
/// each recorded result is held in this form, and is widened to `f64` only for
/// the duration of a single arithmetic operation.
///
/// # Example
/// ```
/// use halfrpn::util::half::Half;
///
/// let half = Half::from_f64(3.5);
/// assert_eq!(half.to_bits(), 0x4300);
/// assert_eq!(half.to_f64(), 3.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Half(u16);

impl Half {
    /// Positive zero.
    pub const ZERO: Self = Self(0);
    /// Positive infinity.
    pub const INFINITY: Self = Self(INFINITY_BITS);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(0x8000 | INFINITY_BITS);

    /// Wraps a raw binary16 bit pattern.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw binary16 bit pattern.
    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Encodes a real number, see [`encode`].
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Self(encode(value))
    }

    /// Decodes the pattern into a real number, see [`decode`].
    #[must_use]
    pub fn to_f64(self) -> f64 {
        decode(self.0)
    }

    /// Returns `true` if the sign bit is set, including `-0.0`.
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x8000 != 0
    }

    /// Returns `true` for the exponent field `0x1F`.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & INFINITY_BITS == INFINITY_BITS
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Encodes a real number into a binary16 bit pattern.
///
/// The value is first narrowed to single precision; its fields are then
/// repacked. The exponent is rebiased from 127 to 15. Values whose rebiased
/// exponent is not positive flush to a signed zero, there is no subnormal
/// output. Values whose rebiased exponent reaches 31 saturate to a signed
/// infinity, NaN included. The mantissa is truncated to its top 10 bits with
/// no rounding.
///
/// # Example
/// ```
/// use halfrpn::util::half::encode;
///
/// assert_eq!(encode(1.0), 0x3C00);
/// assert_eq!(encode(-2.0), 0xC000);
/// assert_eq!(encode(1e30), 0x7C00);
/// assert_eq!(encode(1e-10), 0x0000);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode(value: f64) -> u16 {
    let bits = (value as f32).to_bits();

    let sign = ((bits >> 16) & 0x8000) as u16;
    let exponent = ((bits >> 23) & 0xFF) as i32 - EXPONENT_REBIAS;
    let mantissa = ((bits >> 13) & 0x03FF) as u16;

    if exponent <= 0 {
        sign
    } else if exponent >= MAX_EXPONENT {
        sign | INFINITY_BITS
    } else {
        sign | ((exponent as u16) << 10) | mantissa
    }
}

/// Decodes a binary16 bit pattern into a real number.
///
/// Subnormal patterns are normalized by shifting the mantissa until its
/// implicit leading bit appears. The exponent field `0x1F` maps to the
/// single-precision exponent `0xFF` with the mantissa carried over unchanged,
/// so a zero mantissa yields infinity.
///
/// # Example
/// ```
/// use halfrpn::util::half::decode;
///
/// assert_eq!(decode(0x3C00), 1.0);
/// assert_eq!(decode(0x0001), 2f64.powi(-24));
/// assert_eq!(decode(0xFC00), f64::NEG_INFINITY);
/// assert!(decode(0x8000).is_sign_negative());
/// ```
#[must_use]
pub fn decode(bits: u16) -> f64 {
    let sign = u32::from(bits & 0x8000) << 16;
    let exponent = u32::from((bits >> 10) & 0x1F);
    let mantissa = u32::from(bits & 0x03FF);

    let single = match (exponent, mantissa) {
        (0, 0) => sign,
        (0, _) => {
            let mut exponent = 1 + EXPONENT_REBIAS.unsigned_abs();
            let mut mantissa = mantissa;
            while mantissa & 0x0400 == 0 {
                mantissa <<= 1;
                exponent -= 1;
            }
            sign | (exponent << 23) | ((mantissa & 0x03FF) << 13)
        },
        (0x1F, _) => sign | (0xFF << 23) | (mantissa << 13),
        _ => sign | ((exponent + EXPONENT_REBIAS.unsigned_abs()) << 23) | (mantissa << 13),
    };

    f64::from(f32::from_bits(single))
}

/// Passes a real number through the half-precision codec once.
///
/// # Example
/// ```
/// use halfrpn::util::half::round;
///
/// assert_eq!(round(0.1), 0.0999755859375);
/// assert_eq!(round(2049.0), 2048.0);
/// ```
#[must_use]
pub fn round(value: f64) -> f64 {
    decode(encode(value))
}
