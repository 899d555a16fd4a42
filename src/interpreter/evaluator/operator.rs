use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, util::num::f64_to_i32_exact};

/// Binary operators of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, real division.
    Div,
    /// `%`, real remainder whose sign follows the dividend.
    Rem,
    /// `^`
    Pow,
    /// `|`, the larger operand.
    Max,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use halfrpn::interpreter::evaluator::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("|"), Some(Operator::Max));
    /// assert_eq!(Operator::from_symbol("RES"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            "^" => Some(Self::Pow),
            "|" => Some(Self::Max),
            _ => None,
        }
    }

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
            Self::Max => '|',
        }
    }

    /// Applies the operator to `a` (left) and `b` (right).
    ///
    /// The result is exact `f64` arithmetic; rounding to half precision is
    /// left to the caller.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` and `%` when `b` is zero.
    /// - `InvalidExponent` for `^` with a negative base and a fractional
    ///   exponent.
    ///
    /// # Example
    /// ```
    /// use halfrpn::interpreter::evaluator::operator::Operator;
    ///
    /// assert_eq!(Operator::Rem.apply(-7.5, 2.0).unwrap(), -1.5);
    /// assert_eq!(Operator::Pow.apply(-2.0, 3.0).unwrap(), -8.0);
    /// assert!(Operator::Div.apply(4.0, 0.0).is_err());
    /// ```
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div | Self::Rem => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero { operator: self.symbol() });
                }
                Ok(if self == Self::Div { a / b } else { a % b })
            },
            Self::Pow => power(a, b),
            Self::Max => Ok(a.max(b)),
        }
    }
}

/// Whole exponents use repeated multiplication so negative bases work; other
/// exponents use `powf` and require a non-negative base.
fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if let Some(exponent) = f64_to_i32_exact(exponent) {
        return Ok(base.powi(exponent));
    }
    if base < 0.0 {
        return Err(EvalError::InvalidExponent { base, exponent });
    }

    Ok(base.powf(exponent))
}
