use halfrpn::util::half::{Half, decode, encode, round};

#[test]
fn zero_round_trips() {
    assert_eq!(encode(0.0), 0x0000);
    assert_eq!(round(0.0), 0.0);
    assert_eq!(encode(-0.0), 0x8000);
    assert!(round(-0.0).is_sign_negative());
}

#[test]
fn overflow_saturates_to_infinity() {
    assert_eq!(round(1e30), f64::INFINITY);
    assert_eq!(round(-1e30), f64::NEG_INFINITY);
    assert_eq!(round(1e300), f64::INFINITY);
    assert_eq!(Half::from_f64(65536.0), Half::INFINITY);
    assert_eq!(Half::from_f64(f64::NEG_INFINITY), Half::NEG_INFINITY);
}

#[test]
fn nan_encodes_as_infinity_pattern() {
    assert_eq!(encode(f64::NAN) & 0x7FFF, 0x7C00);
}

#[test]
fn underflow_flushes_to_zero() {
    assert_eq!(encode(1e-5), 0x0000);
    assert_eq!(encode(-1e-5), 0x8000);
    assert_eq!(encode(2f64.powi(-14)), 0x0400);
    assert_eq!(encode(2f64.powi(-15)), 0x0000);
}

#[test]
fn mantissa_is_truncated_not_rounded() {
    // 1 + 1023.9/1024 would round up to 2.0 under round-to-nearest.
    let almost_two = 1.0 + 1023.9 / 1024.0;
    assert_eq!(encode(almost_two), 0x3FFF);
    assert_eq!(round(2049.0), 2048.0);
    assert_eq!(round(2050.0), 2050.0);
    assert_eq!(round(-2051.0), -2050.0);
}

#[test]
fn round_trip_error_is_bounded_by_mantissa_granularity() {
    let samples = [1.0, 1.1, 3.14159, 0.001, 0.3, 42.42, 1000.7, 12345.6, 65000.0, 7e-5];

    for x in samples {
        for value in [x, -x] {
            let rounded = round(value);
            let error = (value - rounded).abs();
            assert!(error <= value.abs() * 2f64.powi(-10),
                    "{value} rounded to {rounded}, error {error}");
            assert!(rounded.abs() <= value.abs(), "{value} rounded away from zero");
        }
    }
}

#[test]
fn decode_handles_every_exponent_class() {
    assert_eq!(decode(0x3C00), 1.0);
    assert_eq!(decode(0x7BFF), 65504.0);
    assert_eq!(decode(0x0400), 2f64.powi(-14));
    assert_eq!(decode(0x03FF), 1023.0 * 2f64.powi(-24));
    assert_eq!(decode(0x0001), 2f64.powi(-24));
    assert_eq!(decode(0x7C00), f64::INFINITY);
    assert!(decode(0x7E00).is_nan());
    assert_eq!(decode(0x0000), 0.0);
    assert!(decode(0x8000).is_sign_negative());
}

#[test]
fn every_normal_pattern_round_trips() {
    for bits in 0x0400..0x7C00_u16 {
        assert_eq!(encode(decode(bits)), bits);
        assert_eq!(encode(decode(bits | 0x8000)), bits | 0x8000);
    }
}

#[test]
fn half_reports_sign_and_infinity() {
    assert!(Half::from_f64(-1.5).is_sign_negative());
    assert!(!Half::from_f64(1.5).is_sign_negative());
    assert!(Half::INFINITY.is_infinite());
    assert!(!Half::from_bits(0x7BFF).is_infinite());
    assert_eq!(Half::default(), Half::ZERO);
    assert_eq!(Half::from_f64(3.5).to_string(), "3.5");
}
