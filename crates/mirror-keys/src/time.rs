//! Timestamp helpers.

use std::time::Duration;

use crate::error::{MirrorError, Result};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Combine a seconds value and a nanoseconds value into nanoseconds since epoch.
///
/// `seconds` is a decimal string and may carry up to nine fractional digits
/// (`"1568411631.396440000"`). Arithmetic is exact.
pub fn sec_ns_to_ns(seconds: &str, nanos: &str) -> Result<i64> {
    let seconds = seconds.trim();
    let invalid = || MirrorError::InvalidTimestamp(format!("{}s + {}ns", seconds, nanos.trim()));

    let (negative, unsigned) = match seconds.as_bytes().first() {
        Some(b'-') => (true, &seconds[1..]),
        Some(b'+') => (false, &seconds[1..]),
        _ => (false, seconds),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 9 {
        return Err(invalid());
    }

    let whole: i128 = whole.parse().map_err(|_| invalid())?;
    let fraction: i128 = if fraction.is_empty() {
        0
    } else {
        let scale = 10i128.pow(9 - fraction.len() as u32);
        fraction.parse::<i128>().map_err(|_| invalid())? * scale
    };
    let extra: i128 = nanos.trim().parse().map_err(|_| invalid())?;

    let magnitude = whole
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|n| n.checked_add(fraction))
        .ok_or_else(invalid)?;
    let signed = if negative { -magnitude } else { magnitude };
    let total = signed.checked_add(extra).ok_or_else(invalid)?;

    i64::try_from(total).map_err(|_| invalid())
}

/// Render an elapsed duration as `"{secs} s {millis} ms"`, where `millis`
/// is the sub-second remainder in fractional milliseconds.
pub fn elapsed_time_string(elapsed: Duration) -> String {
    let millis = f64::from(elapsed.subsec_nanos()) / 1_000_000.0;
    format!("{} s {} ms", elapsed.as_secs(), millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_seconds() {
        assert_eq!(sec_ns_to_ns("1568411631", "0").unwrap(), 1_568_411_631_000_000_000);
        assert_eq!(sec_ns_to_ns("1568411631", "396440000").unwrap(), 1_568_411_631_396_440_000);
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(
            sec_ns_to_ns("1568411631.396440000", "0").unwrap(),
            1_568_411_631_396_440_000
        );
        assert_eq!(sec_ns_to_ns("1.5", "1").unwrap(), 1_500_000_001);
    }

    #[test]
    fn test_signs_and_whitespace() {
        assert_eq!(sec_ns_to_ns(" -2 ", "0").unwrap(), -2_000_000_000);
        assert_eq!(sec_ns_to_ns("+3", " 7 ").unwrap(), 3_000_000_007);
    }

    #[test]
    fn test_rejects_malformed() {
        for (s, n) in [("", "0"), ("abc", "0"), ("1.2.3", "0"), ("1", "x"), ("1.0000000001", "0"), (".5", "0")] {
            assert!(
                matches!(sec_ns_to_ns(s, n), Err(MirrorError::InvalidTimestamp(_))),
                "{:?} {:?} should fail",
                s,
                n
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(sec_ns_to_ns("9223372037", "0").is_err());
        assert!(sec_ns_to_ns("9223372036", "854775807").is_ok());
        assert!(sec_ns_to_ns("9223372036", "854775808").is_err());
    }

    #[test]
    fn test_elapsed_time_string() {
        assert_eq!(elapsed_time_string(Duration::new(1, 2_500_000)), "1 s 2.5 ms");
        assert_eq!(elapsed_time_string(Duration::from_secs(3)), "3 s 0 ms");
        assert_eq!(elapsed_time_string(Duration::from_millis(12)), "0 s 12 ms");
    }
}
