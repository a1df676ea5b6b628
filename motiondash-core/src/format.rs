/// Enough fractional digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1100;

/// Formats `value` with `digits` decimals, rounding exact ties away from zero.
///
/// `{:.N}` rounds a value that sits exactly halfway to the even neighbour
/// (`0.25` -> `0.2`); display readouts round it up instead (`0.25` -> `0.3`).
/// Values that are only close to a tie keep their exact binary value, so
/// `0.15` (stored slightly below) still gives `0.1`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let rounded = if is_exact_tie(magnitude, digits) {
        let scale = 10f64.powi(digits as i32);
        (magnitude * scale).ceil() / scale
    } else {
        magnitude
    };
    format!("{sign}{rounded:.digits$}")
}

fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let Some(rest) = fraction.get(digits..) else {
        return false;
    };
    let mut rest = rest.chars();
    rest.next() == Some('5') && rest.all(|ch| ch == '0')
}

#[cfg(test)]
mod tests {
    use super::to_fixed;

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.25, 1), "2.3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
    }

    #[test]
    fn near_ties_use_the_stored_value() {
        assert_eq!(to_fixed(0.15, 1), "0.1");
        assert_eq!(to_fixed(48.37, 1), "48.4");
        assert_eq!(to_fixed(500.0, 0), "500");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(-0.0, 1), "0.0");
    }
}
