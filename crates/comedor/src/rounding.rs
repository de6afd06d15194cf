//! Fixed-decimal rounding for money, ratings, and coordinates.

/// Rounds to 2 decimal places (prices, totals, discount fractions).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 1 decimal place (ratings).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to 6 decimal places (coordinates).
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(123.456), 123.46);
        assert_eq!(round2(123.454), 123.45);
        assert_eq!(round2(1.005), 1.0); // binary 1.005 sits just below the midpoint
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(4.96), 5.0);
        assert_eq!(round1(1.04), 1.0);
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(14.123_456_789), 14.123_457);
    }
}
