//! Two-decimal rounding of monetary amounts

/// Added before rounding so true half-cent values round up instead of
/// landing just below the midpoint in binary floating point
pub const HALF_CENT_EPSILON: f64 = 1e-9;

/// Round to two decimal places, halves away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to two decimal places after adding [`HALF_CENT_EPSILON`]
pub fn round_cents_biased(value: f64) -> f64 {
    round_cents(value + HALF_CENT_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(610.3914826640041), 610.39);
        assert_eq!(round_cents(152.59787066600103), 152.6);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_biased_rounding_pushes_half_cent_up() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round_cents(1.005), 1.0);
        assert_eq!(round_cents_biased(1.005), 1.01);
        assert_eq!(round_cents_biased(2.675), 2.68);
    }

    #[test]
    fn test_biased_rounding_leaves_ordinary_values() {
        assert_eq!(round_cents_biased(36.4963503649635), 36.5);
        assert_eq!(round_cents_biased(99_999.99999999999), 100_000.0);
        assert_eq!(round_cents_biased(0.004), 0.0);
    }
}
