// Expected-salary heuristic shared by every provider.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SalaryBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl SalaryBounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self { Self { lower, upper } }

    pub fn none() -> Self { Self::default() }

    pub fn estimate(&self) -> Option<i64> { estimate(self.lower, self.upper) }
}

/// Estimate the expected salary from an optional `from`/`to` range.
///
/// - both bounds: their mean
/// - only `from`: `from * 1.2`
/// - only `to`: `to * 0.8`
/// - neither: `None`
///
/// The arithmetic runs on the raw amounts and the result is truncated toward
/// zero; out-of-range results saturate. A bound of `0` counts as unset; job
/// boards use it for "not specified".
pub fn estimate(lower: Option<f64>, upper: Option<f64>) -> Option<i64> {
    let lower = lower.filter(|v| *v != 0.0);
    let upper = upper.filter(|v| *v != 0.0);
    let expected = match (lower, upper) {
        (Some(lo), Some(hi)) => (lo + hi) / 2.0,
        (Some(lo), None) => lo * 1.2,
        (None, Some(hi)) => hi * 0.8,
        (None, None) => return None,
    };
    Some(expected as i64)
}

/// Estimates of zero carry no information and are left out of averages.
pub fn usable_estimate(bounds: &SalaryBounds) -> Option<i64> {
    bounds.estimate().filter(|v| *v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_bounds_no_estimate() {
        assert_eq!(estimate(None, None), None);
        assert_eq!(estimate(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn single_bound_is_scaled() {
        assert_eq!(estimate(Some(100.0), None), Some(120));
        assert_eq!(estimate(None, Some(100.0)), Some(80));
        assert_eq!(estimate(Some(150_000.0), None), Some(180_000));
        assert_eq!(estimate(Some(-100.0), None), Some(-120));
    }

    #[test]
    fn both_bounds_average_truncates() {
        assert_eq!(estimate(Some(100.0), Some(200.0)), Some(150));
        assert_eq!(estimate(Some(100.0), Some(201.0)), Some(150));
        assert_eq!(estimate(Some(1.5), Some(2.5)), Some(2));
    }

    #[test]
    fn zero_bound_counts_as_missing() {
        assert_eq!(estimate(Some(0.0), Some(200.0)), estimate(None, Some(200.0)));
        assert_eq!(estimate(Some(200.0), Some(0.0)), estimate(Some(200.0), None));
    }

    #[test]
    fn zero_estimate_is_not_usable() {
        assert_eq!(SalaryBounds::new(None, Some(1.0)).estimate(), Some(0));
        assert_eq!(usable_estimate(&SalaryBounds::new(None, Some(1.0))), None);
        assert_eq!(usable_estimate(&SalaryBounds::new(Some(100.0), None)), Some(120));
    }

    #[test]
    fn huge_bounds_do_not_overflow() {
        let big = 9_000_000_000_000_000_000.0;
        assert_eq!(estimate(Some(big), Some(big)), Some(9_000_000_000_000_000_000));
        assert_eq!(estimate(Some(1e30), Some(1e30)), Some(i64::MAX));
        assert_eq!(estimate(Some(-1e30), None), Some(i64::MIN));
    }
}
