//! Weighted aggregation shared by every rollup level
//!
//! Assessment scores roll up into module grades, module grades into year
//! averages, and year averages into the overall average. All three use the
//! same weighted mean defined here.
//!
//! Weight policy: a negative or non-finite weight is clamped to zero, and a
//! pair whose value is non-finite is ignored. An empty input, or one whose
//! effective weights sum to zero, has no average (`None`), which callers must
//! keep distinct from a genuine 0% average.

/// Clamp a raw weight to the range the aggregator accepts.
///
/// Negative and non-finite weights become `0.0`.
#[must_use]
pub fn effective_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Running weighted sum.
///
/// Useful when the caller needs both the average and the total weight that
/// produced it (the module calculator reports graded weighting separately).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedSum {
    /// Sum of `value * weight` over accepted pairs
    pub weighted_total: f64,
    /// Sum of effective weights over accepted pairs
    pub total_weight: f64,
}

impl WeightedSum {
    /// Empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weighted_total: 0.0,
            total_weight: 0.0,
        }
    }

    /// Add one `(value, weight)` pair, applying the weight policy
    pub fn add(&mut self, value: f64, weight: f64) {
        if !value.is_finite() {
            return;
        }
        let weight = effective_weight(weight);
        if weight <= 0.0 {
            return;
        }
        self.weighted_total += value * weight;
        self.total_weight += weight;
    }

    /// The weighted mean, or `None` when no weight was accepted
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.total_weight > 0.0 {
            Some(self.weighted_total / self.total_weight)
        } else {
            None
        }
    }
}

impl FromIterator<(f64, f64)> for WeightedSum {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut sum = Self::new();
        for (value, weight) in iter {
            sum.add(value, weight);
        }
        sum
    }
}

/// Compute `sum(value * weight) / sum(weight)` over `(value, weight)` pairs.
///
/// Returns `None` for an empty sequence or when the effective total weight is
/// zero.
///
/// # Examples
///
/// ```
/// use grade_tracker::core::aggregate::weighted_average;
///
/// let avg = weighted_average([(72.0, 20.0), (58.0, 20.0)]);
/// assert_eq!(avg, Some(65.0));
/// assert_eq!(weighted_average(std::iter::empty::<(f64, f64)>()), None);
/// ```
pub fn weighted_average<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    pairs.into_iter().collect::<WeightedSum>().average()
}

/// Sum of effective weights
pub fn total_weight<I>(weights: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    weights.into_iter().map(effective_weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_simple_weighted_average() {
        let avg = weighted_average([(80.0, 1.0), (60.0, 3.0)]).unwrap();
        assert!((avg - 65.0).abs() < EPS);
    }

    #[test]
    fn test_empty_is_undefined() {
        assert_eq!(weighted_average(Vec::<(f64, f64)>::new()), None);
    }

    #[test]
    fn test_zero_total_weight_is_undefined() {
        assert_eq!(weighted_average([(90.0, 0.0), (10.0, 0.0)]), None);
    }

    #[test]
    fn test_zero_average_is_not_undefined() {
        assert_eq!(weighted_average([(0.0, 10.0)]), Some(0.0));
    }

    #[test]
    fn test_negative_weight_is_clamped_to_zero() {
        let avg = weighted_average([(70.0, 10.0), (10.0, -50.0)]).unwrap();
        assert!((avg - 70.0).abs() < EPS);

        assert_eq!(weighted_average([(50.0, -1.0)]), None);
    }

    #[test]
    fn test_non_finite_inputs_are_ignored() {
        let avg = weighted_average([(f64::NAN, 10.0), (60.0, 10.0), (40.0, f64::INFINITY)]).unwrap();
        assert!((avg - 60.0).abs() < EPS);
    }

    #[test]
    fn test_result_is_bounded_by_inputs() {
        let cases: [&[(f64, f64)]; 4] = [
            &[(10.0, 1.0), (90.0, 2.0), (55.0, 0.5)],
            &[(3.7, 4.0), (2.0, 3.0)],
            &[(100.0, 0.01), (0.0, 1000.0)],
            &[(42.0, 7.0)],
        ];

        for pairs in cases {
            let avg = weighted_average(pairs.iter().copied()).unwrap();
            let min = pairs.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
            let max = pairs.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
            assert!(avg >= min - EPS && avg <= max + EPS, "{avg} outside [{min}, {max}]");
        }
    }

    #[test]
    fn test_weighted_sum_tracks_total_weight() {
        let sum: WeightedSum = [(68.0, 40.0), (50.0, -5.0)].into_iter().collect();
        assert!((sum.total_weight - 40.0).abs() < EPS);
        assert!((sum.weighted_total - 2720.0).abs() < EPS);
    }

    #[test]
    fn test_total_weight_clamps() {
        assert!((total_weight([40.0, -10.0, 60.0, f64::NAN]) - 100.0).abs() < EPS);
    }
}
