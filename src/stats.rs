//! Descriptive statistics for interval observations.

/// Sum of all values.
pub fn compute_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Sample standard deviation (n - 1 denominator) around a precomputed mean.
///
/// A single value has a deviation of exactly zero; an empty slice has none
/// and yields NaN.
///
/// ```
/// # use sxs_toolbox::stats::compute_stdev;
/// assert_eq!(compute_stdev(4.0, &[4.0]), 0.0);
/// assert!(compute_stdev(0.0, &[]).is_nan());
/// ```
pub fn compute_stdev(mean: f64, values: &[f64]) -> f64 {
    match values.len() {
        0 => f64::NAN,
        1 => 0.0,
        n => {
            let accum: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (accum / (n - 1) as f64).sqrt()
        }
    }
}

/// Mean and sample standard deviation of `values`.
pub fn compute_mean_and_stdev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let mean = compute_sum(values) / values.len() as f64;
    (mean, compute_stdev(mean, values))
}

/// Statistics for one `(from, to)` label pair.
///
/// `count == 0` leaves `mean` and `stdev` as NaN. Once at least one duration
/// has been folded in, `min <= mean <= max` and `sum == mean * count` up to
/// floating point error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: usize,
    pub mean: f64,
    pub stdev: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
            mean: f64::NAN,
            stdev: f64::NAN,
        }
    }
}

impl Stats {
    /// Stats of a complete sample, computed in one go.
    pub fn from_values(values: &[f64]) -> Self {
        let mut stats = Self::default();
        for &value in values {
            stats.observe(value);
        }
        stats.count = values.len();
        if !values.is_empty() {
            stats.mean = stats.sum / stats.count as f64;
            stats.stdev = compute_stdev(stats.mean, values);
        }
        stats
    }

    /// Folds one value into min, max and sum. Count, mean and stdev are left
    /// for the caller's second pass.
    pub(crate) fn observe(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
    }

    pub fn mean_stdev(&self) -> (f64, f64) {
        (self.mean, self.stdev)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Combines min, max, count and sum of `rhs` into `self` without touching
    /// mean or stdev.
    pub fn accumulate_without_mean_stdev(&mut self, rhs: &Stats) {
        self.min = self.min.min(rhs.min);
        self.max = self.max.max(rhs.max);
        self.count += rhs.count;
        self.sum += rhs.sum;
    }

    /// Combines two groups exactly, using the pooled variance of both samples.
    ///
    /// This is a standalone helper; collection merging deliberately uses the
    /// trial-mean approximation instead (see [`crate::collection::merge`]).
    pub fn accumulate_standard(&mut self, rhs: &Stats) {
        if rhs.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *rhs;
            return;
        }
        let n1 = self.count as f64;
        let n2 = rhs.count as f64;
        let total = n1 + n2;
        let mean = (self.mean * n1 + rhs.mean * n2) / total;

        let ss1 = (n1 - 1.0) * self.stdev.powi(2);
        let ss2 = (n2 - 1.0) * rhs.stdev.powi(2);
        let between = n1 * n2 / total * (self.mean - rhs.mean).powi(2);
        let variance = (ss1 + ss2 + between) / (total - 1.0);

        self.accumulate_without_mean_stdev(rhs);
        self.mean = mean;
        self.stdev = variance.sqrt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_int_like_values() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_sum(&v), 15.0);
        let (mean, stdev) = compute_mean_and_stdev(&v);
        assert_eq!(mean, 3.0);
        assert!(approx(stdev, 1.5811388301));
    }

    #[test]
    fn test_double_values() {
        let v = [1.5, 2.9, 33.4];
        let (mean, stdev) = compute_mean_and_stdev(&v);
        assert!(approx(mean, 37.8 / 3.0));
        assert!((stdev - 18.0269243078).abs() < 1e-8);
        assert!(approx(compute_stdev(compute_sum(&v) / 3.0, &v), stdev));
    }

    #[test]
    fn test_default_is_undefined() {
        let stats = Stats::default();
        assert!(stats.is_empty());
        assert!(stats.mean.is_nan());
        assert!(stats.stdev.is_nan());
    }

    #[test]
    fn test_accumulate_standard_matches_full_sample() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0];
        let mut left = Stats::from_values(&a);
        left.accumulate_standard(&Stats::from_values(&b));

        let all = Stats::from_values(&[1.0, 2.0, 3.0, 10.0, 20.0]);
        assert_eq!(left.count, 5);
        assert!(approx(left.mean, all.mean));
        assert!(approx(left.stdev, all.stdev));
        assert_eq!(left.min, 1.0);
        assert_eq!(left.max, 20.0);
    }

    #[test]
    fn test_accumulate_standard_into_empty() {
        let mut empty = Stats::default();
        let single = Stats::from_values(&[2.0]);
        empty.accumulate_standard(&single);
        assert_eq!(empty, single);
    }
}
