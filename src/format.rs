//! Human readable number and duration formatting.
//!
//! Magnitudes are scaled to an SI prefix chosen from half-open intervals on
//! powers of 1000: a value stays in the current unit until it reaches the
//! threshold of the next one. The prefix is found with a binary search over
//! precomputed thresholds.

/// Scale factor and prefix for each unit, smallest first.
const SI_UNITS: [(f64, &str); 7] = [
    (1e9, "n"),
    (1e6, "µ"),
    (1e3, "m"),
    (1.0, ""),
    (1e-3, "k"),
    (1e-6, "M"),
    (1e-9, "G"),
];

/// `SI_UNITS[i]` applies to values in `[THRESHOLDS[i], THRESHOLDS[i + 1])`.
const THRESHOLDS: [f64; 8] = [f64::MIN_POSITIVE, 1e-6, 1e-3, 1.0, 1e3, 1e6, 1e9, f64::MAX];

const BASE_UNIT: usize = 3;

/// Returns the multiplicative factor and SI prefix for `value`.
///
/// Values below the smallest threshold (including zero) use the smallest
/// unit, values above the largest use the largest. NaN keeps the base unit.
///
/// ```
/// # use sxs_toolbox::format::si_unit_and_factor;
/// assert_eq!(si_unit_and_factor(999.0).1, "");
/// assert_eq!(si_unit_and_factor(1000.0).1, "k");
/// assert_eq!(si_unit_and_factor(2.5e-4).1, "µ");
/// ```
pub fn si_unit_and_factor(value: f64) -> (f64, &'static str) {
    if value.is_nan() {
        return SI_UNITS[BASE_UNIT];
    }
    let magnitude = value.abs();
    let upper = THRESHOLDS.partition_point(|&threshold| threshold <= magnitude);
    let index = upper.saturating_sub(1).min(SI_UNITS.len() - 1);
    SI_UNITS[index]
}

/// Factor and unit string (`"ms"`, `"µs"`, ...) for a duration in seconds.
///
/// With `fix_width` the bare seconds unit is padded to `" s"` so every unit
/// occupies two columns.
pub fn time_factor_and_unit(elapsed: f64, fix_width: bool) -> (f64, String) {
    let (factor, prefix) = si_unit_and_factor(elapsed);
    let prefix = if fix_width && prefix.is_empty() { " " } else { prefix };
    (factor, format!("{}s", prefix))
}

/// Formats `value` with `precision` significant digits, the way a C++ stream
/// does with `std::setprecision` in its default float mode.
///
/// ```
/// # use sxs_toolbox::format::format_significant;
/// assert_eq!(format_significant(12.345, 3), "12.3");
/// assert_eq!(format_significant(0.5, 3), "0.5");
/// assert_eq!(format_significant(100.0, 3), "100");
/// assert_eq!(format_significant(1234.0, 3), "1.23e+03");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let precision = precision.max(1);

    // Let the scientific formatter do the rounding, then read back the exponent.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (scientific.clone(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(&mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Significant-digit formatting, left aligned in `precision + 1` columns.
pub fn fixed_width(value: f64, precision: usize) -> String {
    format!(
        "{:<width$}",
        format_significant(value, precision),
        width = precision + 1
    )
}

/// Formats a duration in seconds with an automatically chosen unit.
///
/// ```
/// # use sxs_toolbox::format::format_time;
/// assert_eq!(format_time(0.0025, 3), "2.5 ms");
/// assert_eq!(format_time(1.5, 3), "1.5  s");
/// ```
pub fn format_time(elapsed: f64, precision: usize) -> String {
    let (factor, unit) = time_factor_and_unit(elapsed, true);
    format!("{}{}", fixed_width(elapsed * factor, precision), unit)
}

/// Formats a `mean±stdev` pair; the unit is chosen from the mean and applied
/// to both numbers.
pub fn format_mean_stdev(mean: f64, stdev: f64, precision: usize) -> String {
    let (factor, unit) = time_factor_and_unit(mean, true);
    format!(
        "{}±{}{}",
        fixed_width(mean * factor, precision),
        fixed_width(stdev * factor, precision),
        unit
    )
}

/// Formats an arbitrary magnitude with an SI prefix (`1.5k`, `20M`, `3m`).
pub fn format_readable(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let (factor, prefix) = si_unit_and_factor(value);
    format!("{}{}", format_significant(value * factor, precision), prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor_of(value: f64) -> f64 {
        si_unit_and_factor(value).0
    }

    #[test]
    fn test_boundaries_are_half_open() {
        assert_eq!(factor_of(1.0), 1.0);
        assert_eq!(factor_of(999.0), 1.0);
        assert_eq!(factor_of(1000.0), 1e-3);
        assert_eq!(factor_of(1e6 - 1.0), 1e-3);
        assert_eq!(factor_of(1e6), 1e-6);
        assert_eq!(factor_of(0.001), 1e3);
        assert_eq!(factor_of(0.001 - 0.00000001), 1e6);
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        assert_eq!(si_unit_and_factor(2.5e59).1, "G");
        assert_eq!(si_unit_and_factor(2.5e-59).1, "n");
        assert_eq!(si_unit_and_factor(0.0).1, "n");
        assert_eq!(si_unit_and_factor(f64::NAN).1, "");
    }

    #[test]
    fn test_time_units() {
        assert_eq!(time_factor_and_unit(1.0, false).1, "s");
        assert_eq!(time_factor_and_unit(1.0, true).1, " s");
        assert_eq!(time_factor_and_unit(2e-3, false).1, "ms");
        assert_eq!(time_factor_and_unit(2e-6, false).1, "µs");
        assert_eq!(time_factor_and_unit(200e-6, false).1, "µs");
        assert_eq!(time_factor_and_unit(1000e-6, false).1, "ms");
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(format_significant(2.0, 3), "2");
        assert_eq!(format_significant(33.3333, 3), "33.3");
        assert_eq!(format_significant(0.000123456, 3), "0.000123");
        assert_eq!(format_significant(0.0000123, 3), "1.23e-05");
        assert_eq!(format_significant(-4.567, 2), "-4.6");
        assert_eq!(format_significant(f64::NAN, 3), "nan");
    }

    #[test]
    fn test_mean_stdev_shares_unit() {
        assert_eq!(format_mean_stdev(0.002, 0.0005, 3), "2   ±0.5 ms");
    }

    #[test]
    fn test_readable() {
        assert_eq!(format_readable(1500.0, 3), "1.5k");
        assert_eq!(format_readable(2.5e6, 3), "2.5M");
        assert_eq!(format_readable(42.0, 3), "42");
        assert_eq!(format_readable(0.0, 3), "0");
    }
}
