//! Column-aligned text tables for compiled interval statistics.

use std::fmt;
use std::io;

use crate::collection::{merge, TimeStampCollection};
use crate::format::{fixed_width, format_mean_stdev, format_time};
use crate::label::Label;
use crate::output::OutputSink;
use crate::stats::Stats;

pub const REPORT_HEADER: &str = "========== stamped result ==========";
pub const REPORT_FOOTER: &str = "====================================";

/// One rendered pair of a report.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub from: String,
    pub to: String,
    pub stats: Stats,
    /// Share of the report's grand total, in percent. Zero when the grand
    /// total is zero.
    pub percentage: f64,
}

/// A report built in two passes: rows and column widths are collected first,
/// then every line is formatted against the same widths.
///
/// The printed percentage column is rounded by largest remainder to
/// `precision - 2` decimals, so it adds up to exactly 100 whenever the grand
/// total is positive. [`ReportRow::percentage`] keeps the unrounded share.
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<ReportRow>,
    grand_total: f64,
    precision: usize,
}

impl Report {
    /// Builds a report naming labels through [`Label::label_name`].
    pub fn new<L: Label>(collection: &TimeStampCollection<L>) -> Self {
        Self::with_names(collection, |label| label.label_name().into_owned())
    }

    /// Builds a report with a custom label-to-string function.
    pub fn with_names<L, F>(collection: &TimeStampCollection<L>, mut name_of: F) -> Self
    where
        L: Label,
        F: FnMut(&L) -> String,
    {
        let grand_total = collection.grand_total();
        let rows = collection
            .iter()
            .map(|((from, to), stats)| ReportRow {
                from: name_of(from),
                to: name_of(to),
                stats: *stats,
                percentage: percentage_of(stats.sum, grand_total),
            })
            .collect();
        Self {
            rows,
            grand_total,
            precision: 3,
        }
    }

    /// Significant digits used for every number in the table.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// The table lines without header and footer.
    pub fn lines(&self) -> Vec<String> {
        let from_width = self.rows.iter().map(|r| r.from.chars().count()).max().unwrap_or(0);
        let to_width = self.rows.iter().map(|r| r.to.chars().count()).max().unwrap_or(0);
        let count_width = self
            .rows
            .iter()
            .map(|r| r.stats.count.to_string().len())
            .max()
            .unwrap_or(0);

        let p = self.precision;
        let shares = apportion(
            self.rows.iter().map(|r| r.percentage),
            p.saturating_sub(2),
        );
        self.rows
            .iter()
            .zip(shares)
            .map(|(row, share)| {
                format!(
                    "{:<fw$} -> {:<tw$}: {} ({}~{}) [Σ^{:<cw$}={}|{}%]",
                    row.from,
                    row.to,
                    format_mean_stdev(row.stats.mean, row.stats.stdev, p),
                    format_time(row.stats.min, p),
                    format_time(row.stats.max, p),
                    row.stats.count,
                    format_time(row.stats.sum, p),
                    fixed_width(share, p),
                    fw = from_width,
                    tw = to_width,
                    cw = count_width,
                )
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", REPORT_FOOTER)
    }
}

fn percentage_of(part: f64, total: f64) -> f64 {
    if total > 0.0 && total.is_finite() {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Rounds percentages to `decimals` places so that they still sum to 100.
///
/// Each share is floored, then the missing units go to the largest remainders
/// (earlier rows win ties). All-zero input stays zero.
fn apportion(percentages: impl Iterator<Item = f64>, decimals: usize) -> Vec<f64> {
    let scale = 10f64.powi(decimals as i32);
    let scaled: Vec<f64> = percentages.map(|p| p * scale).collect();
    let mut units: Vec<f64> = scaled.iter().map(|v| v.floor()).collect();
    let assigned: f64 = units.iter().sum();
    if assigned == 0.0 && scaled.iter().all(|v| *v == 0.0) {
        return units;
    }
    let missing = ((100.0 * scale).round() - assigned).max(0.0) as usize;
    let mut order: Vec<usize> = (0..scaled.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = scaled[a] - units[a];
        let rb = scaled[b] - units[b];
        rb.total_cmp(&ra)
    });
    for &i in order.iter().take(missing) {
        units[i] += 1.0;
    }
    units.into_iter().map(|u| u / scale).collect()
}

/// Renders a collection to a string, header and footer included.
pub fn render<L: Label>(collection: &TimeStampCollection<L>) -> String {
    Report::new(collection).to_string()
}

/// Renders with a custom label-to-string function.
pub fn render_with<L, F>(collection: &TimeStampCollection<L>, name_of: F) -> String
where
    L: Label,
    F: FnMut(&L) -> String,
{
    Report::with_names(collection, name_of).to_string()
}

pub fn print_stamped_stats<L: Label>(
    collection: &TimeStampCollection<L>,
    sink: &OutputSink,
) -> io::Result<()> {
    sink.write_line(&render(collection))
}

/// Merges per-trial collections and prints the merged table.
pub fn print_aggregated_stamped_stats<L: Label>(
    collections: &[TimeStampCollection<L>],
    sink: &OutputSink,
) -> io::Result<()> {
    let merged = merge(collections);
    print_stamped_stats(&merged, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{compile, Observation};

    #[test]
    fn test_percentage_guard() {
        assert_eq!(percentage_of(1.0, 0.0), 0.0);
        assert_eq!(percentage_of(1.0, f64::NAN), 0.0);
        assert_eq!(percentage_of(1.0, 4.0), 25.0);
    }

    #[test]
    fn test_apportion_keeps_total() {
        let shares = apportion([100.0 / 6.0; 6].into_iter(), 1);
        assert_eq!(shares, vec![16.7, 16.7, 16.7, 16.7, 16.6, 16.6]);
        assert_eq!(apportion([100.0 / 3.0, 200.0 / 3.0].into_iter(), 1), vec![33.3, 66.7]);
        assert_eq!(apportion([0.0, 0.0].into_iter(), 1), vec![0.0, 0.0]);
    }

    #[test]
    fn test_columns_are_aligned() {
        let observations = vec![
            Observation::new("short".to_string(), "x".to_string(), 0.001),
            Observation::new("x".to_string(), "a_longer_label".to_string(), 0.002),
        ];
        let report = Report::new(&compile(&observations));
        let lines = report.lines();
        let arrows: Vec<_> = lines.iter().map(|l| l.find(" -> ")).collect();
        assert_eq!(arrows[0], arrows[1]);
        let colons: Vec<_> = lines.iter().map(|l| l.find(": ")).collect();
        assert_eq!(colons[0], colons[1]);
    }
}
