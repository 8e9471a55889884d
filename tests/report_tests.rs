use sxs_toolbox::collection::{compile, merge, Observation};
use sxs_toolbox::report::{render_with, REPORT_FOOTER, REPORT_HEADER};
use sxs_toolbox::{print_aggregated_stamped_stats, render, OutputSink, Report};

fn obs(from: &'static str, to: &'static str, duration: f64) -> Observation<&'static str> {
    Observation::new(from, to, duration)
}

#[test]
fn test_percentages_sum_to_hundred() {
    let observations = vec![
        obs("a", "b", 0.002),
        obs("b", "c", 0.006),
        obs("c", "a", 0.001),
        obs("a", "b", 0.001),
    ];
    let report = Report::new(&compile(&observations));
    let total: f64 = report.rows().iter().map(|r| r.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9, "Percentages should add up to 100, got {}", total);
    assert!((report.rows()[1].percentage - 60.0).abs() < 1e-9);
}

#[test]
fn test_printed_percentages_sum_to_hundred() {
    let labels = ["a", "b", "c", "d", "e", "f", "g"];
    let observations: Vec<_> = labels.windows(2).map(|w| obs(w[0], w[1], 0.001)).collect();
    let table = render(&compile(&observations));

    let printed: Vec<f64> = table
        .lines()
        .filter_map(|line| {
            let start = line.rfind('|')? + 1;
            let end = line.rfind("%]")?;
            line[start..end].trim().parse().ok()
        })
        .collect();
    assert_eq!(printed.len(), 6);
    let total: f64 = printed.iter().sum();
    assert!((total - 100.0).abs() < 1e-9, "Printed column should add up to 100, got {}", total);
    assert!(table.contains("|16.7%]") && table.contains("|16.6%]"));
}

#[test]
fn test_zero_total_gives_zero_percent() {
    let observations = vec![obs("a", "b", 0.0)];
    let report = Report::new(&compile(&observations));
    assert_eq!(report.grand_total(), 0.0);
    assert_eq!(report.rows()[0].percentage, 0.0, "Zero grand total should not produce NaN");
    assert!(report.to_string().contains("|0   %]"));
}

#[test]
fn test_render_line_layout() {
    let observations = vec![obs("load", "solve", 0.002), obs("solve", "load", 0.004)];
    let table = render(&compile(&observations));
    let lines: Vec<_> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], REPORT_HEADER);
    assert_eq!(lines[3], REPORT_FOOTER);
    assert!(lines[1].starts_with("load  -> solve: 2   ±0   ms"), "got {}", lines[1]);
    assert!(lines[1].contains("[Σ^1=2   ms|33.3%]"), "got {}", lines[1]);
    assert!(lines[2].contains("[Σ^1=4   ms|66.7%]"), "got {}", lines[2]);
}

#[test]
fn test_render_with_custom_names() {
    let observations = vec![Observation::new(1u8, 2u8, 1.0)];
    let table = render_with(&compile(&observations), |label| format!("step{}", label));
    assert!(table.contains("step1 -> step2: "));
}

#[test]
fn test_empty_collection_renders_frame_only() {
    let table = render(&compile(std::iter::empty::<&Observation<String>>()));
    assert_eq!(table, format!("{}\n{}", REPORT_HEADER, REPORT_FOOTER));
}

#[test]
fn test_merge_combines_counts_and_extremes() {
    let first = compile(&vec![obs("a", "b", 1.0), obs("a", "b", 3.0)]);
    let second = compile(&vec![obs("a", "b", 5.0), obs("b", "a", 2.0)]);
    let merged = merge([&first, &second]);

    let ab = merged.get(&"a", &"b").unwrap();
    assert_eq!(ab.count, 3);
    assert_eq!(ab.sum, 9.0);
    assert_eq!(ab.min, 1.0);
    assert_eq!(ab.max, 5.0);
    assert_eq!(ab.mean, 3.0);
    // Spread of the trial means (2.0 and 5.0) around the merged mean 3.0.
    assert!((ab.stdev - 5.0f64.sqrt()).abs() < 1e-12);

    let ba = merged.get(&"b", &"a").unwrap();
    assert_eq!(ba.count, 1);
    assert_eq!(ba.stdev, 0.0);
}

#[test]
fn test_merge_preserves_first_seen_order() {
    let first = compile(&vec![obs("x", "y", 1.0)]);
    let second = compile(&vec![obs("y", "z", 1.0), obs("z", "x", 1.0)]);
    let merged = merge(&[first, second]);
    let keys: Vec<_> = merged.keys().cloned().collect();
    assert_eq!(keys, vec![("x", "y"), ("y", "z"), ("z", "x")]);
}

#[test]
fn test_print_aggregated_stats() {
    let trials: Vec<_> = (1..=3)
        .map(|i| compile(&vec![obs("a", "b", 0.001 * i as f64)]))
        .collect();
    let sink = OutputSink::buffer();
    print_aggregated_stamped_stats(&trials, &sink).unwrap();
    let output = sink.contents();
    assert!(output.contains("a -> b: 2   ±1   ms"), "got {}", output);
    assert!(output.contains("[Σ^3=6   ms|100 %]"), "got {}", output);
}
