use sxs_toolbox::strings::{count, join, pretty_type_name, split, split_if_not_inside};
use sxs_toolbox::timeit::{timeit_plan, TimeitPlan};
use sxs_toolbox::{timeit, OutputSink};

#[test]
fn test_timeit_output_frame() {
    let sink = OutputSink::buffer();
    let summary = timeit("vec", || vec![0u8; 64], &sink).unwrap();
    let output = sink.contents();
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].chars().all(|c| c == '='));
    assert_eq!(lines[0], lines[2]);
    assert!(lines[1].starts_with(&format!("[vec]: Loop: {} | Total time: ", summary.loops)));
    assert!(lines[1].contains(" | Avg: "));
    assert!(lines[1].contains(" ~ "));
    assert!((summary.average() * summary.loops as f64 - summary.total).abs() < 1e-12);
}

#[test]
fn test_timeit_plan_tiers() {
    assert_eq!(timeit_plan(100.0), TimeitPlan::Stop);
    assert_eq!(timeit_plan(20.0), TimeitPlan::Runs(5));
    assert_eq!(timeit_plan(5.0), TimeitPlan::Runs(10));
    assert_eq!(timeit_plan(0.2), TimeitPlan::Runs(20));
    assert_eq!(timeit_plan(0.02), TimeitPlan::Runs(100));
    assert_eq!(timeit_plan(0.0), TimeitPlan::Micro);
}

#[test]
fn test_string_helpers() {
    assert_eq!(split("a,b,,c", ","), vec!["a", "b", "", "c"]);
    assert_eq!(
        split_if_not_inside("f(a, b), g(c), d", ',', '(', ')'),
        vec!["f(a, b)", " g(c)", " d"]
    );
    assert_eq!(join(&split("x-y-z", "-"), "+"), "x+y+z");
    assert_eq!(count("the cat the hat", "the"), 2);
}

#[test]
fn test_pretty_type_names() {
    assert_eq!(pretty_type_name::<Option<String>>(), "Option<String>");
    assert_eq!(
        pretty_type_name::<std::collections::HashMap<String, Vec<u8>>>(),
        "HashMap<String, Vec<u8>>"
    );
    assert_eq!(pretty_type_name::<(i32, f64)>(), "(i32, f64)");
}
