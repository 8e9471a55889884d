use std::env;
use std::hint::black_box;

use sxs_toolbox::{
    print_aggregated_stamped_stats, DynamicStamper, OutputSink, StamperConfig, TimeStampCollection,
};

fn workload(size: u64) -> u64 {
    (0..size).map(|x| x.wrapping_mul(x) % 7).sum()
}

fn run_trial() -> TimeStampCollection<String> {
    let mut stamper = DynamicStamper::with_config(
        "trial",
        StamperConfig {
            auto_print: false,
            ..Default::default()
        },
    );
    for round in 0..20u64 {
        stamper.stamp("start");
        black_box(workload(10_000 + round * 500));
        stamper.stamp("small");
        black_box(workload(100_000));
        stamper.stamp("large");
    }
    stamper.compile()
}

fn main() -> std::io::Result<()> {
    let num_trials = env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    println!("Running {} trials...", num_trials);

    let trials: Vec<_> = (1..=num_trials)
        .map(|i| {
            let collection = run_trial();
            println!("Trial {}/{}: {} pairs", i, num_trials, collection.len());
            collection
        })
        .collect();

    print_aggregated_stamped_stats(&trials, &OutputSink::stdout())
}
