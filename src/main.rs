use std::thread;
use std::time::Duration;

use sxs_toolbox::logging::{self, LogConfig, Verbosity};
use sxs_toolbox::{define_tokens, timeit, Context, DynamicStamper, Result, TimeStamper};

define_tokens! {
    enum Step { Setup, Compute, Cleanup }
}

fn main() -> Result<()> {
    let _log = logging::init(LogConfig {
        verbosity: Verbosity::Info,
        prefix: Some("demo".into()),
        ..Default::default()
    })?;
    let ctx = Context::new();

    {
        let mut stamper = DynamicStamper::new("string labels");
        for i in 0..4 {
            stamper.stamp("A");
            thread::sleep(Duration::from_millis(2 + i));
            stamper.stamp("B");
            thread::sleep(Duration::from_millis(1));
        }
    }

    {
        let mut stamper = TimeStamper::<Step>::new("token labels");
        stamper.stamp(Step::Setup);
        thread::sleep(Duration::from_millis(3));
        stamper.stamp(Step::Compute);
        thread::sleep(Duration::from_millis(10));
        stamper.stamp(Step::Cleanup);
    }

    let counters = ctx.thread_counters();
    for _ in 0..10 {
        counters.increment("iterations")?;
    }
    counters.add("cost", 0.25f64)?;
    ctx.output().write_line(&format!("counters: {}", counters))?;

    ctx.storage().store("answer", 42i64);
    ctx.storage().store("name", String::from("sxs"));
    ctx.storage().print_stored_info(ctx.output())?;

    timeit("sum 0..1000", || (0..1000u64).sum::<u64>(), ctx.output())?;
    Ok(())
}
