//! # Build-preparation pipeline
//!
//! Demonstrates basic taskgroup features:
//! - Ordered branches nested under a parallel group
//! - Lifecycle events via Bus + SubscriberSet + LogWriter
//! - Arity-shaped failure aggregation

use std::sync::Arc;
use std::time::Duration;

use taskgroup::{
    ordered, Bus, LogWriter, Parallel, Subscribe, SubscriberSet, Task, TaskError, TaskFn,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let bus = Bus::default();
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
    let set = Arc::new(SubscriberSet::new(subs));
    let _listener = Arc::clone(&set).listen(&bus);

    // Two ordered branches, raced against each other. Intra-branch order is
    // preserved; the branches interleave freely.
    let checkout = ordered(vec![
        TaskFn::arc("fetch", || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(())
        }),
        TaskFn::arc("unpack", || async { Ok(()) }),
    ]);
    let toolchain = ordered(vec![
        TaskFn::arc("resolve", || async { Ok(()) }),
        TaskFn::arc("warm-cache", || async { Ok(()) }),
    ]);

    let prepare = Parallel::new(vec![checkout, toolchain])
        .with_name("prepare")
        .with_bus(bus.clone());
    prepare.run().await?;
    println!("prepare succeeded");

    // A failing group: both children still run to completion, and their
    // failures come back as one aggregate.
    let checks = Parallel::new(vec![
        TaskFn::arc("lint", || async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Err(TaskError::fail("lint: two warnings"))
        }),
        TaskFn::arc("unit-tests", || async {
            Err(TaskError::fail("unit-tests: 3 failed"))
        }),
    ])
    .with_name("checks")
    .with_bus(bus.clone());

    if let Err(e) = checks.run().await {
        println!("checks failed: {e}");
        for cause in e.errors() {
            println!("  - {cause}");
        }
    }

    // Give the subscriber worker a moment to drain before exiting.
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}
