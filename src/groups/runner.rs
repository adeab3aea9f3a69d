//! # Run a single child of a group.
//!
//! Executes one child [`Task`], publishing lifecycle events to the group's
//! [`Bus`] when one is attached.
//!
//! ## Event flow
//!
//! ```text
//! Success:
//!   task.run() → Ok(())  → publish TaskStopped
//!
//! Failure:
//!   task.run() → Err(e)  → publish TaskFailed
//! ```
//!
//! ## Rules
//! - Publishes `TaskStarting` before the child runs.
//! - Always publishes **exactly one** terminal event: `TaskStopped` or `TaskFailed`.
//! - The child's result is returned unchanged; publishing never alters it.

use crate::{
    error::TaskError,
    events::{Bus, Event, EventKind},
    tasks::Task,
};

/// Executes one child of a group, publishing lifecycle events to `bus`.
///
/// With no bus attached this is exactly `task.run()`.
pub(crate) async fn run_child<T: Task + ?Sized>(
    task: &T,
    bus: Option<&Bus>,
) -> Result<(), TaskError> {
    if let Some(bus) = bus {
        publish_starting(bus, task.name());
    }

    match task.run().await {
        Ok(()) => {
            if let Some(bus) = bus {
                publish_stopped(bus, task.name());
            }
            Ok(())
        }
        Err(e) => {
            if let Some(bus) = bus {
                publish_failed(bus, task.name(), &e);
            }
            Err(e)
        }
    }
}

/// Publishes `TaskStarting`.
fn publish_starting(bus: &Bus, name: &str) {
    bus.publish(Event::new(EventKind::TaskStarting).with_task(name));
}

/// Publishes `TaskStopped`.
fn publish_stopped(bus: &Bus, name: &str) {
    bus.publish(Event::new(EventKind::TaskStopped).with_task(name));
}

/// Publishes `TaskFailed` with error details.
fn publish_failed(bus: &Bus, name: &str, err: &TaskError) {
    bus.publish(
        Event::new(EventKind::TaskFailed)
            .with_task(name)
            .with_reason(err.as_message()),
    );
}
