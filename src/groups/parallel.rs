//! # Parallel group: concurrent, failure-aggregating composition.
//!
//! [`Parallel`] runs all of its children concurrently and waits for every
//! one of them to finish, regardless of how many failed. Collected failures
//! are combined by arity (see [`TaskError::combine`]): none is success, a
//! lone failure is returned unwrapped, two or more become an aggregate
//! joined with `"; "`.
//!
//! ## Join mechanics
//! One worker is spawned per direct child, fresh per invocation. Each worker
//! owns a clone of a bounded error channel sender and drops it on exit; the
//! invoking future drains the receiver until the channel closes, which
//! happens exactly when the last child finishes. Failures therefore arrive
//! in **completion order**, which under concurrency is a race: aggregate
//! message ordering is only deterministic when child timing is.
//!
//! A `Parallel` group is itself a [`Task`]; nesting does not flatten
//! concurrency across group boundaries, each group manages only its direct
//! children.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::TaskError;
use crate::events::Bus;
use crate::groups::runner::run_child;
use crate::tasks::{Task, TaskRef};

/// Concurrent composite task.
///
/// All children are invoked; the group's run returns only after every child
/// finished. There is no cancellation: children keep running to completion
/// even after some of them have already failed.
///
/// # Example
/// ```
/// use taskgroup::{parallel, Task, TaskError, TaskFn};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let group = parallel(vec![
///     TaskFn::arc("ok", || async { Ok(()) }),
///     TaskFn::arc("bad", || async { Err(TaskError::fail("boom")) }),
/// ]);
///
/// // The lone failure comes back unwrapped.
/// let err = group.run().await.unwrap_err();
/// assert_eq!(err.to_string(), "boom");
/// assert!(!err.is_aggregate());
/// # }
/// ```
pub struct Parallel {
    name: Cow<'static, str>,
    children: Vec<TaskRef>,
    bus: Option<Bus>,
}

impl Parallel {
    /// Creates a concurrent group over the given children.
    ///
    /// Construction performs no invocation; children run only when the
    /// group itself runs.
    pub fn new(children: Vec<TaskRef>) -> Self {
        Self {
            name: Cow::Borrowed("parallel"),
            children,
            bus: None,
        }
    }

    /// Returns a new group with the given name (used in lifecycle events).
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a new group publishing child lifecycle events to `bus`.
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[async_trait]
impl Task for Parallel {
    fn name(&self) -> &str {
        &self.name
    }

    /// Runs all children concurrently and waits for every one of them.
    async fn run(&self) -> Result<(), TaskError> {
        match self.children.as_slice() {
            [] => return Ok(()),
            // Lone child runs inline, no spawn machinery.
            [only] => return run_child(only.as_ref(), self.bus.as_ref()).await,
            _ => {}
        }

        // Capacity equals the child count: each worker sends at most once,
        // so sends never block the workers.
        let (tx, mut rx) = mpsc::channel::<TaskError>(self.children.len());

        for child in &self.children {
            let child = Arc::clone(child);
            let bus = self.bus.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Err(e) = run_child(child.as_ref(), bus.as_ref()).await {
                    let _ = tx.send(e).await;
                }
            });
        }
        drop(tx);

        // The receiver yields `None` once every worker dropped its sender,
        // i.e. once the last child finished. Failures arrive in completion
        // order.
        let mut errors = Vec::new();
        while let Some(e) = rx.recv().await {
            errors.push(e);
        }

        TaskError::combine(errors)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::time::Duration;

    use crate::error::TaskError;
    use crate::groups::{ordered, parallel};
    use crate::tasks::{Task, TaskFn};

    #[tokio::test]
    async fn test_empty_succeeds() {
        assert!(parallel(vec![]).run().await.is_ok());
    }

    #[tokio::test]
    async fn test_single_child_outcome_passthrough() {
        let ok = parallel(vec![TaskFn::arc("ok", || async { Ok(()) })]);
        assert!(ok.run().await.is_ok());

        let err = parallel(vec![TaskFn::arc("bad", || async {
            Err(TaskError::fail("a"))
        })]);
        assert_eq!(err.run().await.unwrap_err().to_string(), "a");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_children_run_concurrently() {
        let c = Arc::new(AtomicI64::new(0));
        let c1 = c.clone();
        let c2 = c.clone();

        // The delayed first child finishes after the immediate second one,
        // even though it comes first in insertion order.
        let group = parallel(vec![
            TaskFn::arc("slow", move || {
                let c = c1.clone();
                async move {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    assert!(c.compare_exchange(1, 2, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                    Ok(())
                }
            }),
            TaskFn::arc("fast", move || {
                let c = c2.clone();
                async move {
                    assert!(c.compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                    Ok(())
                }
            }),
        ]);

        assert!(group.run().await.is_ok());
        assert_eq!(c.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_waits_for_all_and_aggregates_in_completion_order() {
        let slow_ran = Arc::new(AtomicBool::new(false));
        let fast_ran = Arc::new(AtomicBool::new(false));
        let slow_flag = slow_ran.clone();
        let fast_flag = fast_ran.clone();

        let group = parallel(vec![
            TaskFn::arc("slow", move || {
                let flag = slow_flag.clone();
                async move {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    flag.store(true, Ordering::SeqCst);
                    Err(TaskError::fail("a"))
                }
            }),
            TaskFn::arc("fast", move || {
                let flag = fast_flag.clone();
                async move {
                    flag.store(true, Ordering::SeqCst);
                    Err(TaskError::fail("b"))
                }
            }),
        ]);

        let err = group.run().await.unwrap_err();
        assert!(slow_ran.load(Ordering::SeqCst), "slow child must run to completion");
        assert!(fast_ran.load(Ordering::SeqCst), "fast child must run to completion");
        assert!(err.is_aggregate());
        assert_eq!(err.to_string(), "b; a");
        assert_eq!(err.errors().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_single_failure_passthrough() {
        let group = parallel(vec![
            TaskFn::arc("ok", || async { Ok(()) }),
            TaskFn::arc("bad", || async { Err(TaskError::fail("b")) }),
        ]);

        let err = group.run().await.unwrap_err();
        assert!(!err.is_aggregate());
        assert_eq!(err.to_string(), "b");
        assert!(!err.to_string().contains("; "));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_nested_ordered_branches_interleave() {
        let c = Arc::new(AtomicI64::new(0));
        let (a1, a2, b1, b2) = (c.clone(), c.clone(), c.clone(), c.clone());

        // Branch A is delayed, so branch B runs both steps first. Intra-branch
        // order must hold even though the branches interleave.
        let group = parallel(vec![
            ordered(vec![
                TaskFn::arc("a1", move || {
                    let c = a1.clone();
                    async move {
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        assert!(c.compare_exchange(2, 3, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                        Ok(())
                    }
                }),
                TaskFn::arc("a2", move || {
                    let c = a2.clone();
                    async move {
                        assert!(c.compare_exchange(3, 4, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                        Ok(())
                    }
                }),
            ]),
            ordered(vec![
                TaskFn::arc("b1", move || {
                    let c = b1.clone();
                    async move {
                        assert!(c.compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                        Ok(())
                    }
                }),
                TaskFn::arc("b2", move || {
                    let c = b2.clone();
                    async move {
                        assert!(c.compare_exchange(1, 2, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                        Ok(())
                    }
                }),
            ]),
        ]);

        assert!(group.run().await.is_ok());
        assert_eq!(c.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_nested_first_failures_aggregate_in_completion_order() {
        let group = parallel(vec![
            ordered(vec![
                TaskFn::arc("a", || async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Err(TaskError::fail("a"))
                }),
                TaskFn::arc("b", || async { Err(TaskError::fail("b")) }),
            ]),
            ordered(vec![
                TaskFn::arc("c", || async { Err(TaskError::fail("c")) }),
                TaskFn::arc("d", || async { Err(TaskError::fail("d")) }),
            ]),
        ]);

        // Each branch short-circuits at its first failure; the faster branch
        // reports first.
        let err = group.run().await.unwrap_err();
        assert_eq!(err.to_string(), "c; a");
    }

    #[tokio::test]
    async fn test_construction_is_inert() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let group = parallel(vec![TaskFn::arc("inert", move || {
            let flag = flag.clone();
            async move {
                flag.store(true, Ordering::SeqCst);
                Ok(())
            }
        })]);

        assert!(!ran.load(Ordering::SeqCst), "construction must not invoke children");
        assert!(group.run().await.is_ok());
        assert!(ran.load(Ordering::SeqCst));
    }
}
