//! # Ordered group: sequential, fail-fast composition.
//!
//! [`Ordered`] runs its children one after another in insertion order and
//! stops at the first failure, which is returned verbatim. Children after
//! the failing one are never invoked.
//!
//! An `Ordered` group is itself a [`Task`], so it nests under a
//! [`Parallel`](crate::Parallel) group or another `Ordered` group without
//! special-casing.

use std::borrow::Cow;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::events::Bus;
use crate::groups::runner::run_child;
use crate::tasks::{Task, TaskRef};

/// Sequential composite task.
///
/// Children run in list order; the first failure short-circuits the rest and
/// is reported unwrapped. An empty group succeeds without invoking anything.
///
/// # Example
/// ```
/// use taskgroup::{ordered, Task, TaskError, TaskFn};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let group = ordered(vec![
///     TaskFn::arc("first", || async { Ok(()) }),
///     TaskFn::arc("second", || async { Err(TaskError::fail("boom")) }),
///     TaskFn::arc("never-runs", || async { Ok(()) }),
/// ]);
///
/// let err = group.run().await.unwrap_err();
/// assert_eq!(err.to_string(), "boom");
/// # }
/// ```
pub struct Ordered {
    name: Cow<'static, str>,
    children: Vec<TaskRef>,
    bus: Option<Bus>,
}

impl Ordered {
    /// Creates a sequential group over the given children.
    ///
    /// Construction performs no invocation; children run only when the
    /// group itself runs.
    pub fn new(children: Vec<TaskRef>) -> Self {
        Self {
            name: Cow::Borrowed("ordered"),
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
impl Task for Ordered {
    fn name(&self) -> &str {
        &self.name
    }

    /// Runs children in list order, stopping at the first failure.
    async fn run(&self) -> Result<(), TaskError> {
        for child in &self.children {
            run_child(child.as_ref(), self.bus.as_ref()).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::time::Duration;

    use crate::error::TaskError;
    use crate::groups::ordered;
    use crate::tasks::{Task, TaskFn};

    #[tokio::test]
    async fn test_empty_succeeds() {
        assert!(ordered(vec![]).run().await.is_ok());
    }

    #[tokio::test]
    async fn test_single_child_outcome_passthrough() {
        let ok = ordered(vec![TaskFn::arc("ok", || async { Ok(()) })]);
        assert!(ok.run().await.is_ok());

        let err = ordered(vec![TaskFn::arc("bad", || async {
            Err(TaskError::fail("a"))
        })]);
        assert_eq!(err.run().await.unwrap_err().to_string(), "a");
    }

    #[tokio::test]
    async fn test_children_run_in_list_order() {
        let c = Arc::new(AtomicI64::new(0));
        let c1 = c.clone();
        let c2 = c.clone();

        let group = ordered(vec![
            TaskFn::arc("slow-first", move || {
                let c = c1.clone();
                async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    assert!(c.compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                    Ok(())
                }
            }),
            TaskFn::arc("second", move || {
                let c = c2.clone();
                async move {
                    assert!(c.compare_exchange(1, 2, Ordering::SeqCst, Ordering::SeqCst).is_ok());
                    Ok(())
                }
            }),
        ]);

        assert!(group.run().await.is_ok());
        assert_eq!(c.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_first_failure_short_circuits() {
        let second_ran = Arc::new(AtomicBool::new(false));
        let flag = second_ran.clone();

        let group = ordered(vec![
            TaskFn::arc("a", || async { Err(TaskError::fail("a")) }),
            TaskFn::arc("b", move || {
                let flag = flag.clone();
                async move {
                    flag.store(true, Ordering::SeqCst);
                    Err(TaskError::fail("b"))
                }
            }),
        ]);

        let err = group.run().await.unwrap_err();
        assert_eq!(err.to_string(), "a");
        assert!(!err.is_aggregate());
        assert!(!second_ran.load(Ordering::SeqCst), "b must never be invoked");
    }

    #[tokio::test]
    async fn test_construction_is_inert() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let group = ordered(vec![TaskFn::arc("inert", move || {
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
