//! # Task groups: the two composition rules.
//!
//! This module provides the combinators that turn a collection of tasks into
//! a single composite task:
//! - [`Ordered`] - sequential, fail-fast (stops at the first failure)
//! - [`Parallel`] - concurrent, exhaustive (waits for all, aggregates failures)
//!
//! Both composites implement [`Task`](crate::Task), so they nest freely:
//! a parallel group may contain ordered groups and vice versa.
//!
//! The [`ordered`] and [`parallel`] helpers wrap construction and the
//! `Arc<dyn Task>` coercion in one step for the common case.

mod ordered;
mod parallel;
mod runner;

pub use ordered::Ordered;
pub use parallel::Parallel;

use crate::tasks::TaskRef;
use std::sync::Arc;

/// Builds a sequential, fail-fast group over `children`.
///
/// # Example
/// ```
/// use taskgroup::{ordered, Task, TaskFn};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let group = ordered(vec![
///     TaskFn::arc("one", || async { Ok(()) }),
///     TaskFn::arc("two", || async { Ok(()) }),
/// ]);
/// assert!(group.run().await.is_ok());
/// # }
/// ```
pub fn ordered(children: Vec<TaskRef>) -> TaskRef {
    Arc::new(Ordered::new(children))
}

/// Builds a concurrent, failure-aggregating group over `children`.
///
/// # Example
/// ```
/// use taskgroup::{parallel, Task, TaskFn};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let group = parallel(vec![
///     TaskFn::arc("one", || async { Ok(()) }),
///     TaskFn::arc("two", || async { Ok(()) }),
/// ]);
/// assert!(group.run().await.is_ok());
/// # }
/// ```
pub fn parallel(children: Vec<TaskRef>) -> TaskRef {
    Arc::new(Parallel::new(children))
}
