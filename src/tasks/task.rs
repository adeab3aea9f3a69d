//! # Task abstraction.
//!
//! This module defines the [`Task`] trait, the single capability everything
//! in this crate composes over: an async unit of work that either succeeds
//! or reports a [`TaskError`]. The common handle type is [`TaskRef`], an
//! `Arc<dyn Task>` suitable for sharing across groups and spawned workers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TaskError;

/// Shared handle to a task (`Arc<dyn Task>`).
///
/// Groups store their children as `TaskRef`s; cloning is cheap and the same
/// task may appear in several groups.
pub type TaskRef = Arc<dyn Task>;

/// # Asynchronous unit of work.
///
/// A `Task` has a human-readable [`name`](Task::name) (used only for
/// lifecycle events) and an async [`run`](Task::run) method. Both group
/// types implement `Task` themselves, so groups nest without a separate
/// tree type.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use taskgroup::{Task, TaskError};
///
/// struct Demo;
///
/// #[async_trait]
/// impl Task for Demo {
///     fn name(&self) -> &str { "demo" }
///
///     async fn run(&self) -> Result<(), TaskError> {
///         // do work...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str {
        "task"
    }

    /// Executes the task once, reporting success or a failure.
    async fn run(&self) -> Result<(), TaskError>;
}
