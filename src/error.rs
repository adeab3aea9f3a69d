//! Error types used by tasks and task groups.
//!
//! A single enum, [`TaskError`], covers both shapes a failure can take:
//!
//! - [`TaskError::Fail`] — a leaf failure reported by one task.
//! - [`TaskError::Aggregate`] — two or more failures collected by a parallel
//!   group, joined with `"; "` for display while keeping every constituent
//!   retrievable.
//!
//! [`TaskError::combine`] turns a batch of collected failures into a result
//! whose shape depends strictly on arity: zero failures is success, a single
//! failure is returned unwrapped, and only two or more produce an aggregate.
//! Callers therefore never need to special-case "aggregate of size one".

use thiserror::Error;

/// Joins constituent messages with `"; "` in aggregation order.
fn join_messages(errors: &[TaskError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// # Errors produced by task execution.
///
/// Leaf failures carry a human-readable message; aggregates carry the
/// failures of two or more parallel children in completion order.
///
/// # Example
/// ```
/// use taskgroup::TaskError;
///
/// let err = TaskError::fail("boom");
/// assert_eq!(err.to_string(), "boom");
/// assert!(!err.is_aggregate());
/// ```
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task execution failed with the given reason.
    #[error("{error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Two or more failures collected by a parallel group.
    ///
    /// Display joins every constituent's message with `"; "` in the order
    /// the failures were collected (completion order, not insertion order).
    #[error("{}", join_messages(.0))]
    Aggregate(Vec<TaskError>),
}

impl TaskError {
    /// Creates a leaf failure from any message.
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Combines collected failures into a result, shaped by arity.
    ///
    /// - no failures ⇒ `Ok(())`
    /// - exactly one ⇒ that failure, unwrapped
    /// - two or more ⇒ [`TaskError::Aggregate`]
    ///
    /// Constituents that are themselves aggregates are flattened one level,
    /// so an aggregate never nests another aggregate directly.
    ///
    /// # Example
    /// ```
    /// use taskgroup::TaskError;
    ///
    /// assert!(TaskError::combine(vec![]).is_ok());
    ///
    /// let lone = TaskError::combine(vec![TaskError::fail("a")]).unwrap_err();
    /// assert_eq!(lone.to_string(), "a");
    /// assert!(!lone.is_aggregate());
    ///
    /// let many = TaskError::combine(vec![
    ///     TaskError::fail("a"),
    ///     TaskError::fail("b"),
    /// ])
    /// .unwrap_err();
    /// assert_eq!(many.to_string(), "a; b");
    /// assert_eq!(many.errors().len(), 2);
    /// ```
    pub fn combine(errors: Vec<TaskError>) -> Result<(), TaskError> {
        let mut flat = Vec::with_capacity(errors.len());
        for err in errors {
            match err {
                TaskError::Aggregate(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Ok(()),
            1 => Err(flat.remove(0)),
            _ => Err(TaskError::Aggregate(flat)),
        }
    }

    /// Returns the constituent failures.
    ///
    /// An aggregate yields its collected children; a leaf yields a slice
    /// containing only itself, so callers can iterate uniformly.
    pub fn errors(&self) -> &[TaskError] {
        match self {
            TaskError::Aggregate(errors) => errors,
            other => std::slice::from_ref(other),
        }
    }

    /// True if this error aggregates more than one failure.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, TaskError::Aggregate(_))
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Aggregate(_) => "task_aggregate",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } => error.clone(),
            TaskError::Aggregate(errors) => join_messages(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_empty_is_ok() {
        assert!(TaskError::combine(vec![]).is_ok());
    }

    #[test]
    fn test_combine_single_is_unwrapped() {
        let err = TaskError::combine(vec![TaskError::fail("a")]).unwrap_err();
        assert!(!err.is_aggregate());
        assert_eq!(err.to_string(), "a");
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn test_combine_many_joins_in_order() {
        let err = TaskError::combine(vec![
            TaskError::fail("b"),
            TaskError::fail("a"),
            TaskError::fail("c"),
        ])
        .unwrap_err();
        assert!(err.is_aggregate());
        assert_eq!(err.to_string(), "b; a; c");
        assert_eq!(err.as_label(), "task_aggregate");
    }

    #[test]
    fn test_combine_flattens_nested_aggregate() {
        let inner =
            TaskError::combine(vec![TaskError::fail("a"), TaskError::fail("b")]).unwrap_err();
        let err = TaskError::combine(vec![TaskError::fail("c"), inner]).unwrap_err();
        assert_eq!(err.errors().len(), 3);
        assert_eq!(err.to_string(), "c; a; b");
    }

    #[test]
    fn test_leaf_errors_yields_itself() {
        let err = TaskError::fail("solo");
        let errors = err.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "solo");
        assert_eq!(err.as_label(), "task_failed");
    }
}
