//! # taskgroup
//!
//! **Taskgroup** is a minimal task-combinator library for Rust.
//!
//! It composes units of work ("tasks", async operations that can fail) into
//! two higher-order execution strategies: run-in-sequence-stop-on-first-failure
//! and run-all-concurrently-and-join. The crate is designed as a building
//! block for higher-level pipelines and orchestrators.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   TaskRef    │   │   TaskRef    │   │   TaskRef    │
//!     │ (closure or  │   │ (closure or  │   │   (nested    │
//!     │  custom impl)│   │  custom impl)│   │    group)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Ordered / Parallel group (itself a Task)                 │
//! │  - Ordered: children in list order, stop at first failure │
//! │  - Parallel: one worker per child, wait for all,          │
//! │    failures collected in completion order                 │
//! └──────────────────────────┬────────────────────────────────┘
//!                            ▼
//!               TaskError::combine(collected)
//!                 ├─ none   ─► Ok(())
//!                 ├─ one    ─► that failure, unwrapped
//!                 └─ many   ─► Aggregate, joined with "; "
//! ```
//!
//! ### Lifecycle
//! ```text
//! ordered(tasks) / parallel(tasks) ──► TaskRef      (nothing runs yet)
//!
//! group.run().await:
//!   Ordered:
//!     for child in children { child.run().await? }   (fail-fast)
//!   Parallel:
//!     ├─ 0 children ─► Ok(())
//!     ├─ 1 child    ─► run inline
//!     └─ N children ─► spawn N workers, each sends its failure
//!                      into a bounded channel and drops the sender;
//!                      drain until the channel closes (= all done),
//!                      then combine the collected failures
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                |
//! |-----------------|----------------------------------------------------------|-----------------------------------|
//! | **Tasks**       | Define tasks as closures or custom impls, easy to nest.  | [`Task`], [`TaskFn`], [`TaskRef`] |
//! | **Groups**      | Sequential fail-fast and concurrent wait-for-all.        | [`Ordered`], [`Parallel`]         |
//! | **Errors**      | Leaf failures and arity-shaped aggregation.              | [`TaskError`]                     |
//! | **Events**      | Hook into per-child lifecycle events (logging, metrics). | [`Bus`], [`Event`], [`Subscribe`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use taskgroup::{ordered, parallel, Task, TaskFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Two sequential branches, run concurrently against each other.
//!     let fetch = ordered(vec![
//!         TaskFn::arc("connect", || async { Ok(()) }),
//!         TaskFn::arc("download", || async { Ok(()) }),
//!     ]);
//!     let warmup = ordered(vec![
//!         TaskFn::arc("load-cache", || async { Ok(()) }),
//!         TaskFn::arc("verify", || async { Ok(()) }),
//!     ]);
//!
//!     // Waits for both branches, even if one fails early.
//!     parallel(vec![fetch, warmup]).run().await?;
//!     Ok(())
//! }
//! ```

mod error;
mod events;
mod groups;
mod subscribers;
mod tasks;

// ---- Public re-exports ----

pub use error::TaskError;
pub use events::{Bus, Event, EventKind};
pub use groups::{ordered, parallel, Ordered, Parallel};
pub use subscribers::{Subscribe, SubscriberSet};
pub use tasks::{Task, TaskFn, TaskRef};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
