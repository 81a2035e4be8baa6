//! Data models module
//!
//! Defines the persisted task records: Task, TaskStatus, and the Dataset that
//! owns them along with the id counter.

pub mod task;

pub use task::{CompleteOutcome, Dataset, Task, TaskStatus};
