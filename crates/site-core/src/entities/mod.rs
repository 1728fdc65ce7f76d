//! Entity structs for the board and the push channel.
//!
//! All structs use camelCase JSON to match the dashboard API.

mod project;
mod push;
mod task;

pub use project::Project;
pub use push::PushEvent;
pub use task::{AssigneeRef, ProjectRef, Task};
