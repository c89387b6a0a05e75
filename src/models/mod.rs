pub mod employee;
pub mod project;
pub mod task;

pub use employee::Employee;
pub use project::Project;
pub use task::{BadgeKind, Task, TaskStatus};
