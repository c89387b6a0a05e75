pub mod column;
pub mod header;
pub mod task_card;

pub use column::KanbanColumn;
pub use header::KanbanHeader;
