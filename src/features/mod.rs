pub mod calendar;
pub mod employees;
pub mod kanban;
