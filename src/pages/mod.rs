pub mod calendar;
pub mod employees;
pub mod kanban;
pub mod projects;

pub use calendar::Calendar;
pub use employees::Employees;
pub use kanban::Kanban;
pub use projects::Projects;
