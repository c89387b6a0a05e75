pub mod components;
pub mod grid;
pub mod index;
pub mod panel;
pub mod state;

pub use components::CalendarView;
