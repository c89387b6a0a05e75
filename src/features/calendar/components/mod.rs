pub mod calendar_view;
pub mod events_panel;

pub use calendar_view::*;
