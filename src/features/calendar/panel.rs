use super::grid::CalendarDate;
use super::index::EventIndex;
use crate::models::BadgeKind;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const NO_EVENTS: &str = "No events for this day";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelItem {
    pub kind: BadgeKind,
    pub name: String,
    pub description: String,
}

/// Side panel for the selected day.
#[derive(Debug, Clone, PartialEq)]
pub struct EventsPanel {
    pub heading: String,
    pub items: Vec<PanelItem>,
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

pub fn build_events_panel(selected: CalendarDate, index: &EventIndex) -> EventsPanel {
    let items = index
        .get(&selected.iso_key())
        .map(|tasks| {
            tasks
                .iter()
                .map(|t| PanelItem {
                    kind: t.badge_kind(),
                    name: t.name.clone(),
                    description: t.description.clone().unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    EventsPanel {
        heading: format!("Events on {} {}", selected.day, month_name(selected.month)),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::calendar::index::build_event_index;
    use crate::models::{Task, TaskStatus};

    fn dated(id: &str, start: &str, due: &str, priority: Option<i32>) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: Some(format!("About {}", id)),
            start_date: Some(start.to_string()),
            due_date: Some(due.to_string()),
            priority,
            status: TaskStatus::Todo,
            index: None,
            project_id: None,
            employees: Vec::new(),
        }
    }

    #[test]
    fn test_selected_day_lists_exactly_indexed_tasks() {
        let index = build_event_index(&[
            dated("A", "2024-04-10", "2024-04-20", Some(2)),
            dated("B", "2024-04-15", "2024-04-15", Some(1)),
            dated("C", "2024-04-16", "2024-04-18", Some(3)),
        ]);
        let panel = build_events_panel(CalendarDate { day: 15, month: 3, year: 2024 }, &index);

        assert_eq!(panel.heading, "Events on 15 April");
        let names: Vec<&str> = panel.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Task A", "Task B"]);
        assert_eq!(panel.items[0].kind, BadgeKind::Warning);
        assert_eq!(panel.items[1].kind, BadgeKind::Success);
        assert_eq!(panel.items[1].description, "About B");
    }

    #[test]
    fn test_empty_day_has_no_items() {
        let panel = build_events_panel(CalendarDate { day: 1, month: 0, year: 2024 }, &EventIndex::new());
        assert_eq!(panel.heading, "Events on 1 January");
        assert!(panel.items.is_empty());
    }
}
