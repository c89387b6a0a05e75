//! Month grid view model: a fixed 6×7 block of day cells.

use chrono::{Datelike, NaiveDate};

use super::index::EventIndex;
use crate::models::BadgeKind;

pub const WEEKS: usize = 6;
pub const GRID_CELLS: usize = WEEKS * 7;

/// A calendar day with a 0-based month, as the month selector uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn iso_key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// A displayable month. Construction fails for months chrono cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month: u32,
    year: i32,
    first: NaiveDate,
    days: u32,
}

impl MonthCursor {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
        let next_first = if month == 11 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 2, 1)?
        };
        let days = next_first.signed_duration_since(first).num_days() as u32;
        Some(Self { month, year, first, days })
    }

    pub fn containing(date: CalendarDate) -> Option<Self> {
        Self::new(date.month, date.year)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    /// Weekday of the 1st, Monday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_monday()
    }

    pub fn prev(&self) -> Option<Self> {
        if self.month == 0 {
            Self::new(11, self.year - 1)
        } else {
            Self::new(self.month - 1, self.year)
        }
    }

    pub fn next(&self) -> Option<Self> {
        if self.month == 11 {
            Self::new(0, self.year + 1)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.month == self.month && date.year == self.year
    }
}

pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    MonthCursor::new(month, year).map(|c| c.days_in_month())
}

pub fn first_weekday(month: u32, year: i32) -> Option<u32> {
    MonthCursor::new(month, year).map(|c| c.first_weekday())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDot {
    pub kind: BadgeKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub membership: Membership,
    pub is_weekend: bool,
    pub has_events: bool,
    pub is_selected: bool,
    pub dots: Vec<EventDot>,
}

impl DayCell {
    fn padding(day: u32, membership: Membership) -> Self {
        Self {
            day,
            membership,
            is_weekend: false,
            has_events: false,
            is_selected: false,
            dots: Vec::new(),
        }
    }

    pub fn css_class(&self) -> String {
        let mut classes = vec!["ant-picker-cell"];
        match self.membership {
            Membership::Previous => classes.push("previous-month"),
            Membership::Next => classes.push("next-month"),
            Membership::Current => {}
        }
        if self.is_weekend {
            classes.push("weekend");
        }
        if self.is_selected {
            classes.push("selected today");
        }
        if self.has_events {
            classes.push("has-events");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

pub fn build_month_grid(cursor: MonthCursor, index: &EventIndex, selected: CalendarDate) -> MonthGrid {
    let lead = cursor.first_weekday();
    let mut cells = Vec::with_capacity(GRID_CELLS);

    if lead > 0 {
        // Every month has at least 28 days, so the subtraction cannot underflow.
        let prev_days = cursor.prev().map(|p| p.days_in_month()).unwrap_or(31);
        for day in (prev_days - lead + 1)..=prev_days {
            cells.push(DayCell::padding(day, Membership::Previous));
        }
    }

    for day in 1..=cursor.days_in_month() {
        let date = CalendarDate {
            day,
            month: cursor.month(),
            year: cursor.year(),
        };
        let dots: Vec<EventDot> = index
            .get(&date.iso_key())
            .map(|tasks| {
                tasks
                    .iter()
                    .map(|t| EventDot {
                        kind: t.badge_kind(),
                        title: t.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        cells.push(DayCell {
            day,
            membership: Membership::Current,
            is_weekend: (lead + day - 1) % 7 >= 5,
            has_events: !dots.is_empty(),
            is_selected: date == selected,
            dots,
        });
    }

    let mut next_day = 1;
    while cells.len() < GRID_CELLS {
        cells.push(DayCell::padding(next_day, Membership::Next));
        next_day += 1;
    }

    MonthGrid { cursor, cells }
}

/// Years for the selector: `today_year ± span`, widened to include `shown`.
pub fn year_options(today_year: i32, span: i32, shown: i32) -> Vec<i32> {
    let from = (today_year - span).min(shown);
    let to = (today_year + span).max(shown);
    (from..=to).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::calendar::index::build_event_index;
    use crate::models::{Task, TaskStatus};

    fn cursor(month: u32, year: i32) -> MonthCursor {
        MonthCursor::new(month, year).unwrap()
    }

    fn no_selection() -> CalendarDate {
        CalendarDate { day: 1, month: 0, year: 1900 }
    }

    fn dated(id: &str, start: &str, due: &str, priority: Option<i32>) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: None,
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
    fn test_every_month_has_42_cells_in_6_rows() {
        let index = EventIndex::new();
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 0..12 {
                let grid = build_month_grid(cursor(month, year), &index, no_selection());
                assert_eq!(grid.cells.len(), GRID_CELLS, "{}-{}", year, month + 1);
                assert_eq!(grid.weeks().count(), WEEKS);
                assert!(grid.weeks().all(|w| w.len() == 7));
            }
        }
    }

    #[test]
    fn test_days_in_month_and_first_weekday() {
        assert_eq!(days_in_month(1, 2024), Some(29));
        assert_eq!(days_in_month(1, 2023), Some(28));
        assert_eq!(days_in_month(11, 2024), Some(31));
        assert_eq!(days_in_month(12, 2024), None);
        // 1 April 2024 was a Monday, 1 September 2024 a Sunday.
        assert_eq!(first_weekday(3, 2024), Some(0));
        assert_eq!(first_weekday(8, 2024), Some(6));
    }

    #[test]
    fn test_weekend_flags_for_month_starting_monday() {
        let grid = build_month_grid(cursor(3, 2024), &EventIndex::new(), no_selection());
        let weekend: Vec<bool> = grid.cells[..7].iter().map(|c| c.is_weekend).collect();

        assert_eq!(grid.cells[0].membership, Membership::Current);
        assert_eq!(weekend, vec![false, false, false, false, false, true, true]);
    }

    #[test]
    fn test_padding_uses_neighbouring_months() {
        // March 2024 starts on a Friday: four February days lead.
        let grid = build_month_grid(cursor(2, 2024), &EventIndex::new(), no_selection());
        let lead: Vec<u32> = grid.cells[..4].iter().map(|c| c.day).collect();

        assert_eq!(lead, vec![26, 27, 28, 29]);
        assert!(grid.cells[..4].iter().all(|c| c.membership == Membership::Previous && !c.is_weekend));
        assert_eq!(grid.cells[4].day, 1);
        assert_eq!(grid.cells[34].day, 31);
        assert_eq!(grid.cells[35].membership, Membership::Next);
        assert_eq!(grid.cells[35].day, 1);
        assert_eq!(grid.cells[41].day, 7);
    }

    #[test]
    fn test_events_mark_only_current_month_cells() {
        let index = build_event_index(&[
            dated("A", "2024-03-30", "2024-04-02", Some(3)),
            dated("B", "2024-04-01", "2024-04-01", None),
        ]);
        let grid = build_month_grid(cursor(3, 2024), &index, no_selection());

        let first = &grid.cells[0];
        assert!(first.has_events);
        assert_eq!(
            first.dots,
            vec![
                EventDot { kind: BadgeKind::Danger, title: "Task A".to_string() },
                EventDot { kind: BadgeKind::Info, title: "Task B".to_string() },
            ]
        );
        assert!(grid.cells.iter().filter(|c| c.membership != Membership::Current).all(|c| !c.has_events));
        assert_eq!(grid.cells.iter().filter(|c| c.has_events).count(), 2);
    }

    #[test]
    fn test_selection_only_highlighted_in_its_month() {
        let selected = CalendarDate { day: 15, month: 3, year: 2024 };
        let april = build_month_grid(cursor(3, 2024), &EventIndex::new(), selected);
        let may = build_month_grid(cursor(4, 2024), &EventIndex::new(), selected);

        let highlighted: Vec<u32> = april.cells.iter().filter(|c| c.is_selected).map(|c| c.day).collect();
        assert_eq!(highlighted, vec![15]);
        assert!(april.cells[14].css_class().contains("selected today"));
        assert!(may.cells.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn test_calendar_date_from_chrono_uses_zero_based_month() {
        let date = CalendarDate::from_naive(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(date, CalendarDate { day: 31, month: 11, year: 2024 });
        assert_eq!(date.iso_key(), "2024-12-31");
    }

    #[test]
    fn test_navigation_wraps_year() {
        let jan = cursor(0, 2025);
        let dec = jan.prev().unwrap();
        assert_eq!((dec.month(), dec.year()), (11, 2024));
        assert_eq!(dec.next(), Some(jan));
    }

    #[test]
    fn test_year_options_include_shown_year() {
        assert_eq!(year_options(2024, 1, 2024), vec![2023, 2024, 2025]);
        assert_eq!(year_options(2024, 1, 2027), vec![2023, 2024, 2025, 2026, 2027]);
    }
}
