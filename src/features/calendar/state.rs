use chrono::Local;

use super::grid::{CalendarDate, Membership, MonthCursor};

/// Displayed month plus the selected day. Lives in the calendar
/// component; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub shown: MonthCursor,
    pub selected: CalendarDate,
}

impl CalendarState {
    pub fn starting_at(today: CalendarDate) -> Option<Self> {
        Some(Self {
            shown: MonthCursor::containing(today)?,
            selected: today,
        })
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.shown.prev() {
            self.shown = prev;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.shown.next() {
            self.shown = next;
        }
    }

    /// Month/year selector change. Out-of-range values are ignored.
    pub fn show(&mut self, month: u32, year: i32) {
        if let Some(cursor) = MonthCursor::new(month, year) {
            self.shown = cursor;
        }
    }

    /// Click on a grid cell. Only days of the displayed month select.
    pub fn select(&mut self, day: u32, membership: Membership) -> bool {
        if membership != Membership::Current {
            return false;
        }
        self.selected = CalendarDate {
            day,
            month: self.shown.month(),
            year: self.shown.year(),
        };
        true
    }

    pub fn jump_to(&mut self, today: CalendarDate) {
        if let Some(state) = Self::starting_at(today) {
            *self = state;
        }
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> CalendarDate {
    CalendarDate::from_naive(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CalendarState {
        CalendarState::starting_at(CalendarDate { day: 20, month: 11, year: 2024 }).unwrap()
    }

    #[test]
    fn test_select_current_month_day() {
        let mut s = state();
        assert!(s.select(15, Membership::Current));
        assert_eq!(s.selected, CalendarDate { day: 15, month: 11, year: 2024 });
    }

    #[test]
    fn test_padding_clicks_are_ignored() {
        let mut s = state();
        assert!(!s.select(30, Membership::Previous));
        assert!(!s.select(2, Membership::Next));
        assert_eq!(s.selected.day, 20);
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let mut s = state();
        s.next_month();
        assert_eq!((s.shown.month(), s.shown.year()), (0, 2025));
        assert!(!s.shown.contains(s.selected));

        s.prev_month();
        assert!(s.shown.contains(s.selected));
        assert_eq!(s.selected.day, 20);
    }

    #[test]
    fn test_show_rejects_invalid_month() {
        let mut s = state();
        s.show(12, 2024);
        assert_eq!(s.shown.month(), 11);

        s.show(2, 2023);
        assert_eq!((s.shown.month(), s.shown.year()), (2, 2023));
    }

    #[test]
    fn test_jump_to_resets_view_and_selection() {
        let mut s = state();
        s.show(5, 2020);
        s.select(3, Membership::Current);

        let today = CalendarDate { day: 9, month: 1, year: 2025 };
        s.jump_to(today);

        assert_eq!(s.selected, today);
        assert!(s.shown.contains(today));
    }
}
