//! Maintenance day calculation
//!
//! The maintenance window is the 2nd Thursday of every month. This module
//! produces that date for a given month and a lazy, restartable sequence of
//! them for successive months.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Thursday counted from Sunday (0 = Sunday ... 6 = Saturday)
const THURSDAY: u32 = 4;

/// First Thursday on or after `date`. A Thursday maps to itself.
pub fn next_thursday_on_or_after(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday();
    let offset = (THURSDAY + 7 - weekday) % 7;
    date + Days::new(u64::from(offset))
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// First day of the month after the one containing `date`.
/// Returns `None` only past the end of the representable calendar.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The 2nd Thursday of `start`'s month, whatever day of the month `start` is.
pub fn next_occurrence(start: NaiveDate) -> NaiveDate {
    let first_thursday = next_thursday_on_or_after(first_of_month(start));
    first_thursday + Days::new(7)
}

/// The 2nd Thursday of `month` in `year`, or `None` for an invalid month.
pub fn second_thursday(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Thu, 2)
}

/// Infinite sequence of maintenance days, one per calendar month.
///
/// Cloning the iterator restarts from the clone's position, so a caller can
/// keep the original and peek ahead on a copy.
#[derive(Debug, Clone)]
pub struct MaintenanceDays {
    cursor: Option<NaiveDate>,
}

impl MaintenanceDays {
    /// Sequence whose first element is the maintenance day of `date`'s month
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            cursor: Some(first_of_month(date)),
        }
    }

    /// Sequence starting with the month after `today`. The current month's
    /// maintenance day is never part of it, even if it is still ahead.
    pub fn from_next_month(today: NaiveDate) -> Self {
        Self {
            cursor: first_of_next_month(today),
        }
    }
}

impl Iterator for MaintenanceDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let month = self.cursor?;
        let day = next_occurrence(month);
        self.cursor = first_of_next_month(day);
        Some(day)
    }
}

/// The next maintenance day to announce, at least one month out from `today`
pub fn next_maintenance_day(today: NaiveDate) -> Option<NaiveDate> {
    MaintenanceDays::from_next_month(today).next()
}
