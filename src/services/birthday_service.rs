//! Upcoming-birthday query.
//!
//! Selects records whose birthday falls between today and today plus a
//! number of days, both ends inclusive. Dates are compared as plain
//! `(month, day)` tuples, so a window that crosses New Year matches nothing
//! after December 31st.

use crate::domain::Birthday;
use crate::models::{AddressBook, Record};
use chrono::{Datelike, Days, NaiveDate};

/// Default length of the reminder window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// An inclusive `(month, day)` range anchored on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    start: (u32, u32),
    end: (u32, u32),
}

impl BirthdayWindow {
    /// Window covering `today` through `today + days`.
    pub fn starting(today: NaiveDate, days: u32) -> Self {
        let last = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        Self {
            start: (today.month(), today.day()),
            end: (last.month(), last.day()),
        }
    }

    pub fn contains(&self, birthday: &Birthday) -> bool {
        let month_day = birthday.month_day();
        month_day >= self.start && month_day <= self.end
    }
}

/// Records with a birthday inside the window, in book order.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate, days: u32) -> Vec<&Record> {
    let window = BirthdayWindow::starting(today, days);

    book.values()
        .filter(|record| record.birthday().is_some_and(|b| window.contains(b)))
        .collect()
}
