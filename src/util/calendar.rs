//! Month grid math and `YYYY-MM-DD` handling for the calendar pages.
//!
//! DESIGN
//! ======
//! The grid is Sunday-first and always a whole number of weeks, padded with
//! empty cells before day 1 and after the last day. Date arithmetic is
//! chrono's; this module only decides layout and the wire format.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::net::types::CalendarEvent;

/// Wire and route format for dates.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// A calendar month, held as its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// `None` unless `month` is in `1..=12` and the year is representable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    /// The month containing today's date.
    pub fn current() -> Self {
        Self::of(today())
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.first.checked_sub_months(Months::new(1)).map_or(self, Self::of)
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.first.checked_add_months(Months::new(1)).map_or(self, Self::of)
    }

    pub fn days(self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Weekday of day 1, `0` = Sunday.
    pub fn first_weekday(self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// `day` of this month, if it exists.
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// Header label, e.g. `03/2025`.
    pub fn label(self) -> String {
        self.first.format("%m/%Y").to_string()
    }
}

/// Sunday-first cells for `month`; `None` pads outside the month.
pub fn month_grid(month: YearMonth) -> Vec<Option<NaiveDate>> {
    let lead = month.first_weekday();
    let total = (lead + month.days()).div_ceil(7) * 7;
    (0..total).map(|cell| cell.checked_sub(lead).and_then(|offset| month.date(offset + 1))).collect()
}

/// Parse a strict `YYYY-MM-DD` date that exists on the calendar.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, ISO_DATE).ok()?;
    // chrono accepts unpadded fields; only the canonical spelling is valid
    (iso_date(date) == raw).then_some(date)
}

pub fn is_iso_date(raw: &str) -> bool {
    parse_iso_date(raw).is_some()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Group the month's events by date. Events outside `month` or with an
/// unreadable date are dropped.
pub fn events_by_day(events: &[CalendarEvent], month: YearMonth) -> BTreeMap<NaiveDate, Vec<CalendarEvent>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        let Some(date) = event.date.get(..10).and_then(parse_iso_date) else {
            continue;
        };
        if YearMonth::of(date) == month {
            by_day.entry(date).or_default().push(event.clone());
        }
    }
    by_day
}

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
