use super::*;

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =============================================================
// Month arithmetic
// =============================================================

#[test]
fn new_rejects_out_of_range_month() {
    assert_eq!(YearMonth::new(2025, 0), None);
    assert_eq!(YearMonth::new(2025, 13), None);
}

#[test]
fn prev_and_next_wrap_years() {
    assert_eq!(ym(2025, 1).prev(), ym(2024, 12));
    assert_eq!(ym(2024, 12).next(), ym(2025, 1));
    assert_eq!(ym(2025, 6).next(), ym(2025, 7));
}

#[test]
fn february_respects_leap_rules() {
    assert_eq!(ym(2024, 2).days(), 29);
    assert_eq!(ym(2025, 2).days(), 28);
    assert_eq!(ym(1900, 2).days(), 28);
    assert_eq!(ym(2000, 2).days(), 29);
    assert_eq!(ym(2025, 12).days(), 31);
}

#[test]
fn first_weekday_counts_from_sunday() {
    assert_eq!(ym(2025, 1).first_weekday(), 3);
    assert_eq!(ym(2025, 3).first_weekday(), 6);
    assert_eq!(ym(2026, 2).first_weekday(), 0);
}

#[test]
fn of_snaps_to_the_first() {
    assert_eq!(YearMonth::of(date(2024, 2, 29)), ym(2024, 2));
}

#[test]
fn label_and_iso_date_pad() {
    assert_eq!(ym(2025, 3).label(), "03/2025");
    assert_eq!(ym(2025, 3).date(7).map(iso_date).as_deref(), Some("2025-03-07"));
    assert_eq!(ym(2025, 2).date(30), None);
}

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_is_whole_weeks_starting_sunday() {
    // March 2025 starts on a Saturday and needs six rows.
    let grid = month_grid(ym(2025, 3));
    assert_eq!(grid.len(), 42);
    assert!(grid[..6].iter().all(Option::is_none));
    assert_eq!(grid[6], Some(date(2025, 3, 1)));
    assert_eq!(grid[36], Some(date(2025, 3, 31)));
    assert!(grid[37..].iter().all(Option::is_none));
}

#[test]
fn grid_for_month_starting_sunday_has_no_lead() {
    // February 2026 starts on a Sunday and fills exactly four rows.
    let grid = month_grid(ym(2026, 2));
    assert_eq!(grid.len(), 28);
    assert_eq!(grid[0], Some(date(2026, 2, 1)));
    assert_eq!(grid[27], Some(date(2026, 2, 28)));
}

// =============================================================
// Dates
// =============================================================

#[test]
fn parse_iso_date_accepts_real_dates() {
    assert_eq!(parse_iso_date("2024-02-29"), Some(date(2024, 2, 29)));
}

#[test]
fn parse_iso_date_rejects_malformed_or_impossible() {
    for raw in ["2025-2-01", "2025/02/01", "2025-02-30", "2025-13-01", "2025-00-10", "20a5-01-01", "", "2025-01-01x"] {
        assert!(!is_iso_date(raw), "{raw} should be rejected");
    }
}

#[test]
fn events_by_day_keeps_only_this_month() {
    let event = |date: &str, tag: &str| CalendarEvent { date: date.into(), tag: tag.into(), color_code: None };
    let events = [
        event("2025-03-01", "Practice"),
        event("2025-03-01T09:00:00", "Match"),
        event("2025-04-01", "Later"),
        event("soon", "Broken"),
    ];
    let by_day = events_by_day(&events, ym(2025, 3));
    assert_eq!(by_day.len(), 1);
    assert_eq!(by_day[&date(2025, 3, 1)].len(), 2);
}

#[test]
fn current_month_is_recent() {
    assert!(today().year() >= 2024);
    assert!(YearMonth::current().year() >= 2024);
}
