use super::*;

#[test]
fn day_path_uses_iso_date() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(day_path("42", date), "/community/42/calendar/2025-03-07/tags/view");
}

#[test]
fn day_path_encodes_community_id() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(day_path("a/b", date), "/community/a%2Fb/calendar/2025-03-07/tags/view");
}

#[test]
fn weekday_header_starts_on_sunday() {
    assert_eq!(WEEKDAYS[0], "Sun");
    assert_eq!(WEEKDAYS.len(), 7);
}
