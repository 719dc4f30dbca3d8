use chrono::{Local, NaiveDate, NaiveTime};
use datevalue::DateValue;

#[test]
fn today_matches_local_clock() {
    // Sample the clock on both sides so the test survives a midnight
    // rollover between the two calls.
    let before = Local::now().date_naive();
    let today = DateValue::today();
    let after = Local::now().date_naive();
    assert!(
        today.to_date() == before || today.to_date() == after,
        "today() = {}, clock said {before} then {after}",
        today.to_date()
    );
}

#[test]
fn today_time_is_midnight() {
    assert_eq!(DateValue::today().to_datetime().time(), NaiveTime::MIN);
}

#[test]
fn given_date_accessors() {
    let date = DateValue::given_date(14, 12, 1972);
    assert_eq!(date.day(), 14);
    assert_eq!(date.month(), 12);
    assert_eq!(date.year(), 1972);
}

#[test]
fn given_date_lenient_rollovers() {
    let cases: &[(i32, i32, i32, (u32, u32, i32))] = &[
        (31, 4, 2000, (1, 5, 2000)),    // April has 30 days
        (32, 1, 2000, (1, 2, 2000)),    // day past January
        (0, 3, 2000, (29, 2, 2000)),    // day 0, leap February
        (0, 3, 2001, (28, 2, 2001)),    // day 0, plain February
        (1, 13, 2000, (1, 1, 2001)),    // month past December
        (1, 0, 2000, (1, 12, 1999)),    // month 0
        (1, -1, 2000, (1, 11, 1999)),   // negative month
        (29, 2, 2001, (1, 3, 2001)),    // Feb 29 in a non-leap year
        (60, 1, 2000, (29, 2, 2000)),   // large day offset crosses months
    ];
    for &(d, m, y, (day, month, year)) in cases {
        let date = DateValue::given_date(d, m, y);
        assert_eq!(
            (date.day(), date.month(), date.year()),
            (day, month, year),
            "given_date({d}, {m}, {y}) resolved unexpectedly"
        );
    }
}

#[test]
fn from_date_roundtrip() {
    let naive = NaiveDate::from_ymd_opt(1972, 12, 14).unwrap();
    let date = DateValue::from_date(naive);
    assert_eq!(date.to_date(), naive);
    assert_eq!(date, DateValue::given_date(14, 12, 1972));
}

#[test]
fn from_datetime_preserves_time_component() {
    let instant = NaiveDate::from_ymd_opt(1972, 12, 14)
        .unwrap()
        .and_hms_opt(10, 30, 45)
        .unwrap();
    let date = DateValue::from_datetime(instant);
    assert_eq!(date.to_datetime(), instant);
    assert_eq!(date.to_date(), instant.date());
    assert_eq!(date.day(), 14);
    assert_eq!(date.month(), 12);
    assert_eq!(date.year(), 1972);
}

#[test]
fn from_datetime_midnight_equals_given_date() {
    let midnight = NaiveDate::from_ymd_opt(1972, 12, 14)
        .unwrap()
        .and_time(NaiveTime::MIN);
    assert_eq!(
        DateValue::from_datetime(midnight),
        DateValue::given_date(14, 12, 1972)
    );
}

#[test]
fn from_datetime_with_time_is_not_equal_to_midnight() {
    let instant = NaiveDate::from_ymd_opt(1972, 12, 14)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert_ne!(
        DateValue::from_datetime(instant),
        DateValue::given_date(14, 12, 1972)
    );
}

#[test]
fn to_datetime_is_midnight_for_field_constructors() {
    assert_eq!(
        DateValue::given_date(1, 1, 2000).to_datetime(),
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
    );
}

#[test]
fn eq_same_fields() {
    assert_eq!(
        DateValue::given_date(14, 12, 1972),
        DateValue::given_date(14, 12, 1972)
    );
}

#[test]
fn ne_different_year() {
    assert_ne!(
        DateValue::given_date(14, 12, 1972),
        DateValue::given_date(14, 12, 1973)
    );
}

#[test]
fn ord_follows_calendar_order() {
    let earlier = DateValue::given_date(31, 12, 1999);
    let later = DateValue::given_date(1, 1, 2000);
    assert!(earlier < later);
}
