use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use price_chart_engine::domain::market_data::{Granularity, RangeSelection, resolve_label};
use price_chart_engine::resolve;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::str::FromStr;

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 45, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn one_month_from_mid_june() {
    let query = resolve(RangeSelection::OneMonth, at(2024, 6, 15));
    assert_eq!(query.granularity, Granularity::Day);
    assert_eq!(query.from, date(2024, 5, 15));
    assert_eq!(query.to, date(2024, 6, 15));
    assert_eq!(query.from_param(), "2024-05-15");
}

#[test]
fn every_range_maps_to_its_granularity() {
    let now = at(2024, 6, 15);
    let expected = [
        ("1D", Granularity::Minute, date(2024, 6, 15)),
        ("1W", Granularity::Day, date(2024, 6, 8)),
        ("3M", Granularity::Day, date(2024, 3, 15)),
        ("1Y", Granularity::Week, date(2023, 6, 15)),
        ("5Y", Granularity::Month, date(2019, 6, 15)),
    ];
    for (label, granularity, from) in expected {
        let query = resolve_label(label, now);
        assert_eq!(query.granularity, granularity, "{}", label);
        assert_eq!(query.from, from, "{}", label);
        assert_eq!(query.to, date(2024, 6, 15), "{}", label);
    }
}

#[test]
fn month_subtraction_clamps_to_month_end() {
    let query = resolve(RangeSelection::OneMonth, at(2024, 3, 31));
    assert_eq!(query.from, date(2024, 2, 29));
}

#[test]
fn utc_calendar_day_is_used() {
    let late = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
    let query = resolve(RangeSelection::OneDay, late);
    assert_eq!(query.from, date(2024, 6, 15));
    assert_eq!(query.to, query.from);
}

#[quickcheck]
fn one_day_is_always_today(secs: u32) -> bool {
    let now = Utc.timestamp_opt(i64::from(secs), 0).unwrap();
    let query = resolve(RangeSelection::OneDay, now);
    query.granularity == Granularity::Minute && query.from == now.date_naive() && query.to == query.from
}

#[quickcheck]
fn unknown_labels_resolve_like_five_years(label: String, secs: u32) -> TestResult {
    if RangeSelection::from_str(label.trim()).is_ok() {
        return TestResult::discard();
    }
    let now = Utc.timestamp_opt(i64::from(secs), 0).unwrap();
    TestResult::from_bool(resolve_label(&label, now) == resolve(RangeSelection::FiveYears, now))
}
