use approx::{assert_abs_diff_eq, assert_relative_eq};
use mta_calendar::{calendar_to_dom, dom_to_calendar};
use mta_clock::{
    ChandraClock, ClockError, MissionClock, to_calendar_date, to_day_of_year_fractional, to_dom,
    to_fractional_year,
};

#[test]
fn fractional_year_regression_fixture() {
    let fyear = to_fractional_year(&ChandraClock, 584150395.0).unwrap();
    assert_relative_eq!(fyear, 2016.5136588620724, max_relative = 1e-12);
}

#[test]
fn fractional_year_is_monotonic_across_new_year() {
    let clock = ChandraClock;
    let before = clock.seconds("2016:366:23:00:00").unwrap();
    let after = clock.seconds("2017:001:01:00:00").unwrap();
    let a = to_fractional_year(&clock, before).unwrap();
    let b = to_fractional_year(&clock, after).unwrap();
    assert!(a < b, "{a} >= {b}");
    assert!(a > 2016.99 && b > 2017.0);
}

#[test]
fn day_of_year_fractional_matches_date() {
    let clock = ChandraClock;
    let secs = clock.seconds("2019:184:06:00:00").unwrap();
    assert_relative_eq!(to_day_of_year_fractional(&clock, secs).unwrap(), 184.25);
}

#[test]
fn dom_from_mission_seconds_agrees_with_calendar() {
    let clock = ChandraClock;
    for date in ["1999:202:00:00:00", "2012:001:00:00:00", "2019:202:12:34:56"] {
        let secs = clock.seconds(date).unwrap();
        let parsed = to_calendar_date(&clock, secs).unwrap();
        let dom = to_dom(&clock, secs).unwrap();
        assert_eq!(
            dom,
            calendar_to_dom(parsed.year(), parsed.day_of_year()).unwrap()
        );
        assert_eq!(
            dom_to_calendar(dom).unwrap(),
            (parsed.year(), parsed.day_of_year())
        );
    }
}

#[test]
fn dom_fixtures_through_clock() {
    let clock = ChandraClock;
    let epoch = clock.seconds("1999:202:00:00:00").unwrap();
    assert_eq!(to_dom(&clock, epoch).unwrap(), 0);
    let later = clock.seconds("2019:202:00:00:00").unwrap();
    assert_eq!(to_dom(&clock, later).unwrap(), 7305);
}

#[test]
fn one_day_of_seconds_advances_dom_by_one() {
    let clock = ChandraClock;
    let start = clock.seconds("2010:100:12:00:00").unwrap();
    let d0 = to_dom(&clock, start).unwrap();
    let d1 = to_dom(&clock, start + 86_400.0).unwrap();
    assert_eq!(d1, d0 + 1);
}

#[test]
fn seconds_string_round_trip_over_mission() {
    let clock = ChandraClock;
    let mut secs = 0.0;
    while secs < 900_000_000.0 {
        let date = clock.date_string(secs).unwrap();
        let back = clock.seconds(&date).unwrap();
        // Whole-second truncation loses at most one second.
        assert!(
            (0.0..1.0 + 1e-6).contains(&(secs - back)),
            "{secs} -> {date} -> {back}"
        );
        secs += 7_777_777.0;
    }
}

#[test]
fn pre_epoch_dates_have_no_dom() {
    let clock = ChandraClock;
    let secs = clock.seconds("1998:150:00:00:00").unwrap();
    assert!(matches!(to_dom(&clock, secs), Err(ClockError::Calendar(_))));
    assert_abs_diff_eq!(
        to_fractional_year(&clock, secs).unwrap(),
        1998.0 + 150.0 / 365.0,
        epsilon = 1e-12
    );
}
