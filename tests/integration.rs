use athan::{
    compute_prayer_times, AthanError, CalendarDate, ClockTime, Location, Prayer, PrayerAngles,
    PrayerCalculator, PrayerTimes, ZUHR_OFFSET_HOURS,
};
use qtty::Seconds;

const MAKKAH_ANGLES: PrayerAngles = PrayerAngles::new(18.5, 18.5, 1.0);

fn makkah_on(day: i32, month: i32, year: i32) -> PrayerTimes {
    compute_prayer_times(
        CalendarDate::new(day, month, year),
        &Location::MAKKAH,
        &MAKKAH_ANGLES,
    )
    .expect("makkah prayer times")
}

fn assert_close(actual: ClockTime, expected: ClockTime, label: &str) {
    let delta = actual.seconds_since_midnight() - expected.seconds_since_midnight();
    assert!(
        delta.abs() <= Seconds::new(2.0),
        "{label}: got {actual}, expected {expected}"
    );
}

#[test]
fn makkah_equinox_matches_reference_timetable() {
    let times = makkah_on(21, 3, 2024);
    assert_close(times.fajr, ClockTime::new(5, 7, 34), "fajr");
    assert_close(times.sunrise, ClockTime::new(6, 21, 15), "sunrise");
    assert_close(times.zuhr, ClockTime::new(12, 47, 52), "zuhr");
    assert_close(times.asr, ClockTime::new(15, 52, 44), "asr");
    assert_close(times.maghrib, ClockTime::new(18, 34, 29), "maghrib");
    assert_close(times.isha, ClockTime::new(19, 48, 10), "isha");
}

#[test]
fn makkah_summer_solstice_matches_reference_timetable() {
    let times = makkah_on(21, 6, 2024);
    assert_close(times.fajr, ClockTime::new(4, 11, 21), "fajr");
    assert_close(times.sunrise, ClockTime::new(5, 36, 38), "sunrise");
    assert_close(times.zuhr, ClockTime::new(12, 42, 33), "zuhr");
    assert_close(times.asr, ClockTime::new(15, 42, 23), "asr");
    assert_close(times.maghrib, ClockTime::new(19, 8, 27), "maghrib");
    assert_close(times.isha, ClockTime::new(20, 33, 44), "isha");
}

#[test]
fn repeated_computation_is_identical() {
    let calc = PrayerCalculator::new(Location::MAKKAH, MAKKAH_ANGLES);
    let date = CalendarDate::new(21, 3, 2024);
    let first = calc.compute_hours(date).unwrap();
    for _ in 0..10 {
        let again = calc.compute_hours(date).unwrap();
        assert_eq!(again.fajr.to_bits(), first.fajr.to_bits());
        assert_eq!(again.isha.to_bits(), first.isha.to_bits());
        assert_eq!(again.transit.to_bits(), first.transit.to_bits());
    }
}

#[test]
fn zuhr_follows_transit_regardless_of_configuration() {
    let date = CalendarDate::new(3, 11, 2024);
    let configs = [
        (Location::MAKKAH, MAKKAH_ANGLES),
        (Location::new(51.5074, -0.1278, 11.0, 0.0), PrayerAngles::new(12.0, 12.0, 2.0)),
        (Location::new(-33.8688, 151.2093, 58.0, 11.0), PrayerAngles::new(18.0, 17.0, 1.0)),
    ];
    for (location, angles) in configs {
        let hours = PrayerCalculator::new(location, angles)
            .compute_hours(date)
            .unwrap();
        assert!((hours.zuhr - hours.transit - ZUHR_OFFSET_HOURS).abs() < 1e-12);
    }
}

#[test]
fn mid_latitude_days_are_chronological() {
    let cairo = Location::new(30.0444, 31.2357, 23.0, 2.0);
    let angles = PrayerAngles::new(19.5, 17.5, 1.0);
    for month in 1..=12 {
        let times = compute_prayer_times(CalendarDate::new(15, month, 2024), &cairo, &angles)
            .unwrap();
        assert!(times.is_chronological(), "month {month}: {times}");
        for (prayer, time) in times.iter() {
            assert!(time.to_naive_time().is_some(), "{prayer} out of range: {time}");
        }
    }
}

#[test]
fn sunrise_and_maghrib_are_symmetric_at_equinox() {
    let calc = PrayerCalculator::new(Location::MAKKAH, MAKKAH_ANGLES);
    let hours = calc.compute_hours(CalendarDate::new(21, 3, 2024)).unwrap();
    let morning = hours.transit - hours.sunrise;
    let evening = hours.maghrib - hours.transit;
    assert!((morning - evening).abs() < 1e-12);
    // Near the equinox both are close to six hours plus refraction.
    assert!((morning - 6.1).abs() < 0.1, "half day = {morning} h");
}

#[test]
fn high_latitude_summer_reports_unreachable_twilight() {
    let london = Location::new(51.5074, -0.1278, 11.0, 1.0);
    let err = compute_prayer_times(CalendarDate::new(21, 6, 2024), &london, &MAKKAH_ANGLES)
        .unwrap_err();
    match err {
        AthanError::UnreachableAltitude {
            prayer,
            cos_hour_angle,
            ..
        } => {
            assert_eq!(prayer, Prayer::Fajr);
            assert!(cos_hour_angle < -1.0);
        }
        other => panic!("unexpected error: {other}"),
    }

    // The same place in winter is fine.
    let winter = compute_prayer_times(CalendarDate::new(21, 12, 2024), &london, &MAKKAH_ANGLES)
        .unwrap();
    assert!(winter.is_chronological());
}

#[test]
fn naive_date_input_matches_calendar_date() {
    let naive = chrono::NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
    let calc = PrayerCalculator::new(Location::MAKKAH, MAKKAH_ANGLES);
    assert_eq!(
        calc.compute(naive.into()).unwrap(),
        calc.compute(CalendarDate::new(21, 3, 2024)).unwrap()
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_prayer_times_roundtrip() {
    let times = makkah_on(21, 3, 2024);
    let json = serde_json::to_string(&times).unwrap();
    assert!(json.contains("\"maghrib\""));
    let back: PrayerTimes = serde_json::from_str(&json).unwrap();
    assert_eq!(back, times);
}

#[cfg(feature = "serde")]
#[test]
fn serde_calculator_configuration_loads() {
    let json = r#"{
        "location": { "latitude": 21.4241, "longitude": 39.8173, "elevation": 277.0, "timezone": 3.0 },
        "angles": { "fajr_angle": 18.5, "isha_angle": 18.5, "asr_shadow_factor": 1.0 }
    }"#;
    let calc: PrayerCalculator = serde_json::from_str(json).unwrap();
    assert_eq!(calc, PrayerCalculator::new(Location::MAKKAH, MAKKAH_ANGLES));
}
