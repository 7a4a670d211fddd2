use chrono::NaiveDate;

use solar_fraction::profile::*;
use solar_fraction::sun::SunModel;
use solar_fraction::types::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn equinox_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
}

fn equator_flat() -> OrientedSurface {
    OrientedSurface::horizontal(GeoPoint::new(0.0, 0.0))
}

// ── Config ──

#[test]
fn test_default_config() {
    let c = ProfileConfig::default();
    assert_eq!(c.interval_minutes, 5);
    assert_eq!(c.start_minutes, 0);
    assert_eq!(c.end_minutes, 1439);
}

// ── Time utilities ──

#[test]
fn test_time_roundtrip() {
    for m in [0, 1, 59, 60, 61, 120, 719, 720, 721, 1439] {
        assert_eq!(time_to_minutes(minutes_to_time(m)), m, "minutes={}", m);
    }
}

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(390), (6, 30));
}

#[test]
fn test_intervals_per_day() {
    assert_eq!(intervals_per_day(5), Some(288));
    assert_eq!(intervals_per_day(15), Some(96));
    assert_eq!(intervals_per_day(30), Some(48));
    assert_eq!(intervals_per_day(1), Some(1440));
    assert_eq!(intervals_per_day(0), None);
    assert_eq!(intervals_per_day(-5), None);
}

// ── Generation ──

#[test]
fn test_full_day_sample_count() {
    let model = SunModel::default();
    let profile = generate_daily_profile(
        &model,
        &equator_flat(),
        equinox_day(),
        &ProfileConfig::default(),
    )
    .unwrap();
    assert_eq!(profile.entries.len(), 288);
    assert_eq!(profile.entries[0].minutes, 0);
    assert_eq!(profile.entries.last().unwrap().minutes, 1435);
    assert_eq!(profile.interval_minutes, 5);
    assert_eq!(profile.date, equinox_day());
}

#[test]
fn test_equinox_at_equator() {
    let model = SunModel::default();
    let profile = generate_daily_profile(
        &model,
        &equator_flat(),
        equinox_day(),
        &ProfileConfig::default(),
    )
    .unwrap();
    let summary = profile.summary;

    // Twelve hours of daylight, sun overhead at 12:00 UTC.
    assert!((715..=730).contains(&summary.sunlit_minutes), "sunlit={}", summary.sunlit_minutes);
    assert_eq!(summary.peak_minutes, Some(720));
    assert!(summary.peak_fraction > 0.9999, "peak={}", summary.peak_fraction);
    // Integral of cos over half a day: 24 / pi hours.
    assert_approx!(summary.equivalent_full_sun_hours, 24.0 / std::f64::consts::PI, 0.05);
}

#[test]
fn test_night_entries_are_zero() {
    let model = SunModel::default();
    let profile = generate_daily_profile(
        &model,
        &equator_flat(),
        equinox_day(),
        &ProfileConfig::default(),
    )
    .unwrap();
    for entry in &profile.entries {
        if entry.minutes < 300 || entry.minutes > 1140 {
            assert_eq!(entry.fraction, 0.0, "minutes={}", entry.minutes);
        }
    }
}

#[test]
fn test_partial_window() {
    let model = SunModel::default();
    let config = ProfileConfig {
        interval_minutes: 30,
        start_minutes: 360,
        end_minutes: 1080,
    };
    let profile = generate_daily_profile(&model, &equator_flat(), equinox_day(), &config).unwrap();
    assert_eq!(profile.entries.len(), 25);
    assert_eq!(profile.entries[0].minutes, 360);
    assert_eq!(profile.entries[24].minutes, 1080);
}

#[test]
fn test_south_facing_beats_north_facing() {
    let model = SunModel::default();
    let date = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
    let location = GeoPoint::new(48.1, 11.6);
    let south = OrientedSurface::new(location, 60.0, 180.0);
    let north = OrientedSurface::new(location, 60.0, 0.0);
    let config = ProfileConfig::default();

    let south = generate_daily_profile(&model, &south, date, &config).unwrap();
    let north = generate_daily_profile(&model, &north, date, &config).unwrap();
    assert!(
        south.summary.equivalent_full_sun_hours > north.summary.equivalent_full_sun_hours,
        "south={} north={}",
        south.summary.equivalent_full_sun_hours,
        north.summary.equivalent_full_sun_hours
    );
}

#[test]
fn test_polar_night_profile() {
    let model = SunModel::default();
    let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
    let surface = OrientedSurface::horizontal(GeoPoint::new(85.0, 0.0));
    let profile =
        generate_daily_profile(&model, &surface, date, &ProfileConfig::default()).unwrap();
    assert_eq!(profile.summary.sunlit_minutes, 0);
    assert_eq!(profile.summary.peak_minutes, None);
    assert_eq!(profile.summary.equivalent_full_sun_hours, 0.0);
}

#[test]
fn test_profile_outside_table() {
    let model = SunModel::default();
    let date = NaiveDate::from_ymd_opt(2040, 1, 1).unwrap();
    let err = generate_daily_profile(&model, &equator_flat(), date, &ProfileConfig::default())
        .unwrap_err();
    assert!(err.is_out_of_range());
}

// ── Lookup ──

#[test]
fn test_lookup_exact_and_interpolated() {
    let model = SunModel::default();
    let profile = generate_daily_profile(
        &model,
        &equator_flat(),
        equinox_day(),
        &ProfileConfig::default(),
    )
    .unwrap();

    let at_noon = profile.entries.iter().find(|e| e.minutes == 720).unwrap().fraction;
    assert_eq!(lookup_fraction(&profile, 720), Some(at_noon));

    let a = profile.entries.iter().find(|e| e.minutes == 600).unwrap().fraction;
    let b = profile.entries.iter().find(|e| e.minutes == 605).unwrap().fraction;
    let mid = lookup_fraction(&profile, 602).unwrap();
    assert_approx!(mid, a + 0.4 * (b - a), 1e-12);
}

#[test]
fn test_lookup_outside_samples() {
    let model = SunModel::default();
    let config = ProfileConfig {
        interval_minutes: 10,
        start_minutes: 360,
        end_minutes: 1080,
    };
    let profile = generate_daily_profile(&model, &equator_flat(), equinox_day(), &config).unwrap();
    assert_eq!(lookup_fraction(&profile, 100), None);
    assert_eq!(lookup_fraction(&profile, 1200), None);
    assert!(lookup_fraction(&profile, 1080).is_some());
}

#[test]
fn test_lookup_with_zero_interval() {
    let model = SunModel::default();
    let config = ProfileConfig::default();
    let mut profile =
        generate_daily_profile(&model, &equator_flat(), equinox_day(), &config).unwrap();
    profile.interval_minutes = 0;
    assert_eq!(lookup_fraction(&profile, 720), None);
    profile.interval_minutes = -5;
    assert_eq!(lookup_fraction(&profile, 720), None);
}
