use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::SolarResult;
use crate::sun::SunModel;
use crate::types::{DailyProfile, OrientedSurface, ProfileConfig, ProfileEntry, ProfileSummary};

const MINUTES_PER_DAY: i32 = 1440;

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

/// Number of whole sampling intervals in a day; `None` for a non-positive interval.
pub fn intervals_per_day(interval_minutes: i32) -> Option<i32> {
    (interval_minutes > 0).then(|| MINUTES_PER_DAY / interval_minutes)
}

fn interpolate_linear(v1: f64, v2: f64, fraction: f64) -> f64 {
    v1 + fraction * (v2 - v1)
}

fn find_bracketing_entries(
    entries: &[ProfileEntry],
    interval_minutes: i32,
    minutes: i32,
) -> Option<(&ProfileEntry, Option<&ProfileEntry>, f64)> {
    if interval_minutes <= 0 {
        return None;
    }
    let first_minutes = entries.first()?.minutes;
    let last_minutes = entries.last()?.minutes;
    if minutes < first_minutes || minutes > last_minutes {
        return None;
    }

    let last_idx = entries.len() as i32 - 1;
    let idx_before = ((minutes - first_minutes) / interval_minutes).min(last_idx) as usize;
    let entry_before = &entries[idx_before];
    let t0 = entry_before.minutes;

    match entries.get(idx_before + 1) {
        Some(after) if minutes != t0 => {
            let fraction = (minutes - t0) as f64 / (after.minutes - t0) as f64;
            Some((entry_before, Some(after), fraction))
        }
        _ => Some((entry_before, None, 0.0)),
    }
}

fn summarize(entries: &[ProfileEntry], interval_minutes: i32) -> ProfileSummary {
    let sunlit = entries.iter().filter(|e| e.fraction > 0.0).count() as i32;
    let peak = entries
        .iter()
        .filter(|e| e.fraction > 0.0)
        .max_by(|a, b| a.fraction.total_cmp(&b.fraction));
    let total: f64 = entries.iter().map(|e| e.fraction).sum();

    ProfileSummary {
        sunlit_minutes: sunlit * interval_minutes,
        peak_fraction: peak.map_or(0.0, |e| e.fraction),
        peak_minutes: peak.map(|e| e.minutes),
        equivalent_full_sun_hours: total * interval_minutes as f64 / 60.0,
    }
}

/// Samples the radiation fraction on `surface` across one UTC day.
pub fn generate_daily_profile(
    model: &SunModel<'_>,
    surface: &OrientedSurface,
    date: NaiveDate,
    config: &ProfileConfig,
) -> SolarResult<DailyProfile> {
    let interval_minutes = config.interval_minutes.max(1);
    let start_minute = config.start_minutes.max(0);
    let end_minute = config.end_minutes.min(MINUTES_PER_DAY - 1);
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));

    let capacity = ((end_minute - start_minute).max(0) / interval_minutes + 1) as usize;
    let mut entries = Vec::with_capacity(capacity);
    for mins in (start_minute..=end_minute).step_by(interval_minutes as usize) {
        let time = midnight + Duration::minutes(i64::from(mins));
        let fraction = model.surface_fraction(surface, &time)?;
        entries.push(ProfileEntry {
            minutes: mins,
            fraction,
        });
    }

    let summary = summarize(&entries, interval_minutes);
    log::debug!(
        "profile for {date}: {} samples, {:.2} full-sun hours",
        entries.len(),
        summary.equivalent_full_sun_hours
    );

    Ok(DailyProfile {
        date,
        surface: *surface,
        interval_minutes,
        entries,
        summary,
    })
}

/// Fraction at `minutes` past UTC midnight, interpolated between samples.
pub fn lookup_fraction(profile: &DailyProfile, minutes: i32) -> Option<f64> {
    let (before, after, fraction) =
        find_bracketing_entries(&profile.entries, profile.interval_minutes, minutes)?;
    match after {
        None => Some(before.fraction),
        Some(after) => Some(interpolate_linear(before.fraction, after.fraction, fraction)),
    }
}
