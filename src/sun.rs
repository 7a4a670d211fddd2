use chrono::{DateTime, TimeZone, Timelike, Utc};

use crate::error::SolarResult;
use crate::geometry::{central_angle_cosine, rad_to_deg};
use crate::seasons::SeasonalTable;
use crate::types::GeoPoint;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Low-precision subsolar point model: sinusoidal latitude over the solar year and
/// longitude from UTC time of day.
#[derive(Debug, Clone, Copy)]
pub struct SunModel<'a> {
    pub table: &'a SeasonalTable,
    /// Peak subsolar latitude in degrees, reached at the solstices.
    pub axial_tilt: f64,
}

impl Default for SunModel<'static> {
    fn default() -> Self {
        Self {
            table: SeasonalTable::builtin(),
            axial_tilt: EARTH_AXIAL_TILT,
        }
    }
}

impl<'a> SunModel<'a> {
    pub fn with_table(table: &'a SeasonalTable) -> Self {
        Self {
            table,
            axial_tilt: EARTH_AXIAL_TILT,
        }
    }

    pub fn sun_latitude<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> SolarResult<f64> {
        let phase = self.table.solar_year_phase(time)?;
        Ok(self.axial_tilt * (2.0 * std::f64::consts::PI * phase).sin())
    }

    pub fn sun_location<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> SolarResult<GeoPoint> {
        Ok(GeoPoint::new(self.sun_latitude(time)?, sun_longitude(time)))
    }

    pub fn is_visible_at<Tz: TimeZone>(
        &self,
        location: GeoPoint,
        time: &DateTime<Tz>,
    ) -> SolarResult<bool> {
        Ok(is_visible(location, self.sun_location(time)?))
    }
}

/// Longitude of the subsolar point. Positive before 12:00 UTC, negative after.
pub fn sun_longitude<Tz: TimeZone>(time: &DateTime<Tz>) -> f64 {
    let utc = time.with_timezone(&Utc);
    let hours =
        utc.hour() as f64 - 12.0 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;
    hours * -DEGREES_PER_HOUR
}

pub fn sun_latitude<Tz: TimeZone>(time: &DateTime<Tz>) -> SolarResult<f64> {
    SunModel::default().sun_latitude(time)
}

pub fn sun_location<Tz: TimeZone>(time: &DateTime<Tz>) -> SolarResult<GeoPoint> {
    SunModel::default().sun_location(time)
}

/// True when a sun at zenith over `sun` is on or above the horizon at `observer`.
pub fn is_visible(observer: GeoPoint, sun: GeoPoint) -> bool {
    central_angle_cosine(sun, observer) >= 0.0
}

pub fn is_visible_at<Tz: TimeZone>(location: GeoPoint, time: &DateTime<Tz>) -> SolarResult<bool> {
    SunModel::default().is_visible_at(location, time)
}

/// Elevation of the sun above the horizon at `observer`, in degrees.
pub fn sun_elevation(observer: GeoPoint, sun: GeoPoint) -> f64 {
    90.0 - rad_to_deg(central_angle_cosine(observer, sun).clamp(-1.0, 1.0).acos())
}
