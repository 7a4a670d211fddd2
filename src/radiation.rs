use chrono::{DateTime, TimeZone};

use crate::error::SolarResult;
use crate::geometry::central_angle_cosine;
use crate::orientation::orient;
use crate::sun::{is_visible, SunModel};
use crate::types::{GeoPoint, OrientedSurface};

impl SunModel<'_> {
    /// Fraction of maximum radiation reaching a surface at `location` with the given
    /// tilt and bearing. Zero when the sun is below the horizon or behind the surface.
    pub fn radiation_fraction<Tz: TimeZone>(
        &self,
        location: GeoPoint,
        time: &DateTime<Tz>,
        tilt: f64,
        bearing: f64,
    ) -> SolarResult<f64> {
        let sun = self.sun_location(time)?;
        if !is_visible(location, sun) {
            return Ok(0.0);
        }
        let oriented = orient(location, tilt, bearing);
        Ok(central_angle_cosine(sun, oriented).max(0.0))
    }

    pub fn surface_fraction<Tz: TimeZone>(
        &self,
        surface: &OrientedSurface,
        time: &DateTime<Tz>,
    ) -> SolarResult<f64> {
        self.radiation_fraction(surface.location, time, surface.tilt, surface.bearing)
    }
}

pub fn solar_radiation_fraction<Tz: TimeZone>(
    location: GeoPoint,
    time: &DateTime<Tz>,
    tilt: f64,
    bearing: f64,
) -> SolarResult<f64> {
    SunModel::default().radiation_fraction(location, time, tilt, bearing)
}
