use crate::geometry::{normalize_angle, normalize_longitude, rotate_around_axis};
use crate::types::GeoPoint;

/// Finds where on the globe a flat surface would face the same direction as a surface
/// at `location` tilted by `tilt` degrees toward compass `bearing`.
///
/// Tilting toward north is a pure latitude shift to `latitude + tilt`. Any other
/// bearing is that shifted point rotated around `location` by the bearing angle.
/// Due north and due south take a closed-form path along the meridian, which also
/// handles tilting over a pole.
pub fn orient(location: GeoPoint, tilt: f64, bearing: f64) -> GeoPoint {
    if tilt == 0.0 {
        return location;
    }
    if bearing.rem_euclid(180.0) == 0.0 {
        return shift_along_meridian(location, tilt, bearing);
    }
    let elevated = GeoPoint::new(location.latitude + tilt, location.longitude);
    rotate_around_axis(elevated, location, bearing)
}

fn shift_along_meridian(location: GeoPoint, tilt: f64, bearing: f64) -> GeoPoint {
    // bearing is a multiple of 180 here: a whole turn faces north, an odd half turn south
    let direction = if bearing.rem_euclid(360.0) == 0.0 { 1.0 } else { -1.0 };
    normalize_position(location.latitude + tilt * direction, location.longitude)
}

/// Maps a latitude measured continuously along a meridian, possibly past a pole, onto
/// a point with latitude in [-90, 90] and longitude in (-180, 180].
pub fn normalize_position(latitude: f64, longitude: f64) -> GeoPoint {
    let mut lat = latitude;
    let mut lon = longitude;

    if !(-180.0..=180.0).contains(&lon) {
        log::warn!("normalizing out-of-range longitude {longitude}");
    }
    if !(-270.0..=270.0).contains(&lat) {
        log::warn!("wrapping latitude {latitude} more than once around the globe");
        lat = normalize_angle(lat + 180.0) - 180.0;
    }

    if lat > 90.0 {
        lat = 180.0 - lat;
        lon = opposite_meridian(lon);
    } else if lat < -90.0 {
        lat = -180.0 - lat;
        lon = opposite_meridian(lon);
    }

    GeoPoint::new(lat, normalize_longitude(lon))
}

/// Longitude 180 degrees away; inputs in [-180, 180] stay in [-180, 180].
fn opposite_meridian(longitude: f64) -> f64 {
    if longitude <= 0.0 {
        longitude + 180.0
    } else {
        longitude - 180.0
    }
}
