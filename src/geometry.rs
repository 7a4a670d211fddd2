use crate::types::{GeoPoint, UnitVector3};

/// Decimal places kept on unit vector components.
pub const VECTOR_DECIMALS: i32 = 15;
/// Decimal places kept on latitude and longitude.
pub const DEGREE_DECIMALS: i32 = 12;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Maps any longitude into (-180, 180]. Values already in that range are returned unchanged.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if longitude > -180.0 && longitude <= 180.0 {
        return longitude;
    }
    let wrapped = normalize_angle(longitude + 180.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn to_unit_vector(point: GeoPoint) -> UnitVector3 {
    let lat = deg_to_rad(point.latitude);
    let lon = deg_to_rad(point.longitude);
    UnitVector3::new(
        round_to(lat.cos() * lon.cos(), VECTOR_DECIMALS),
        round_to(lat.cos() * lon.sin(), VECTOR_DECIMALS),
        round_to(lat.sin(), VECTOR_DECIMALS),
    )
}

pub fn to_geo(v: UnitVector3) -> GeoPoint {
    // asin is undefined past +-1; rounding noise can push z there
    let lat = rad_to_deg(v.z.clamp(-1.0, 1.0).asin());
    let lon = round_to(rad_to_deg(v.y.atan2(v.x)), DEGREE_DECIMALS);
    GeoPoint::new(round_to(lat, DEGREE_DECIMALS), normalize_longitude(lon))
}

/// Cosine of the great-circle angle between two points.
pub fn central_angle_cosine(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = deg_to_rad(a.latitude);
    let lon_a = deg_to_rad(a.longitude);
    let lat_b = deg_to_rad(b.latitude);
    let lon_b = deg_to_rad(b.longitude);
    lat_a.cos() * lat_b.cos() * (lon_a - lon_b).cos() + lat_a.sin() * lat_b.sin()
}

/// Rotates `point` about the axis through `axis` by `angle` degrees (Rodrigues' formula).
///
/// Positive angles turn counter-clockwise as seen from space looking down on `axis`.
pub fn rotate_around_axis(point: GeoPoint, axis: GeoPoint, angle: f64) -> GeoPoint {
    let v = to_unit_vector(point);
    let k = to_unit_vector(axis);
    let theta = deg_to_rad(angle);
    let (sin_t, cos_t) = theta.sin_cos();

    let rotated = v * cos_t - k.cross(&v) * sin_t + k * (k.dot(&v) * (1.0 - cos_t));
    to_geo(rotated)
}
