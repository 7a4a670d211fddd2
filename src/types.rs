use std::ops::{Add, Mul, Sub};

use chrono::NaiveDate;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The point on the opposite side of the globe.
    pub fn antipode(&self) -> Self {
        let longitude = if self.longitude <= 0.0 {
            self.longitude + 180.0
        } else {
            self.longitude - 180.0
        };
        Self::new(-self.latitude, longitude)
    }

    /// Latitude in [-90, 90] and longitude in (-180, 180].
    pub fn is_normalized(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
            && self.longitude > -180.0
            && self.longitude <= 180.0
    }
}

/// Cartesian unit vector. +x through (0, 0), +y through (0, 90), +z through the North Pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UnitVector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for UnitVector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for UnitVector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for UnitVector3 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

/// The four astronomical events that anchor the solar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonMarker {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SeasonMarker {
    /// Chronological order within one calendar year.
    pub const ALL: [SeasonMarker; 4] = [
        SeasonMarker::MarchEquinox,
        SeasonMarker::JuneSolstice,
        SeasonMarker::SeptemberEquinox,
        SeasonMarker::DecemberSolstice,
    ];

    pub fn index(self) -> usize {
        match self {
            SeasonMarker::MarchEquinox => 0,
            SeasonMarker::JuneSolstice => 1,
            SeasonMarker::SeptemberEquinox => 2,
            SeasonMarker::DecemberSolstice => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Position of the marker in the solar year: 0.0, 0.25, 0.5 or 0.75.
    pub fn phase(self) -> f64 {
        self.index() as f64 / 4.0
    }
}

/// Two neighbouring elements of a sorted sequence that enclose a query value.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket<T> {
    pub lower: T,
    pub upper: T,
    /// `(index of lower % modulo) / modulo`, when a modulo was requested.
    pub phase: Option<f64>,
}

/// A flat surface at `location`, tilted from horizontal and facing `bearing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedSurface {
    pub location: GeoPoint,
    /// Degrees from horizontal: 0 flat, 90 vertical.
    pub tilt: f64,
    /// Compass direction the surface faces: 0 north, 90 east, 180 south.
    pub bearing: f64,
}

impl OrientedSurface {
    pub const fn new(location: GeoPoint, tilt: f64, bearing: f64) -> Self {
        Self {
            location,
            tilt,
            bearing,
        }
    }

    pub const fn horizontal(location: GeoPoint) -> Self {
        Self::new(location, 0.0, 0.0)
    }

    /// Location where a flat surface faces the same direction as this one.
    pub fn oriented_point(&self) -> GeoPoint {
        crate::orientation::orient(self.location, self.tilt, self.bearing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileConfig {
    pub interval_minutes: i32,
    /// First sampled minute of the UTC day.
    pub start_minutes: i32,
    /// Last sampled minute of the UTC day, inclusive.
    pub end_minutes: i32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 5,
            start_minutes: 0,
            end_minutes: 1439,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEntry {
    pub minutes: i32,
    pub fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSummary {
    pub sunlit_minutes: i32,
    pub peak_fraction: f64,
    pub peak_minutes: Option<i32>,
    /// Hours of perpendicular full sun delivering the same energy.
    pub equivalent_full_sun_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyProfile {
    pub date: NaiveDate,
    pub surface: OrientedSurface,
    pub interval_minutes: i32,
    pub entries: Vec<ProfileEntry>,
    pub summary: ProfileSummary,
}
