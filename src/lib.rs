pub mod error;
pub mod geometry;
pub mod orientation;
pub mod profile;
pub mod radiation;
pub mod seasons;
pub mod sun;
pub mod types;

pub use error::{SolarError, SolarResult};

pub use geometry::{
    central_angle_cosine, deg_to_rad, normalize_angle, normalize_longitude, rad_to_deg,
    rotate_around_axis, round_to, to_geo, to_unit_vector,
};

pub use orientation::{normalize_position, orient};

pub use profile::{
    generate_daily_profile, intervals_per_day, lookup_fraction, minutes_to_time, time_to_minutes,
};

pub use radiation::solar_radiation_fraction;

pub use seasons::{find_surrounding_elements, solar_year_phase, SeasonalTable};

pub use sun::{
    is_visible, is_visible_at, sun_elevation, sun_latitude, sun_location, sun_longitude,
    SunModel, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use types::{
    Bracket, DailyProfile, GeoPoint, OrientedSurface, ProfileConfig, ProfileEntry,
    ProfileSummary, SeasonMarker, UnitVector3,
};
