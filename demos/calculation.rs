use chrono::TimeZone;
use chrono_tz::America::Chicago;

use solar_fraction::{
    generate_daily_profile, is_visible, minutes_to_time, sun_elevation, GeoPoint,
    OrientedSurface, ProfileConfig, SolarResult, SunModel,
};

fn main() -> SolarResult<()> {
    let location = GeoPoint::new(39.8, -89.6);
    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();

    let model = SunModel::default();
    let phase = model.table.solar_year_phase(&dt)?;
    let sun = model.sun_location(&dt)?;

    println!("=== Solar Radiation Fraction Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        location.latitude, -location.longitude
    );
    println!("Date/Time: {}", dt);
    println!("Seasonal table: {}", model.table.version());
    println!();
    println!("--- Sun ---");
    println!("Solar year phase: {:.4}", phase);
    println!("Subsolar point: {:.2}°, {:.2}°", sun.latitude, sun.longitude);
    println!("Visible: {}", is_visible(location, sun));
    println!("Elevation: {:.2}°", sun_elevation(location, sun));
    println!();
    println!("--- Panels (tilt, bearing) ---");
    let panels = [
        (0.0, 0.0),
        (30.0, 180.0),
        (40.0, 180.0),
        (90.0, 180.0),
        (30.0, 90.0),
        (90.0, 0.0),
    ];
    for (tilt, bearing) in panels {
        let surface = OrientedSurface::new(location, tilt, bearing);
        let fraction = model.surface_fraction(&surface, &dt)?;
        println!("{:>5.1}°, {:>5.1}°: {:.3}", tilt, bearing, fraction);
    }
    println!();

    let surface = OrientedSurface::new(location, 40.0, 180.0);
    let config = ProfileConfig::default();
    let profile = generate_daily_profile(&model, &surface, dt.date_naive(), &config)?;
    println!("--- Daily profile, 40° south ---");
    if let Some(peak) = profile.summary.peak_minutes {
        let (h, m) = minutes_to_time(peak);
        println!("Peak: {:.3} at {:02}:{:02} UTC", profile.summary.peak_fraction, h, m);
    }
    println!("Sunlit: {} min", profile.summary.sunlit_minutes);
    println!("Full-sun equivalent: {:.2} h", profile.summary.equivalent_full_sun_hours);
    Ok(())
}
