use consts::{EARTH_RADIUS_KM, MAX_DISTANCE_KM};
use models::LatLng;

pub mod consts;
pub mod directions;
pub mod models;

/// Haversine distance in kilometres.
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}

/// Initial great-circle bearing in degrees, `[0, 360)`.
pub fn bearing_deg(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let y = delta_lambda.sin() * phi_2.cos();
    let x = phi_1.cos() * phi_2.sin() - phi_1.sin() * phi_2.cos() * delta_lambda.cos();
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

pub fn closeness_percentage(distance_km: f64) -> f64 {
    ((MAX_DISTANCE_KM - distance_km) * 100.0 / MAX_DISTANCE_KM).clamp(0.0, 100.0)
}

pub fn within_reference_domain(point: LatLng) -> bool {
    (consts::MIN_LATITUDE..=consts::MAX_LATITUDE).contains(&point.lat)
        && (consts::MIN_LONGITUDE..=consts::MAX_LONGITUDE).contains(&point.lng)
}
