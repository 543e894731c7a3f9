//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers. Finite inputs always produce a finite, non-negative result.
///
/// # Example
/// ```
/// use tripcalc_geo::{haversine_distance, Coordinate};
///
/// let equator = Coordinate::new(0.0, 0.0);
/// let quarter = Coordinate::new(0.0, 90.0);
///
/// let distance = haversine_distance(&equator, &quarter);
/// assert!((distance - 10007.5).abs() < 0.1);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ORIGIN: Coordinate = Coordinate { latitude: -23.0, longitude: -65.0 };
    const DESTINATION: Coordinate = Coordinate { latitude: -23.0, longitude: -66.0 };
    const SALTA: Coordinate = Coordinate { latitude: -24.7821, longitude: -65.4232 };
    const JUJUY: Coordinate = Coordinate { latitude: -24.1858, longitude: -65.2995 };

    #[test]
    fn test_one_degree_longitude_at_23_south() {
        let distance = haversine_distance(&ORIGIN, &DESTINATION);
        assert!((distance - 102.355).abs() < 0.01, "distance: {}", distance);
    }

    #[test]
    fn test_quarter_great_circle() {
        let distance = haversine_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 90.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance - expected).abs() < 1e-6);
        assert!((distance - 10007.5).abs() < 0.1);
    }

    #[test]
    fn test_salta_to_jujuy() {
        let distance = haversine_distance(&SALTA, &JUJUY);
        // Roughly 67 km as the crow flies
        assert!((distance - 67.5).abs() < 2.0, "Salta-Jujuy: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(haversine_distance(&SALTA, &SALTA), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance(&SALTA, &JUJUY);
        let d2 = haversine_distance(&JUJUY, &SALTA);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&SALTA, &JUJUY);
        let meters = haversine_distance_meters(&SALTA, &JUJUY);
        assert!((meters - km * 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_inputs_stay_finite() {
        let odd = Coordinate::new(123.0, 500.0);
        let distance = haversine_distance(&odd, &ORIGIN);
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric_and_non_negative(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let ab = haversine_distance(&a, &b);
            let ba = haversine_distance(&b, &a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
            // Never more than half the circumference
            prop_assert!(ab <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }

        #[test]
        fn prop_identity_is_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let a = Coordinate::new(lat, lon);
            prop_assert_eq!(haversine_distance(&a, &a), 0.0);
        }
    }
}
