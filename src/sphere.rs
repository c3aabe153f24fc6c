//! Geographic coordinates on the spherical Earth model.
//!
//! Latitudes and longitudes are degrees; vectors are kilometers from the
//! Earth's center, so a converted coordinate always has magnitude [`R`].

use crate::error::{Error, Result};
use crate::vector::{angle_vectors, Vec3};

/// Mean radius of the Earth in kilometers.
pub const R: f64 = 6371.0;

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Error::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Convert a latitude/longitude pair in degrees to a Cartesian vector.
pub fn to_vector(lat: f64, long: f64) -> Result<Vec3> {
    check_range("latitude", lat, -90.0, 90.0)?;
    check_range("longitude", long, -180.0, 180.0)?;
    let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
    let (sin_long, cos_long) = long.to_radians().sin_cos();
    Ok([R * cos_lat * cos_long, R * cos_lat * sin_long, R * sin_lat])
}

/// Recover the latitude/longitude pair of a Cartesian vector, in degrees.
///
/// At the poles the longitude is indeterminate and comes out as 0.
pub fn to_coordinates(v: Vec3) -> (f64, f64) {
    let [x, y, z] = v;
    let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
    let long = y.atan2(x).to_degrees();
    (lat, long)
}

/// Angular separation of two coordinates in radians, in [0, pi].
pub fn angle_between_coordinates(lat1: f64, long1: f64, lat2: f64, long2: f64) -> Result<f64> {
    let v = to_vector(lat1, long1)?;
    let w = to_vector(lat2, long2)?;
    angle_vectors(&v, &w)
}

/// Great-circle distance between two coordinates in kilometers.
pub fn distance_between_coordinates(lat1: f64, long1: f64, lat2: f64, long2: f64) -> Result<f64> {
    Ok(angle_between_coordinates(lat1, long1, lat2, long2)? * R)
}

/// Elevation in degrees of an object orbiting `altitude` km above the
/// sphere, seen by an observer separated from its ground point by `angle`
/// radians along the surface. Negative when the object is below the horizon.
pub fn elevation_angle(angle: f64, altitude: f64) -> f64 {
    let orbit = R + altitude;
    // law of cosines for the slant range, law of sines for the range angle
    let slant = (R * R + orbit * orbit - 2.0 * R * orbit * angle.cos()).sqrt();
    let gamma = (angle.sin() * R / slant).clamp(-1.0, 1.0).asin();
    (std::f64::consts::FRAC_PI_2 - angle - gamma).to_degrees()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vector::magnitude;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn equator_prime_meridian_is_x_axis() {
        let [x, y, z] = to_vector(0.0, 0.0).unwrap();
        assert_approx_eq!(x, R);
        assert_approx_eq!(y, 0.0);
        assert_approx_eq!(z, 0.0);
    }

    #[test]
    fn north_pole_is_z_axis_for_any_longitude() {
        for long in [-180.0, -45.0, 0.0, 90.0, 180.0] {
            let [x, y, z] = to_vector(90.0, long).unwrap();
            assert_approx_eq!(x, 0.0, 1e-9);
            assert_approx_eq!(y, 0.0, 1e-9);
            assert_approx_eq!(z, R);
        }
    }

    #[test]
    fn converted_vectors_sit_on_the_sphere() {
        for (lat, long) in [(38.5, -0.2), (-33.9, 151.2), (71.0, -8.0), (-90.0, 0.0)] {
            let v = to_vector(lat, long).unwrap();
            assert_approx_eq!(magnitude(&v), R, 1e-3);
        }
    }

    #[test]
    fn mid_latitude_fixture() {
        let [x, y, z] = to_vector(15.0, -28.0).unwrap();
        assert_approx_eq!(x, 5433.58, 0.01);
        assert_approx_eq!(y, -2889.09, 0.01);
        assert_approx_eq!(z, 1648.94, 0.01);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(
            to_vector(90.1, 0.0).unwrap_err(),
            Error::OutOfRange {
                name: "latitude",
                value: 90.1,
                min: -90.0,
                max: 90.0,
            }
        );
        assert!(to_vector(-91.0, 0.0).is_err());
        assert!(to_vector(0.0, 180.5).is_err());
        assert!(to_vector(0.0, -200.0).is_err());
        assert!(to_vector(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn coordinate_round_trip() {
        for (lat, long) in [(38.5, -0.2), (-33.9, 151.2), (0.0, 180.0), (45.0, -90.0)] {
            let (lat2, long2) = to_coordinates(to_vector(lat, long).unwrap());
            assert_approx_eq!(lat, lat2, 1e-9);
            assert_approx_eq!(long, long2, 1e-9);
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        // the clamped acos leaves a rounding residue of at most a few meters
        assert_approx_eq!(
            distance_between_coordinates(38.5, -0.2, 38.5, -0.2).unwrap(),
            0.0,
            1e-3
        );
    }

    #[test]
    fn quarter_and_half_great_circles() {
        assert_approx_eq!(
            distance_between_coordinates(0.0, 0.0, 0.0, 90.0).unwrap(),
            10007.54,
            0.01
        );
        assert_approx_eq!(
            distance_between_coordinates(0.0, 0.0, 0.0, 180.0).unwrap(),
            20015.09,
            0.01
        );
    }

    #[test]
    fn sixty_degrees_along_the_45th_parallel() {
        // same latitude, 90 degrees of longitude apart: a third of pi
        assert_approx_eq!(
            distance_between_coordinates(45.0, 0.0, 45.0, 90.0).unwrap(),
            6671.70,
            0.01
        );
        assert_approx_eq!(
            distance_between_coordinates(45.0, 0.0, 45.0, -90.0).unwrap(),
            6671.70,
            0.01
        );
    }

    #[test]
    fn overhead_object_is_at_ninety_degrees() {
        assert_approx_eq!(elevation_angle(0.0, 408.0), 90.0);
    }

    #[test]
    fn elevation_ten_degrees_out() {
        assert_approx_eq!(elevation_angle(10f64.to_radians(), 408.0), 14.53, 0.01);
    }

    #[test]
    fn distant_object_is_below_the_horizon() {
        // horizon for a 408 km orbit is at acos(R / (R + 408)) ~ 0.349 rad
        assert!(elevation_angle(0.5, 408.0) < 0.0);
        assert!(elevation_angle(0.2, 408.0) > 0.0);
    }
}
