//! Great-circle directions, compass bearings and cardinal labels.

use std::fmt;

use vecmath::{vec3_cross, vec3_len};

use crate::error::{Error, Result};
use crate::sphere::to_vector;
use crate::vector::{angle_vectors, Vec3};

const NORTH_POLE: Vec3 = [0.0, 0.0, 1.0];

// tangent to the sphere at v, in the plane of v and the Earth's axis,
// pointing toward the north pole
fn north_tangent(v: Vec3) -> Vec3 {
    vec3_cross(vec3_cross(v, NORTH_POLE), v)
}

/// Vector tangent to the great circle at the first coordinate, pointing
/// toward the second.
///
/// When the points are identical or antipodal no great circle is singled
/// out; the north tangent at the first point is returned instead.
pub fn direction_between_coordinates(
    lat1: f64,
    long1: f64,
    lat2: f64,
    long2: f64,
) -> Result<Vec3> {
    let v = to_vector(lat1, long1)?;
    let w = to_vector(lat2, long2)?;
    let tangent = vec3_cross(vec3_cross(v, w), v);
    if vec3_len(tangent) < 1.0 {
        Ok(north_tangent(v))
    } else {
        Ok(tangent)
    }
}

/// Compass bearing in degrees, [0, 360), from the first coordinate to the
/// second along the great circle.
///
/// The unsigned angle against local north covers [0, 180]; it is mirrored
/// onto (180, 360) whenever `long2 < long1`. That raw longitude comparison
/// matches the observed behavior of the tracker this library serves, but it
/// is not a cross-track sign test: targets reached the short way across the
/// antimeridian come out on the wrong side.
pub fn bearing_between_coordinates(lat1: f64, long1: f64, lat2: f64, long2: f64) -> Result<f64> {
    let v = to_vector(lat1, long1)?;
    let w = direction_between_coordinates(lat1, long1, lat2, long2)?;
    let bearing = angle_vectors(&w, &north_tangent(v))?.to_degrees();
    if long2 < long1 {
        Ok(360.0 - bearing)
    } else {
        Ok(bearing)
    }
}

/// One of the 8 coarse compass labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cardinal::N => "N",
            Cardinal::NE => "NE",
            Cardinal::E => "E",
            Cardinal::SE => "SE",
            Cardinal::S => "S",
            Cardinal::SW => "SW",
            Cardinal::W => "W",
            Cardinal::NW => "NW",
        })
    }
}

/// Map a bearing in degrees, [0, 360], onto its 45-degree compass sector.
pub fn cardinal_from_angle(angle: f64) -> Result<Cardinal> {
    if !(0.0..=360.0).contains(&angle) {
        return Err(Error::OutOfRange {
            name: "bearing",
            value: angle,
            min: 0.0,
            max: 360.0,
        });
    }
    use Cardinal::*;
    // the trailing N absorbs the wrap-around at 360
    const SECTORS: [Cardinal; 9] = [N, NE, E, SE, S, SW, W, NW, N];
    Ok(SECTORS[(angle / 45.0).round() as usize])
}
