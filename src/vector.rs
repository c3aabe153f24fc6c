//! Length-generic vector algebra over `&[f64]` slices.
//!
//! Anything that is statically three-dimensional goes through `vecmath`
//! instead; the slice API exists for the operations whose dimension is
//! genuinely dynamic and therefore checked at runtime.

use crate::error::{Error, Result};

pub type Vec3 = vecmath::Vector3<f64>;

/// Euclidean norm. The empty slice has magnitude 0.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|a| a * a).sum::<f64>().sqrt()
}

pub fn dot_product(v: &[f64], w: &[f64]) -> Result<f64> {
    if v.len() != w.len() {
        return Err(Error::LengthMismatch {
            left: v.len(),
            right: w.len(),
        });
    }
    Ok(v.iter().zip(w).map(|(a, b)| a * b).sum())
}

pub fn cross_product(v: &[f64], w: &[f64]) -> Result<Vec3> {
    if v.len() != 3 || w.len() != 3 {
        return Err(Error::InvalidDimension {
            left: v.len(),
            right: w.len(),
        });
    }
    Ok([
        v[1] * w[2] - v[2] * w[1],
        v[2] * w[0] - v[0] * w[2],
        v[0] * w[1] - v[1] * w[0],
    ])
}

/// Angle between two vectors in radians, in [0, pi].
///
/// A zero-magnitude operand yields 0 rather than an error: the angle is
/// geometrically undefined there and callers treat it as "no separation".
pub fn angle_vectors(v: &[f64], w: &[f64]) -> Result<f64> {
    let dot = dot_product(v, w)?;
    let (mv, mw) = (magnitude(v), magnitude(w));
    if mv == 0.0 || mw == 0.0 {
        return Ok(0.0);
    }
    // rounding can push the cosine marginally outside acos's domain
    Ok((dot / (mv * mw)).clamp(-1.0, 1.0).acos())
}
