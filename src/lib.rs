//! Great-circle geometry on a spherical Earth.
//!
//! Coordinates in degrees go in, Cartesian vectors in kilometers come out,
//! and from those: angular separations, distances, directions, compass
//! bearings and cardinal labels. Everything is a pure function; the only
//! shared state is the Earth radius constant [`sphere::R`].

pub mod compass;
pub mod error;
pub mod sphere;
pub mod vector;

pub use compass::{
    bearing_between_coordinates, cardinal_from_angle, direction_between_coordinates, Cardinal,
};
pub use error::{Error, Result};
pub use sphere::{
    angle_between_coordinates, distance_between_coordinates, elevation_angle, to_coordinates,
    to_vector, R,
};
pub use vector::{angle_vectors, cross_product, dot_product, magnitude, Vec3};
