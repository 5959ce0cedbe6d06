//! Geometric primitives.
//!
//! The Hep3Vector/HepRotation pair every transform in the simulation is
//! expressed with.

mod mat;
mod xyz;

pub use mat::RotationMatrix;
pub use xyz::ThreeVector;
