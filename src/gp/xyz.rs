//! 3D coordinate triplet.
//!
//! Used for positions, momenta, pre-extracted rotation angles and scale
//! factors alike.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 3D cartesian vector {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreeVector {
    x: f64,
    y: f64,
    z: f64,
}

impl ThreeVector {
    /// Creates a vector with given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Returns all three coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Square of the magnitude.
    #[inline]
    pub const fn mag2(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector.
    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }

    /// Transverse component (distance from the z axis).
    #[inline]
    pub fn perp(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub const fn dot(&self, other: &ThreeVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> ThreeVector {
        ThreeVector::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Add for ThreeVector {
    type Output = ThreeVector;

    fn add(self, rhs: ThreeVector) -> ThreeVector {
        ThreeVector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for ThreeVector {
    type Output = ThreeVector;

    fn sub(self, rhs: ThreeVector) -> ThreeVector {
        ThreeVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for ThreeVector {
    type Output = ThreeVector;

    fn mul(self, scalar: f64) -> ThreeVector {
        ThreeVector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for ThreeVector {
    type Output = ThreeVector;

    fn neg(self) -> ThreeVector {
        ThreeVector::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for ThreeVector {
    fn from(v: [f64; 3]) -> Self {
        ThreeVector::new(v[0], v[1], v[2])
    }
}

impl From<ThreeVector> for [f64; 3] {
    fn from(v: ThreeVector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for ThreeVector {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        ThreeVector::new(v.x, v.y, v.z)
    }
}

impl From<ThreeVector> for nalgebra::Vector3<f64> {
    fn from(v: ThreeVector) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
