//! 3x3 rotation matrix.
//!
//! Accessors follow the CLHEP HepRotation naming: `yx()` is row y, column x.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use super::ThreeVector;

/// 3x3 matrix used for rotations.
///
/// Orthonormality is not enforced; consumers that assume it (angle
/// extraction) produce defined but meaningless results otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix {
    // Row-major storage
    data: [[f64; 3]; 3],
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix {
    /// Creates identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a matrix from its rows.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { data: rows }
    }

    /// Active rotation by `angle` about the X axis.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, c, -s],
            [0.0, s, c],
        ])
    }

    /// Active rotation by `angle` about the Y axis.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s],
            [0.0, 1.0, 0.0],
            [-s, 0.0, c],
        ])
    }

    /// Active rotation by `angle` about the Z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0],
            [s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Builds `Rz(z) * Ry(y) * Rx(x)`.
    ///
    /// This is the composition that GDML angle extraction inverts, so
    /// `DefineWriter::get_angles(&RotationMatrix::from_angles(x, y, z))`
    /// gives back `(x, y, z)` for `|y| < pi/2`.
    pub fn from_angles(x: f64, y: f64, z: f64) -> Self {
        Self::rotation_z(z) * Self::rotation_y(y) * Self::rotation_x(x)
    }

    /// Gets value at (row, col), 0-indexed.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Sets value at (row, col), 0-indexed.
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    pub fn xx(&self) -> f64 {
        self.data[0][0]
    }

    pub fn xy(&self) -> f64 {
        self.data[0][1]
    }

    pub fn xz(&self) -> f64 {
        self.data[0][2]
    }

    pub fn yx(&self) -> f64 {
        self.data[1][0]
    }

    pub fn yy(&self) -> f64 {
        self.data[1][1]
    }

    pub fn yz(&self) -> f64 {
        self.data[1][2]
    }

    pub fn zx(&self) -> f64 {
        self.data[2][0]
    }

    pub fn zy(&self) -> f64 {
        self.data[2][1]
    }

    pub fn zz(&self) -> f64 {
        self.data[2][2]
    }

    /// Multiplies matrix by a column vector.
    pub fn multiply_vector(&self, v: &ThreeVector) -> ThreeVector {
        let m = &self.data;
        ThreeVector::new(
            m[0][0] * v.x() + m[0][1] * v.y() + m[0][2] * v.z(),
            m[1][0] * v.x() + m[1][1] * v.y() + m[1][2] * v.z(),
            m[2][0] * v.x() + m[2][1] * v.y() + m[2][2] * v.z(),
        )
    }

    /// Computes determinant.
    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns transposed matrix.
    pub fn transposed(&self) -> RotationMatrix {
        let mut result = *self;
        for i in 0..3 {
            for j in 0..3 {
                result.data[i][j] = self.data[j][i];
            }
        }
        result
    }

    /// Inverse of a rotation (its transpose).
    pub fn inverse(&self) -> RotationMatrix {
        self.transposed()
    }

    /// Returns true if every element is within `tolerance` of identity.
    pub fn is_identity(&self, tolerance: f64) -> bool {
        let id = Self::identity();
        (0..3).all(|i| (0..3).all(|j| (self.data[i][j] - id.data[i][j]).abs() <= tolerance))
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, other: RotationMatrix) -> RotationMatrix {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.data[i][k] * other.data[k][j]).sum();
            }
        }
        RotationMatrix::from_rows(result)
    }
}

impl Mul<ThreeVector> for RotationMatrix {
    type Output = ThreeVector;

    fn mul(self, v: ThreeVector) -> ThreeVector {
        self.multiply_vector(&v)
    }
}

impl From<nalgebra::Matrix3<f64>> for RotationMatrix {
    fn from(m: nalgebra::Matrix3<f64>) -> Self {
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[(i, j)];
            }
        }
        RotationMatrix::from_rows(data)
    }
}

impl From<nalgebra::Rotation3<f64>> for RotationMatrix {
    fn from(r: nalgebra::Rotation3<f64>) -> Self {
        RotationMatrix::from(*r.matrix())
    }
}
