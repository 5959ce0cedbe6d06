//! Simulated vertex (interaction or decay point).

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::gp::ThreeVector;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VtxPoint {
    id: i32,
    x: f64,
    y: f64,
    z: f64,
    t: f64,
}

impl VtxPoint {
    /// New vertex at `position` and time `t`. The id stays 0 until the
    /// truth container assigns one.
    pub fn new(position: ThreeVector, t: f64) -> Self {
        Self {
            id: 0,
            x: position.x(),
            y: position.y(),
            z: position.z(),
            t,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn position(&self) -> ThreeVector {
        ThreeVector::new(self.x, self.y, self.z)
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn set_t(&mut self, t: f64) {
        self.t = t;
    }

    pub fn set_position(&mut self, position: ThreeVector) {
        self.x = position.x();
        self.y = position.y();
        self.z = position.z();
    }

    pub fn identify(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for VtxPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vtx id: {} x: {} y: {} z: {} t: {}",
            self.id, self.x, self.y, self.z, self.t
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtx_point_new() {
        let v = VtxPoint::new(ThreeVector::new(1.0, -2.0, 30.0), 0.5);
        assert_eq!(v.id(), 0);
        assert_eq!(v.position(), ThreeVector::new(1.0, -2.0, 30.0));
        assert_eq!(v.t(), 0.5);
        assert_eq!(v.to_string(), "vtx id: 0 x: 1 y: -2 z: 30 t: 0.5");
    }
}
