//! Simulated particle record.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::gp::ThreeVector;

/// A simulated particle (track) as stored in the truth container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    name: String,
    /// PDG particle code
    pid: i32,
    track_id: i32,
    vtx_id: i32,
    parent_id: i32,
    primary_id: i32,
    px: f64,
    py: f64,
    pz: f64,
    e: f64,
}

impl Particle {
    pub fn new(name: impl Into<String>, pid: i32, momentum: ThreeVector) -> Self {
        Self {
            name: name.into(),
            pid,
            px: momentum.x(),
            py: momentum.y(),
            pz: momentum.z(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }

    pub fn track_id(&self) -> i32 {
        self.track_id
    }

    pub fn vtx_id(&self) -> i32 {
        self.vtx_id
    }

    pub fn parent_id(&self) -> i32 {
        self.parent_id
    }

    pub fn primary_id(&self) -> i32 {
        self.primary_id
    }

    pub fn px(&self) -> f64 {
        self.px
    }

    pub fn py(&self) -> f64 {
        self.py
    }

    pub fn pz(&self) -> f64 {
        self.pz
    }

    pub fn e(&self) -> f64 {
        self.e
    }

    pub fn momentum(&self) -> ThreeVector {
        ThreeVector::new(self.px, self.py, self.pz)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_pid(&mut self, pid: i32) {
        self.pid = pid;
    }

    pub fn set_track_id(&mut self, id: i32) {
        self.track_id = id;
    }

    pub fn set_vtx_id(&mut self, id: i32) {
        self.vtx_id = id;
    }

    pub fn set_parent_id(&mut self, id: i32) {
        self.parent_id = id;
    }

    pub fn set_primary_id(&mut self, id: i32) {
        self.primary_id = id;
    }

    pub fn set_e(&mut self, e: f64) {
        self.e = e;
    }

    pub fn set_momentum(&mut self, p: ThreeVector) {
        self.px = p.x();
        self.py = p.y();
        self.pz = p.z();
    }

    /// Writes the one-line diagnostic to `out`.
    pub fn identify(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {} pid: {} track id: {} vtx id: {} parent id: {} primary id: {} \
             p = [{}, {}, {}] e: {}",
            self.name,
            self.pid,
            self.track_id,
            self.vtx_id,
            self.parent_id,
            self.primary_id,
            self.px,
            self.py,
            self.pz,
            self.e
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_new() {
        let p = Particle::new("e-", 11, ThreeVector::new(0.1, 0.2, 3.0));
        assert_eq!(p.name(), "e-");
        assert_eq!(p.pid(), 11);
        assert_eq!(p.track_id(), 0);
        assert_eq!(p.momentum(), ThreeVector::new(0.1, 0.2, 3.0));
    }

    #[test]
    fn test_particle_identify() {
        let mut p = Particle::new("pi+", 211, ThreeVector::new(1.0, 0.0, -2.5));
        p.set_track_id(7);
        p.set_parent_id(3);

        let mut out = Vec::new();
        p.identify(&mut out).expect("Failed to write");
        let line = String::from_utf8(out).expect("utf8");
        assert!(line.contains("name: pi+"));
        assert!(line.contains("track id: 7"));
        assert!(line.contains("parent id: 3"));
        assert!(line.contains("p = [1, 0, -2.5]"));
        assert!(line.ends_with('\n'));
    }
}
