//! System of units.
//!
//! Internal values follow the Geant4/CLHEP convention: millimetre and radian
//! are 1. To express an internal value in a unit, divide
//! by that unit (`angle / DEGREE` gives degrees).

use std::f64::consts::PI;

// Length
pub const MM: f64 = 1.0;
pub const CM: f64 = 10.0 * MM;
pub const M: f64 = 1000.0 * MM;

// Angle
pub const DEGREE: f64 = PI / 180.0;
