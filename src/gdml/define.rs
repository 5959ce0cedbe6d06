//! GDML `define` block writer.
//!
//! Writes position, rotation and scale elements. Each component is snapped
//! to its neutral value (0, or 1 for scales) when it is within machine
//! epsilon of it, then converted to the unit named in the `unit` attribute.

use log::info;

use crate::gp::{RotationMatrix, ThreeVector};
use crate::precision::{self, snap_to_unity, snap_to_zero};
use crate::units;
use crate::{DetsimError, Result};
use super::dom::ElementId;
use super::write::GdmlWrite;

/// Writer for the `define` section of a GDML document.
#[derive(Debug, Clone, Default)]
pub struct DefineWriter {
    base: GdmlWrite,
    define_element: Option<ElementId>,
}

impl DefineWriter {
    /// Tolerance for snapping scale factors to 1.
    pub const RELATIVE_PRECISION: f64 = precision::COMPUTATIONAL;
    /// Tolerance for snapping angles to 0.
    pub const ANGULAR_PRECISION: f64 = precision::COMPUTATIONAL;
    /// Tolerance for snapping lengths to 0.
    pub const LINEAR_PRECISION: f64 = precision::COMPUTATIONAL;

    pub fn new(base: GdmlWrite) -> Self {
        Self {
            base,
            define_element: None,
        }
    }

    pub fn base(&self) -> &GdmlWrite {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut GdmlWrite {
        &mut self.base
    }

    pub fn into_inner(self) -> GdmlWrite {
        self.base
    }

    /// The `define` element created by the last [`define_write`](Self::define_write).
    pub fn define_element(&self) -> Option<ElementId> {
        self.define_element
    }

    /// Extracts the (x, y, z) angles of `mat = Rz(z) * Ry(y) * Rx(x)`.
    ///
    /// When `cos(y)` vanishes (gimbal lock) x and z are not separable; all of
    /// the rotation about the vertical is put in x and z is 0.
    pub fn get_angles(mat: &RotationMatrix) -> ThreeVector {
        let cosb = (mat.xx() * mat.xx() + mat.yx() * mat.yx()).sqrt();

        if cosb > Self::RELATIVE_PRECISION {
            ThreeVector::new(
                mat.zy().atan2(mat.zz()),
                (-mat.zx()).atan2(cosb),
                mat.yx().atan2(mat.xx()),
            )
        } else {
            ThreeVector::new(
                (-mat.yz()).atan2(mat.yy()),
                (-mat.zx()).atan2(cosb),
                0.0,
            )
        }
    }

    /// Appends a dimensionless `<tag name x y z/>` scale element.
    pub fn scale_vector_write(
        &mut self,
        element: ElementId,
        tag: &str,
        name: &str,
        scl: &ThreeVector,
    ) -> ElementId {
        let scl = scl.map(|v| snap_to_unity(v, Self::RELATIVE_PRECISION));
        self.vector_write(element, tag, name, &scl, None)
    }

    /// Appends a rotation element; `rot` holds angles in radians, written in degrees.
    pub fn rotation_vector_write(
        &mut self,
        element: ElementId,
        tag: &str,
        name: &str,
        rot: &ThreeVector,
    ) -> ElementId {
        let rot = rot.map(|v| snap_to_zero(v, Self::ANGULAR_PRECISION) / units::DEGREE);
        self.vector_write(element, tag, name, &rot, Some("deg"))
    }

    /// Appends a position element, written in millimetres.
    pub fn position_vector_write(
        &mut self,
        element: ElementId,
        tag: &str,
        name: &str,
        pos: &ThreeVector,
    ) -> ElementId {
        let pos = pos.map(|v| snap_to_zero(v, Self::LINEAR_PRECISION) / units::MM);
        self.vector_write(element, tag, name, &pos, Some("mm"))
    }

    /// Creates the `define` element under `element` and makes it the active container.
    pub fn define_write(&mut self, element: ElementId) -> ElementId {
        info!("G4GDML: Writing definitions...");

        let define = self.base.new_element("define");
        self.base.document_mut().append_child(element, define);
        self.define_element = Some(define);
        define
    }

    /// Adds a named `position` to the active `define` block.
    pub fn add_position(&mut self, name: &str, pos: &ThreeVector) -> Result<ElementId> {
        let define = self.define_element.ok_or(DetsimError::MissingDefine)?;
        Ok(self.position_vector_write(define, "position", name, pos))
    }

    fn vector_write(
        &mut self,
        element: ElementId,
        tag: &str,
        name: &str,
        v: &ThreeVector,
        unit: Option<&str>,
    ) -> ElementId {
        let child = self.base.new_element(tag);
        let doc = self.base.document_mut();
        doc.set_attribute(child, GdmlWrite::new_attribute("name", name));
        doc.set_attribute(child, GdmlWrite::new_attribute("x", v.x()));
        doc.set_attribute(child, GdmlWrite::new_attribute("y", v.y()));
        doc.set_attribute(child, GdmlWrite::new_attribute("z", v.z()));
        if let Some(unit) = unit {
            doc.set_attribute(child, GdmlWrite::new_attribute("unit", unit));
        }
        doc.append_child(element, child);
        child
    }
}
