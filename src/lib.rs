//! detsim: detector simulation plumbing
//!
//! Two pieces of a Geant4-style simulation framework:
//! - [`gdml`]: a GDML writer for define blocks (positions, rotations, scales)
//! - [`truth`]: the Monte Carlo truth container holding particles, vertices
//!   and their embedding flags for one event

pub mod gdml;
pub mod gp;
pub mod precision;
pub mod truth;
pub mod units;

// Re-exports for convenience
pub use gdml::{AttrValue, Attribute, DefineWriter, Document, ElementId, GdmlOptions, GdmlWrite};
pub use gp::{RotationMatrix, ThreeVector};
pub use truth::{InsertError, Particle, TruthInfoContainer, VtxPoint};

/// Result type for detsim operations
pub type Result<T> = std::result::Result<T, DetsimError>;

#[derive(Debug, thiserror::Error)]
pub enum DetsimError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("No define element has been written yet")]
    MissingDefine,
}
