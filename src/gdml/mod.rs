//! GDML (Geometry Description Markup Language) output

mod define;
mod dom;
mod write;

pub use define::DefineWriter;
pub use dom::{AttrValue, Attribute, Document, ElementId};
pub use write::{DEFAULT_SCHEMA_LOCATION, GdmlOptions, GdmlWrite};
