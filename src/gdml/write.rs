//! Base GDML writer: document setup, element/attribute factories, naming.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::Result;
use super::dom::{AttrValue, Attribute, Document, ElementId};

/// Public GDML schema location written on the root element.
pub const DEFAULT_SCHEMA_LOCATION: &str =
    "http://service-spi.web.cern.ch/service-spi/app/releases/GDML/schema/gdml.xsd";

/// Writer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdmlOptions {
    /// Append a hex identifier to generated names so they stay unique.
    pub add_pointer_to_name: bool,
    pub schema_location: String,
}

impl Default for GdmlOptions {
    fn default() -> Self {
        Self {
            add_pointer_to_name: true,
            schema_location: DEFAULT_SCHEMA_LOCATION.to_string(),
        }
    }
}

/// Owns the document being written and its `gdml` root element.
#[derive(Debug, Clone)]
pub struct GdmlWrite {
    doc: Document,
    gdml: ElementId,
    options: GdmlOptions,
}

impl Default for GdmlWrite {
    fn default() -> Self {
        Self::new(GdmlOptions::default())
    }
}

impl GdmlWrite {
    pub fn new(options: GdmlOptions) -> Self {
        let mut doc = Document::new();
        let gdml = doc.new_element("gdml");
        doc.set_attribute(
            gdml,
            Attribute::new("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        );
        doc.set_attribute(
            gdml,
            Attribute::new("xsi:noNamespaceSchemaLocation", options.schema_location.as_str()),
        );
        doc.set_root(gdml);
        Self { doc, gdml, options }
    }

    pub fn options(&self) -> &GdmlOptions {
        &self.options
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// The `gdml` root element.
    pub fn gdml_element(&self) -> ElementId {
        self.gdml
    }

    pub fn new_element(&mut self, tag: &str) -> ElementId {
        self.doc.new_element(tag)
    }

    pub fn new_attribute(name: &str, value: impl Into<AttrValue>) -> Attribute {
        Attribute::new(name, value)
    }

    /// Makes `name` unique by appending `0x<id>` when enabled.
    pub fn generate_name(&self, name: &str, id: usize) -> String {
        if self.options.add_pointer_to_name {
            format!("{}0x{:x}", name, id)
        } else {
            name.to_string()
        }
    }

    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        self.doc.write_xml(out)
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("G4GDML: Writing '{}'...", path.display());

        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;

        info!("G4GDML: Writing '{}' done !", path.display());
        Ok(())
    }
}
