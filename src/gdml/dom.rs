//! Minimal XML document model for GDML output.
//!
//! Elements live in an arena owned by [`Document`] and are addressed by
//! [`ElementId`] handles, so writers can keep a handle to a container (the
//! `define` block, say) and append to it later.

use std::fmt;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::{DetsimError, Result};

/// Handle to an element of a [`Document`].
///
/// Handles are only meaningful for the document that created them. A handle
/// the document never issued reads as absent and is ignored by mutators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Attribute value. Numbers keep full precision until serialization.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            // Shortest representation that round-trips
            AttrValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// A named attribute, not yet attached to any element.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    attributes: Vec<Attribute>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

/// An XML document: element arena plus an optional root.
#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
    root: Option<ElementId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element.
    pub fn new_element(&mut self, tag: impl Into<String>) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        });
        id
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.0)
    }

    fn contains(&self, element: ElementId) -> bool {
        element.0 < self.nodes.len()
    }

    /// Attaches `attribute` to `element`, replacing one of the same name.
    pub fn set_attribute(&mut self, element: ElementId, attribute: Attribute) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        let attributes = &mut node.attributes;
        match attributes.iter_mut().find(|a| a.name == attribute.name) {
            Some(existing) => existing.value = attribute.value,
            None => attributes.push(attribute),
        }
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved. Nothing happens if either
    /// handle is unknown or the child would become its own parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn set_root(&mut self, element: ElementId) {
        self.root = Some(element);
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.node(element).map(|n| n.tag.as_str())
    }

    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&AttrValue> {
        self.node(element)?
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Attributes in insertion order; empty for an unknown handle.
    pub fn attributes(&self, element: ElementId) -> &[Attribute] {
        self.node(element)
            .map(|n| n.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// Children in document order; empty for an unknown handle.
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element).and_then(|n| n.parent)
    }

    /// First child of `element` with the given tag.
    pub fn child_by_tag(&self, element: ElementId, tag: &str) -> Option<ElementId> {
        self.children(element)
            .iter()
            .copied()
            .find(|c| self.tag(*c) == Some(tag))
    }

    /// Number of elements created in this document, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serializes the root subtree, preceded by an XML declaration.
    pub fn write_xml<W: Write>(&self, out: W) -> Result<()> {
        let root = self.root.ok_or(DetsimError::MissingRoot)?;
        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write_element(&mut writer, root)?;
        Ok(())
    }

    pub fn to_xml_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        // quick-xml only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_element<W: Write>(&self, writer: &mut Writer<W>, element: ElementId) -> Result<()> {
        let Some(node) = self.node(element) else {
            return Ok(());
        };
        let mut start = BytesStart::new(node.tag.as_str());
        for attr in &node.attributes {
            let value = attr.value.to_string();
            start.push_attribute((attr.name.as_str(), value.as_str()));
        }

        if node.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for child in &node.children {
                self.write_element(writer, *child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
        }
        Ok(())
    }
}
