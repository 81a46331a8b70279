//! In-memory HTML document model.
//!
//! Documents are stored as an id-based arena tree (`indextree`): node handles
//! are `Copy`, there are no reference cycles, and mutation does not fight the
//! borrow checker. Query methods return owned id lists so callers can walk
//! and rewrite in the same pass.
//!
//! # Architecture
//!
//! - `parse`: html5ever front end converting pages and fragments into the arena
//! - `serialize`: walks the arena back out to HTML text
//! - this module: node data, queries, and content mutation

mod parse;
mod serialize;

use anyhow::Result;
use indextree::{Arena, NodeId};

/// Data stored for each node in the document tree.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Synthetic root node; never appears below the root.
    Document,

    /// `<!DOCTYPE ...>` declaration.
    Doctype { name: String },

    /// An element with a tag name and attributes.
    Element(ElementData),

    /// A run of character data.
    Text(String),

    /// `<!-- ... -->` comment.
    Comment(String),
}

/// Tag name and attributes of an element node.
///
/// Attributes keep their source order so a serialized document looks like
/// the one that was parsed.
#[derive(Debug, Clone)]
pub struct ElementData {
    tag_name: String,
    attributes: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Tag name; the parser ASCII-lowercases these for HTML elements.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set an attribute, replacing any existing value in place so the
    /// attribute keeps its position.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(attr, _)| attr != name);
        self.attributes.len() != before
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Whether the `class` attribute contains the given token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|value| value.split_whitespace().any(|token| token == class))
            .unwrap_or(false)
    }
}

/// A parsed HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    arena: Arena<NodeData>,
    root: NodeId,
}

impl Document {
    /// Parse a full HTML document.
    ///
    /// html5ever is error-recovering: malformed input yields a best-effort
    /// tree (with implied `html`/`head`/`body` elements where needed) rather
    /// than an error, the same way a browser reads it.
    pub fn parse(html: &str) -> Result<Self> {
        parse::document_from_str(html)
    }

    fn empty() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeData::Document);
        Self { arena, root }
    }

    /// Id of the synthetic document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Data for a node. `None` for ids whose subtree was removed.
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(|node| node.get())
    }

    /// Element data for a node, if it is a live element.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.node(id) {
            Some(NodeData::Element(data)) => Some(data),
            _ => None,
        }
    }

    /// Mutable element data for a node, if it is a live element.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self
            .arena
            .get_mut(id)
            .filter(|node| !node.is_removed())
            .map(|node| node.get_mut())
        {
            Some(NodeData::Element(data)) => Some(data),
            _ => None,
        }
    }

    /// Direct children of a node, in document order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Every element in the document, in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        self.root
            .descendants(&self.arena)
            .filter(|&id| matches!(self.node(id), Some(NodeData::Element(_))))
            .collect()
    }

    /// Elements strictly below `id`, in document order.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        id.descendants(&self.arena)
            .skip(1) // descendants() yields the node itself first
            .filter(|&child| matches!(self.node(child), Some(NodeData::Element(_))))
            .collect()
    }

    /// Elements carrying the named attribute, in document order.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.root
            .descendants(&self.arena)
            .filter(|&id| {
                matches!(self.node(id), Some(NodeData::Element(data)) if data.has_attribute(name))
            })
            .collect()
    }

    /// Concatenated text of `id` and its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in id.descendants(&self.arena) {
            if let Some(NodeData::Text(text)) = self.node(node) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace the children of `id` with a single text node.
    ///
    /// Mirrors assigning `textContent`: markup in `text` stays literal.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.remove_children(id);
        if !text.is_empty() {
            let node = self.arena.new_node(NodeData::Text(text.to_string()));
            id.append(node, &mut self.arena);
        }
    }

    /// Replace the children of `id` with nodes parsed from an HTML fragment.
    ///
    /// Mirrors assigning `innerHTML`: tags in `markup` become elements.
    pub fn set_markup_content(&mut self, id: NodeId, markup: &str) {
        self.remove_children(id);
        parse::append_fragment(self, id, markup);
    }

    fn remove_children(&mut self, id: NodeId) {
        let children: Vec<NodeId> = id.children(&self.arena).collect();
        for child in children {
            child.remove_subtree(&mut self.arena);
        }
    }

    /// Serialize the document back to HTML text.
    pub fn to_html(&self) -> String {
        serialize::to_html(self)
    }
}
