//! Serialization of a [`Document`] back to HTML text.

use super::{Document, NodeData};
use indextree::NodeId;

/// Elements with no content model: serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub(super) fn to_html(document: &Document) -> String {
    let mut out = String::new();
    for child in document.children(document.root()) {
        write_node(document, child, &mut out, false);
    }
    out
}

fn write_node(document: &Document, id: NodeId, out: &mut String, raw_text: bool) {
    match document.node(id) {
        Some(NodeData::Doctype { name }) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }

        Some(NodeData::Text(text)) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&escape_text(text));
            }
        }

        Some(NodeData::Comment(text)) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }

        Some(NodeData::Element(element)) => {
            let tag = element.tag_name();
            out.push('<');
            out.push_str(tag);
            for (name, value) in element.attributes() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            let children_raw = RAW_TEXT_ELEMENTS.contains(&tag);
            for child in document.children(id) {
                write_node(document, child, out, children_raw);
            }

            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }

        // The document node is only ever the root; removed ids write nothing.
        Some(NodeData::Document) | None => {}
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
