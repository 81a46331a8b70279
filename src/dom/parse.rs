//! HTML parsing front end.
//!
//! html5ever builds an `RcDom`, which is then walked once into the
//! arena-backed [`Document`]. Going through rcdom keeps this module a plain
//! tree conversion instead of a `TreeSink` implementation.

use super::{Document, ElementData, NodeData};
use anyhow::{Context, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{
    local_name, namespace_url, ns, parse_document, parse_fragment, ParseOpts, QualName,
};
use indextree::NodeId;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use tendril::StrTendril;

/// Parse a full HTML document into a fresh arena.
pub(super) fn document_from_str(html: &str) -> Result<Document> {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .context("Failed to read HTML input")?;

    let mut document = Document::empty();
    let root = document.root();
    convert_children(&dom.document, &mut document, root);
    Ok(document)
}

/// Parse `markup` as a fragment and append the resulting nodes under `parent`.
pub(super) fn append_fragment(document: &mut Document, parent: NodeId, markup: &str) {
    let dom: RcDom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("body")),
        Vec::new(),
    )
    .one(StrTendril::from(markup));

    // The fragment parser wraps its output in a synthetic <html> element.
    let top_level = dom.document.children.borrow();
    if let Some(container) = top_level.first() {
        convert_children(container, document, parent);
    }
}

fn convert_children(rc_node: &Handle, document: &mut Document, parent: NodeId) {
    for child in rc_node.children.borrow().iter() {
        convert_node(child, document, parent);
    }
}

fn convert_node(rc_node: &Handle, document: &mut Document, parent: NodeId) {
    match &rc_node.data {
        RcNodeData::Document => convert_children(rc_node, document, parent),

        RcNodeData::Doctype { name, .. } => {
            let node = document.arena.new_node(NodeData::Doctype {
                name: name.to_string(),
            });
            parent.append(node, &mut document.arena);
        }

        RcNodeData::Text { contents } => {
            // Whitespace-only runs are kept: they are the page's layout.
            let text = contents.borrow().to_string();
            if !text.is_empty() {
                let node = document.arena.new_node(NodeData::Text(text));
                parent.append(node, &mut document.arena);
            }
        }

        RcNodeData::Comment { contents } => {
            let node = document
                .arena
                .new_node(NodeData::Comment(contents.to_string()));
            parent.append(node, &mut document.arena);
        }

        RcNodeData::Element { name, attrs, .. } => {
            let mut data = ElementData::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                data.set_attribute(&attr.name.local, &attr.value);
            }
            let node = document.arena.new_node(NodeData::Element(data));
            parent.append(node, &mut document.arena);
            convert_children(rc_node, document, node);
        }

        RcNodeData::ProcessingInstruction { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{Document, NodeData};

    fn tag_names(document: &Document) -> Vec<String> {
        document
            .elements()
            .into_iter()
            .filter_map(|id| document.element(id).map(|e| e.tag_name().to_string()))
            .collect()
    }

    #[test]
    fn test_parse_builds_implied_structure() {
        let document = Document::parse("<p>hello</p>").expect("Should parse");

        let tags = tag_names(&document);
        assert_eq!(tags, vec!["html", "head", "body", "p"]);
    }

    #[test]
    fn test_doctype_preserved() {
        let document = Document::parse("<!DOCTYPE html><html></html>").expect("Should parse");

        let first = document.children(document.root())[0];
        match document.node(first) {
            Some(NodeData::Doctype { name }) => assert_eq!(name, "html"),
            other => panic!("Expected doctype, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_preserved() {
        let document =
            Document::parse("<body><!-- language data below --><p>x</p></body>").expect("Should parse");

        assert!(document.to_html().contains("<!-- language data below -->"));
    }

    #[test]
    fn test_whitespace_between_elements_preserved() {
        let document =
            Document::parse("<body><span>a</span>\n    <span>b</span></body>").expect("Should parse");

        let body = document
            .elements()
            .into_iter()
            .find(|&id| document.element(id).map(|e| e.tag_name()) == Some("body"))
            .expect("Should have body");
        assert_eq!(document.text_content(body), "a\n    b");
    }

    #[test]
    fn test_attribute_names_lowercased() {
        let document =
            Document::parse(r#"<body><p DATA-EN="Hello">Hello</p></body>"#).expect("Should parse");

        assert_eq!(document.elements_with_attribute("data-en").len(), 1);
        assert!(document.elements_with_attribute("DATA-EN").is_empty());
    }

    #[test]
    fn test_fragment_drops_synthetic_wrapper() {
        let mut document = Document::parse(r#"<body><div id="t">x</div></body>"#).expect("Should parse");
        let target = document.elements_with_attribute("id")[0];

        document.set_markup_content(target, "plain <em>styled</em>");

        let inner = document.descendant_elements(target);
        assert_eq!(inner.len(), 1);
        assert_eq!(document.element(inner[0]).unwrap().tag_name(), "em");
        // no <html>/<body> wrapper leaked into the tree
        assert!(!document.to_html().contains("<html><em>"));
    }

    #[test]
    fn test_malformed_input_recovers() {
        let document = Document::parse("<p>unclosed <b>bold").expect("Should parse");

        let tags = tag_names(&document);
        assert!(tags.contains(&"p".to_string()));
        assert!(tags.contains(&"b".to_string()));
    }

    #[test]
    fn test_unicode_content_preserved() {
        let document = Document::parse(
            r#"<body><h1 data-ru="Украшения" data-he="תכשיטים">Jewelry</h1></body>"#,
        )
        .expect("Should parse");

        let heading = document.elements_with_attribute("data-ru")[0];
        let element = document.element(heading).unwrap();
        assert_eq!(element.attribute("data-ru"), Some("Украшения"));
        assert_eq!(element.attribute("data-he"), Some("תכשיטים"));
    }
}
