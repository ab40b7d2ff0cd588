//! HTML parsing adapter.
//!
//! Parsing is delegated to `dom_query` (html5ever underneath); this module
//! only copies the resulting DOM into a [`Tree`]. Element names arrive
//! lowercased and text arrives with character references already decoded.

use dom_query::{Document, NodeData as DomData, NodeRef as DomNode};

use crate::encoding;
use crate::node::{Attribute, Doctype, Element, NodeData, NodeId, Tree};

/// Parse an HTML document.
///
/// Never fails: like browsers, the parser recovers from any malformed
/// input, adding the implied `html`, `head` and `body` elements.
#[must_use]
pub fn parse(html: &str) -> Tree {
    let doc = Document::from(html);
    let tree = Tree::from(&doc);
    tracing::debug!(bytes = html.len(), nodes = tree.len(), "parsed HTML document");
    tree
}

/// Parse an HTML document from bytes, detecting the character encoding.
///
/// See [`encoding`](crate::encoding) for how the encoding is chosen.
#[must_use]
pub fn parse_bytes(html: &[u8]) -> Tree {
    let (text, used) = encoding::decode_html(html);
    tracing::debug!(encoding = used.name(), "decoded HTML bytes");
    parse(&text)
}

impl From<&Document> for Tree {
    fn from(doc: &Document) -> Self {
        let mut tree = Tree::new();
        let mut pending: Vec<(DomNode<'_>, NodeId)> = Vec::new();
        push_children(&mut pending, &doc.root(), tree.root().id());

        while let Some((node, parent)) = pending.pop() {
            let id = tree.create(convert(&node));
            tree.attach(parent, id);
            push_children(&mut pending, &node, id);
        }
        tree
    }
}

/// Queue the children of `node` under `parent`, first child on top.
fn push_children<'a>(
    pending: &mut Vec<(DomNode<'a>, NodeId)>,
    node: &DomNode<'a>,
    parent: NodeId,
) {
    pending.extend(node.children().into_iter().rev().map(|child| (child, parent)));
}

fn convert(node: &DomNode<'_>) -> NodeData {
    node.query(|n| match &n.data {
        DomData::Document | DomData::Fragment => NodeData::Document,
        DomData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype(Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }),
        DomData::Text { contents } => NodeData::Text(contents.to_string()),
        DomData::Comment { contents } => NodeData::Comment(contents.to_string()),
        DomData::Element(el) => NodeData::Element(Element::new(
            el.name.local.to_string(),
            el.attrs
                .iter()
                .map(|a| Attribute::new(a.name.local.to_string(), a.value.to_string()))
                .collect(),
        )),
        // HTML has no processing instructions; the parser only produces
        // them for foreign content, where they read as comments.
        DomData::ProcessingInstruction { contents, .. } => {
            NodeData::Comment(contents.to_string())
        }
        #[allow(unreachable_patterns)]
        _ => NodeData::Error,
    })
    .unwrap_or(NodeData::Error)
}
