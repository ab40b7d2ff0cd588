//! Full-fidelity markup serializer.
//!
//! Writes a node and its subtree back out as HTML without adding any
//! whitespace. The indenting renderer falls back to this for doctypes,
//! comments and the contents of literal-content elements.

use std::io::Write;

use crate::entity;
use crate::error::{Error, Result};
use crate::node::{Doctype, NodeData, NodeRef};
use crate::tags::{self, Tag};

/// Pending work for the serializer: a node to open, or an end tag to write.
enum Frame<'a> {
    /// Node plus whether its parent is a raw-text element.
    Enter(NodeRef<'a>, bool),
    Close(&'a str),
}

/// Serialize the tree rooted at `node` to `w`.
///
/// Text is escaped, except inside raw-text elements such as `<script>`.
/// Void elements are written as `<br/>`; `<plaintext>` gets no end tag.
///
/// # Errors
///
/// - [`Error::ErrorNode`] for an `Error`-kind node anywhere in the subtree.
/// - [`Error::VoidElementChildren`] for a void element with children.
/// - [`Error::Io`] when `w` fails.
pub fn render<W: Write + ?Sized>(w: &mut W, node: NodeRef<'_>) -> Result<()> {
    let mut stack = vec![Frame::Enter(node, false)];
    while let Some(frame) = stack.pop() {
        let (node, raw) = match frame {
            Frame::Enter(node, raw) => (node, raw),
            Frame::Close(name) => {
                write!(w, "</{name}>")?;
                continue;
            }
        };

        match node.data() {
            NodeData::Error => return Err(Error::ErrorNode),
            NodeData::Document => push_children(&mut stack, node, false),
            NodeData::Text(data) if raw => w.write_all(data.as_bytes())?,
            NodeData::Text(data) => w.write_all(entity::escape(data).as_bytes())?,
            NodeData::Comment(data) => write!(w, "<!--{data}-->")?,
            NodeData::Doctype(doctype) => render_doctype(w, doctype)?,
            NodeData::Raw(data) => w.write_all(data.as_bytes())?,
            NodeData::Element(el) => {
                write!(w, "<{}", el.name)?;
                for attr in &el.attrs {
                    write!(w, " {}=\"{}\"", attr.key, entity::escape(&attr.value))?;
                }

                if tags::is_void(el.tag) {
                    if node.first_child().is_some() {
                        return Err(Error::VoidElementChildren(el.name.clone()));
                    }
                    w.write_all(b"/>")?;
                    continue;
                }
                w.write_all(b">")?;

                // A newline right after these start tags is dropped by parsers,
                // so a leading newline in the content has to be doubled.
                if matches!(el.tag, Some(Tag::Pre | Tag::Listing | Tag::Textarea)) {
                    if let Some(NodeData::Text(first)) = node.first_child().map(|c| c.data()) {
                        if first.starts_with('\n') {
                            w.write_all(b"\n")?;
                        }
                    }
                }

                if el.tag != Some(Tag::Plaintext) {
                    stack.push(Frame::Close(&el.name));
                }
                push_children(&mut stack, node, tags::is_literal_content(el.tag));
            }
        }
    }
    Ok(())
}

fn push_children<'a>(stack: &mut Vec<Frame<'a>>, node: NodeRef<'a>, raw: bool) {
    let mut child = node.last_child();
    while let Some(c) = child {
        stack.push(Frame::Enter(c, raw));
        child = c.prev_sibling();
    }
}

/// Serialize the tree rooted at `node` into a `String`.
///
/// # Errors
///
/// Same as [`render`], minus sink failures.
pub fn render_to_string(node: NodeRef<'_>) -> Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, node)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn render_doctype<W: Write + ?Sized>(w: &mut W, doctype: &Doctype) -> Result<()> {
    write!(w, "<!DOCTYPE {}", doctype.name)?;
    if !doctype.public_id.is_empty() {
        write!(w, " PUBLIC {}", quoted(&doctype.public_id))?;
        if !doctype.system_id.is_empty() {
            write!(w, " {}", quoted(&doctype.system_id))?;
        }
    } else if !doctype.system_id.is_empty() {
        write!(w, " SYSTEM {}", quoted(&doctype.system_id))?;
    }
    w.write_all(b">")?;
    Ok(())
}

fn quoted(id: &str) -> String {
    if id.contains('"') {
        format!("'{id}'")
    } else {
        format!("\"{id}\"")
    }
}
