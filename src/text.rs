//! Plain-text extraction.

use std::io::Write;

use crate::entity;
use crate::error::Result;
use crate::node::{NodeData, NodeRef};
use crate::tags::Tag;

/// Write the plain-text content of the tree rooted at `node` to `w`.
///
/// Character references in text are decoded, `<br>` becomes a newline, and
/// `<script>` and `<style>` subtrees are skipped entirely.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) as soon as `w` fails; the walk is
/// abandoned and whatever was already written stays written.
pub fn write_text<W: Write + ?Sized>(w: &mut W, node: NodeRef<'_>) -> Result<()> {
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        match node.data() {
            NodeData::Text(data) => {
                w.write_all(entity::unescape(data).as_bytes())?;
            }
            NodeData::Element(el) => match el.tag {
                Some(Tag::Br) => {
                    w.write_all(b"\n")?;
                    continue;
                }
                Some(Tag::Script | Tag::Style) => continue,
                _ => {}
            },
            _ => {}
        }

        let mut child = node.last_child();
        while let Some(c) = child {
            pending.push(c);
            child = c.prev_sibling();
        }
    }
    Ok(())
}

/// The plain-text content of the tree rooted at `node`, as by [`write_text`].
///
/// # Errors
///
/// Propagates any error from [`write_text`]. The in-memory sink itself
/// does not fail.
pub fn text(node: NodeRef<'_>) -> Result<String> {
    let mut buf = Vec::new();
    write_text(&mut buf, node)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
