//! Indenting renderer.
//!
//! Writes a tree back out as HTML with nesting shown by indentation.
//! Block elements (`div`, `p`, `li`, ...) get their tags on lines of their
//! own and their content indented one level deeper. Inline elements stay in
//! the flow of the surrounding text. Void elements get no end tag, and the
//! children of literal-content elements (`script`, `style`, ...) are written
//! through untouched.
//!
//! One beginning-of-line flag is shared by the whole render: it is true at
//! the start and after every newline, and an indentation prefix is only
//! written while it is set.

use std::io::{self, BufWriter, Write};

use crate::entity;
use crate::error::{Error, Result};
use crate::node::{Element, NodeData, NodeRef};
use crate::options::Options;
use crate::render;
use crate::tags;

/// Write the tree rooted at `node` to `w`, indented to show nesting.
///
/// `level` is the nesting level of `node` itself.
///
/// # Errors
///
/// - [`Error::ErrorNode`] if the tree contains an `Error`-kind node.
/// - [`Error::VoidElementChildren`] if a void element inside a
///   literal-content element has children.
/// - [`Error::Io`] when `w` fails.
///
/// Output produced before the failure has already been written.
pub fn indent<W: Write>(w: W, node: NodeRef<'_>, level: usize) -> Result<()> {
    indent_with_options(
        w,
        node,
        &Options {
            level,
            ..Options::default()
        },
    )
}

/// Like [`indent`], and the output always ends with a newline.
///
/// # Errors
///
/// Same as [`indent`].
pub fn indentln<W: Write>(w: W, node: NodeRef<'_>, level: usize) -> Result<()> {
    indent_with_options(
        w,
        node,
        &Options {
            level,
            trailing_newline: true,
            ..Options::default()
        },
    )
}

/// Indented rendering with explicit [`Options`].
///
/// # Errors
///
/// Same as [`indent`].
pub fn indent_with_options<W: Write>(w: W, node: NodeRef<'_>, options: &Options) -> Result<()> {
    let mut out = Indenter {
        out: BufWriter::new(w),
        bol: true,
        options,
    };

    out.write_tree(node, options.level)?;
    if options.trailing_newline {
        out.ensure_newline()?;
    }
    out.flush()?;
    Ok(())
}

/// Buffered sink that remembers whether the last byte written was a newline.
struct Indenter<'o, W: Write> {
    out: BufWriter<W>,
    bol: bool,
    options: &'o Options,
}

impl<W: Write> Write for Indenter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.out.write(buf)?;
        if let Some(&last) = buf[..n].last() {
            self.bol = last == b'\n';
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Indenter<'_, W> {
    fn ensure_newline(&mut self) -> Result<()> {
        if !self.bol {
            self.write_all(b"\n")?;
        }
        Ok(())
    }

    fn write_prefix(&mut self, level: usize) -> Result<()> {
        let prefix = self.options.prefix(level);
        self.write_all(prefix.as_bytes())?;
        Ok(())
    }

    fn prefix_at_bol(&mut self, level: usize) -> Result<()> {
        if self.bol {
            self.write_prefix(level)?;
        }
        Ok(())
    }

    fn write_tree(&mut self, root: NodeRef<'_>, level: usize) -> Result<()> {
        let mut stack = vec![Frame::Enter(root, level)];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(node, level) => self.enter(&mut stack, node, level)?,
                Frame::Close { name, level, block } => self.close(name, level, block)?,
            }
        }
        Ok(())
    }

    fn enter<'a>(
        &mut self,
        stack: &mut Vec<Frame<'a>>,
        node: NodeRef<'a>,
        level: usize,
    ) -> Result<()> {
        match node.data() {
            NodeData::Error => return Err(Error::ErrorNode),
            NodeData::Text(_) | NodeData::Comment(_) => {
                self.prefix_at_bol(level)?;
                render::render(self, node)?;
            }
            NodeData::Doctype(_) => {
                render::render(self, node)?;
                self.ensure_newline()?;
            }
            NodeData::Document => push_children(stack, node, level),
            NodeData::Element(el) => self.element(stack, node, el, level)?,
            NodeData::Raw(data) => self.write_all(data.as_bytes())?,
        }
        Ok(())
    }

    fn element<'a>(
        &mut self,
        stack: &mut Vec<Frame<'a>>,
        node: NodeRef<'a>,
        el: &'a Element,
        level: usize,
    ) -> Result<()> {
        let block = tags::is_block(el.tag);
        if block {
            self.ensure_newline()?;
        }
        self.prefix_at_bol(level)?;

        write!(self, "<{}", el.name)?;
        for attr in &el.attrs {
            write!(self, " {}", attr.key)?;
            if !attr.value.is_empty() {
                write!(self, "=\"{}\"", entity::escape(&attr.value))?;
            }
        }
        self.write_all(b">")?;
        if block {
            self.write_all(b"\n")?;
        }

        if tags::is_void(el.tag) {
            return Ok(());
        }

        if tags::is_literal_content(el.tag) {
            for child in node.children() {
                match child.data() {
                    NodeData::Text(data) => self.write_all(data.as_bytes())?,
                    _ => render::render(self, child)?,
                }
            }
            return self.close(&el.name, level, block);
        }

        stack.push(Frame::Close {
            name: &el.name,
            level,
            block,
        });
        push_children(stack, node, level + 1);
        Ok(())
    }

    fn close(&mut self, name: &str, level: usize, block: bool) -> Result<()> {
        if block {
            self.ensure_newline()?;
            self.write_prefix(level)?;
        }
        // Also aligns end tags of inline elements that ended up at column 0.
        self.prefix_at_bol(level)?;
        write!(self, "</{name}>")?;
        Ok(())
    }
}

/// Pending work for the indenter: a node to open at a level, or an end tag.
enum Frame<'a> {
    Enter(NodeRef<'a>, usize),
    Close {
        name: &'a str,
        level: usize,
        block: bool,
    },
}

fn push_children<'a>(stack: &mut Vec<Frame<'a>>, node: NodeRef<'a>, level: usize) {
    let mut child = node.last_child();
    while let Some(c) = child {
        stack.push(Frame::Enter(c, level));
        child = c.prev_sibling();
    }
}
