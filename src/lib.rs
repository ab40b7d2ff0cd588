//! # rs-htree
//!
//! Tools for working with trees of HTML nodes: predicate search, lazy
//! preorder traversal, filtered enumeration, copy-producing pruning,
//! plain-text extraction and indented re-serialization.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htree::{find_element, indentln, parse, prune, text, Tag};
//!
//! let tree = parse("<table><tr><th>Name</th><td>Ada</td></tr></table>");
//!
//! let table = find_element(tree.root(), |n| n.has_tag(Tag::Table)).expect("table");
//! let headers_only = prune(table, |n| n.has_tag(Tag::Td)).expect("table kept");
//! assert_eq!(text(headers_only.root())?, "Name");
//!
//! let mut out = Vec::new();
//! indentln(&mut out, tree.root(), 0)?;
//! # Ok::<(), rs_htree::Error>(())
//! ```
//!
//! ## Traversal rules
//!
//! All searches run preorder, depth-first, children left to right, and never
//! descend into Text nodes. [`find_all`] does not descend into a node it
//! yields; call [`find_all_children`] on that node to keep going.

mod error;
mod options;

/// Arena node tree and the `NodeRef` handle.
pub mod node;

/// Tag vocabulary and block/void/literal-content catalogs.
pub mod tags;

/// Search, traversal and filtered enumeration.
pub mod find;

/// Copy-producing subtree removal.
pub mod prune;

/// Character reference escaping and decoding.
pub mod entity;

/// Plain-text extraction.
pub mod text;

/// Full-fidelity markup serializer.
pub mod render;

/// Indenting renderer.
pub mod indent;

/// HTML parsing into a `Tree`.
pub mod parse;

/// Character encoding sniffing for byte input.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use find::{
    element_pred, find, find_all, find_all_child_elements, find_all_children, find_all_elements,
    find_element, walk, FindAll, Walk,
};
pub use indent::{indent, indent_with_options, indentln};
pub use node::{Attribute, Doctype, Element, NodeData, NodeId, NodeKind, NodeRef, Tree};
pub use options::Options;
pub use parse::{parse, parse_bytes};
pub use prune::prune;
pub use render::{render, render_to_string};
pub use tags::Tag;
pub use text::{text, write_text};
