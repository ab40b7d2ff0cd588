//! Node arena.
//!
//! A `Tree` owns every node in a flat `Vec`; structural links are indices.
//! The parent owns its child chain (`first_child` .. `last_child`), while
//! `parent`, `prev_sibling` and `next_sibling` are plain lookups with no
//! ownership attached, so the tree has no reference cycles.
//!
//! Nodes are read through `NodeRef`, a copyable `(&Tree, NodeId)` handle.
//! Two handles are equal only when they name the same node of the same tree.

use std::fmt;
use std::ptr;

use crate::error::{Error, Result};
use crate::tags::Tag;

/// Index of a node inside its `Tree`.
///
/// An id carries no record of the tree that issued it. Handing it to a
/// different tree, such as a pruned copy, names whatever node sits at the
/// same index there, or nothing if the index is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Discriminant of `NodeData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`NodeData::Document`]
    Document,
    /// [`NodeData::Element`]
    Element,
    /// [`NodeData::Text`]
    Text,
    /// [`NodeData::Comment`]
    Comment,
    /// [`NodeData::Doctype`]
    Doctype,
    /// [`NodeData::Raw`]
    Raw,
    /// [`NodeData::Error`]
    Error,
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with tag and attributes.
    Element(Element),
    /// Text run, entities already decoded by the parser.
    Text(String),
    /// Comment body, without `<!--` and `-->`.
    Comment(String),
    /// `<!DOCTYPE ...>` declaration.
    Doctype(Doctype),
    /// Markup that is written out verbatim.
    Raw(String),
    /// Marker for something the producer could not represent.
    Error,
}

impl NodeData {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Document => NodeKind::Document,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
            NodeData::Doctype(_) => NodeKind::Doctype,
            NodeData::Raw(_) => NodeKind::Raw,
            NodeData::Error => NodeKind::Error,
        }
    }

    /// Shorthand for an element with the given name and attributes.
    #[must_use]
    pub fn element(name: &str, attrs: &[(&str, &str)]) -> Self {
        NodeData::Element(Element::new(
            name,
            attrs.iter().map(|&(key, value)| Attribute::new(key, value)).collect(),
        ))
    }

    /// Shorthand for a text node.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        NodeData::Text(data.into())
    }
}

/// Element payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Known tag, `None` for names outside the vocabulary.
    pub tag: Option<Tag>,
    /// Tag name as it appears in markup.
    pub name: String,
    /// Attributes in source order. Keys may repeat.
    pub attrs: Vec<Attribute>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>, attrs: Vec<Attribute>) -> Self {
        let name = name.into();
        Self {
            tag: Tag::from_name(&name),
            name,
            attrs,
        }
    }

    /// Value of the first attribute named `key`.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// A `key="value"` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, lowercased by the parser.
    pub key: String,
    /// Decoded value; empty for bare attributes like `checked`.
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Doctype payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doctype {
    /// Root element name, usually `html`.
    pub name: String,
    /// `PUBLIC` identifier, empty when absent.
    pub public_id: String,
    /// `SYSTEM` identifier, empty when absent.
    pub system_id: String,
}

/// A node with its structural links.
#[derive(Debug, Clone)]
pub struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-allocated node tree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Create a tree holding only a `Document` root.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(NodeData::Document)
    }

    /// Create a tree whose root carries `data`.
    #[must_use]
    pub fn with_root(data: NodeData) -> Self {
        Self {
            nodes: vec![Node::new(data)],
            root: NodeId(0),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root,
        }
    }

    /// Handle for `id`, or `None` if it is out of range.
    ///
    /// Only the range is checked; see [`NodeId`] about ids from other trees.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes in the arena, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Append a detached node as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownNode`] if either id is out of range.
    /// - [`Error::AlreadyAttached`] if `child` has a parent or is the root.
    /// - [`Error::Cycle`] if `child` is `parent` or one of its ancestors.
    ///
    /// The tree is unchanged on error.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        for id in [parent, child] {
            if id.0 >= self.nodes.len() {
                return Err(Error::UnknownNode(id));
            }
        }
        if child == self.root || self.nodes[child.0].parent.is_some() {
            return Err(Error::AlreadyAttached(child));
        }

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(Error::Cycle(child));
            }
            ancestor = self.nodes[id.0].parent;
        }

        self.attach(parent, child);
        Ok(())
    }

    /// Create a node and append it to `parent` in one step.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] if `parent` is out of range; nothing is
    /// allocated in that case.
    pub fn append(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId> {
        if parent.0 >= self.nodes.len() {
            return Err(Error::UnknownNode(parent));
        }
        let id = self.create(data);
        self.attach(parent, id);
        Ok(id)
    }

    /// Link a fresh node as the last child of `parent`.
    ///
    /// Both ids must be in range and `child` must be detached with no path
    /// back to `parent`; builders inside the crate only call this with nodes
    /// they just created.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        let prev = self.nodes[parent.0].last_child;

        let node = &mut self.nodes[child.0];
        node.parent = Some(parent);
        node.prev_sibling = prev;
        node.next_sibling = None;

        match prev {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn link(&self, id: Option<NodeId>) -> Option<NodeRef<'_>> {
        id.map(|id| NodeRef { tree: self, id })
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed handle to one node of a `Tree`.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &'a NodeData {
        &self.tree.node(self.id).data
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.data().kind()
    }

    #[inline]
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self.data(), NodeData::Element(_))
    }

    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.data(), NodeData::Text(_))
    }

    /// Element payload, if this is an element.
    #[inline]
    #[must_use]
    pub fn element(&self) -> Option<&'a Element> {
        match self.data() {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Known tag of an element; `None` for non-elements and unknown names.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<Tag> {
        self.element().and_then(|el| el.tag)
    }

    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tag() == Some(tag)
    }

    /// Value of the first attribute named `key`. `None` for non-elements.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.element().and_then(|el| el.attr(key))
    }

    /// Whether the `class` attribute contains `probe` as a whitespace-separated name.
    #[must_use]
    pub fn class_contains(&self, probe: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == probe))
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.tree.link(self.tree.node(self.id).parent)
    }

    #[must_use]
    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.tree.link(self.tree.node(self.id).first_child)
    }

    #[must_use]
    pub fn last_child(&self) -> Option<NodeRef<'a>> {
        self.tree.link(self.tree.node(self.id).last_child)
    }

    #[must_use]
    pub fn prev_sibling(&self) -> Option<NodeRef<'a>> {
        self.tree.link(self.tree.node(self.id).prev_sibling)
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.tree.link(self.tree.node(self.id).next_sibling)
    }

    /// Direct children, first to last.
    #[must_use]
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.first_child(),
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("NodeRef");
        s.field("id", &self.id.0).field("kind", &self.kind());
        if let Some(el) = self.element() {
            s.field("name", &el.name);
        }
        s.finish()
    }
}

/// Iterator over a node's children.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }
}

impl std::iter::FusedIterator for Children<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Tree, NodeId, [NodeId; 3]) {
        let mut tree = Tree::new();
        let root = tree.root().id();
        let ul = tree
            .append(root, NodeData::element("ul", &[("class", "menu main")]))
            .expect("append");
        let a = tree.append(ul, NodeData::element("li", &[])).expect("append");
        let b = tree.append(ul, NodeData::text("between")).expect("append");
        let c = tree.append(ul, NodeData::element("li", &[])).expect("append");
        (tree, ul, [a, b, c])
    }

    #[test]
    fn child_chain_is_doubly_linked() {
        let (tree, ul, [a, b, c]) = sample();
        let ul = tree.get(ul).expect("ul");

        assert_eq!(ul.first_child().map(|n| n.id()), Some(a));
        assert_eq!(ul.last_child().map(|n| n.id()), Some(c));
        assert!(ul.first_child().expect("first").prev_sibling().is_none());
        assert!(ul.last_child().expect("last").next_sibling().is_none());

        let ids: Vec<_> = ul.children().map(|n| n.id()).collect();
        assert_eq!(ids, vec![a, b, c]);

        let mid = tree.get(b).expect("b");
        assert_eq!(mid.prev_sibling().map(|n| n.id()), Some(a));
        assert_eq!(mid.next_sibling().map(|n| n.id()), Some(c));
        assert_eq!(mid.parent(), Some(ul));
    }

    #[test]
    fn append_child_links_a_detached_node() {
        let (mut tree, ul, [_, _, c]) = sample();
        let li = tree.create(NodeData::element("li", &[]));
        tree.append_child(ul, li).expect("append");

        let li = tree.get(li).expect("li");
        assert_eq!(li.parent().map(|n| n.id()), Some(ul));
        assert_eq!(li.prev_sibling().map(|n| n.id()), Some(c));
        assert_eq!(tree.get(ul).and_then(|n| n.last_child()), Some(li));
    }

    #[test]
    fn append_child_rejects_self() {
        let mut tree = Tree::new();
        let div = tree.create(NodeData::element("div", &[]));

        let err = tree.append_child(div, div).expect_err("self append");
        assert!(matches!(err, Error::Cycle(id) if id == div));
        assert!(tree.get(div).expect("div").first_child().is_none());
    }

    #[test]
    fn append_child_rejects_an_ancestor_of_the_parent() {
        let mut tree = Tree::new();
        let outer = tree.create(NodeData::element("div", &[]));
        let inner = tree.append(outer, NodeData::element("span", &[])).expect("append");
        let leaf = tree.append(inner, NodeData::element("b", &[])).expect("append");

        let err = tree.append_child(leaf, outer).expect_err("cycle");
        assert!(matches!(err, Error::Cycle(id) if id == outer));
        assert!(tree.get(leaf).expect("leaf").first_child().is_none());
        assert!(tree.get(outer).expect("outer").parent().is_none());
    }

    #[test]
    fn append_child_rejects_attached_nodes_and_the_root() {
        let (mut tree, ul, [a, _, _]) = sample();
        let root = tree.root().id();

        assert!(matches!(
            tree.append_child(root, a),
            Err(Error::AlreadyAttached(id)) if id == a
        ));
        assert!(matches!(
            tree.append_child(ul, root),
            Err(Error::AlreadyAttached(id)) if id == root
        ));
        let ids: Vec<_> = tree.get(ul).expect("ul").children().map(|n| n.id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn out_of_range_ids_are_errors() {
        let (mut tree, ul, _) = sample();
        let bogus = NodeId(tree.len() + 10);
        let len = tree.len();

        assert!(matches!(tree.append_child(bogus, ul), Err(Error::UnknownNode(id)) if id == bogus));
        assert!(matches!(tree.append_child(ul, bogus), Err(Error::UnknownNode(id)) if id == bogus));
        assert!(matches!(
            tree.append(bogus, NodeData::text("x")),
            Err(Error::UnknownNode(id)) if id == bogus
        ));
        assert_eq!(tree.len(), len);
        assert!(tree.get(bogus).is_none());
    }

    #[test]
    fn ids_from_another_tree_only_check_range() {
        let (tree, ul, _) = sample();
        let small = Tree::new();
        assert!(small.get(ul).is_none());
        // Index 0 exists in both trees but names different nodes.
        let root_id = small.root().id();
        assert_eq!(tree.get(root_id).map(|n| n.kind()), Some(NodeKind::Document));
        assert_ne!(tree.get(root_id), small.get(root_id));
    }

    #[test]
    fn identity_equality() {
        let (tree, ul, _) = sample();
        let copy = tree.clone();
        assert_eq!(tree.get(ul), tree.get(ul));
        assert_ne!(tree.get(ul), copy.get(ul));
    }

    #[test]
    fn attributes_first_match_wins() {
        let mut tree = Tree::new();
        let root = tree.root().id();
        let el = tree
            .append(
                root,
                NodeData::element("div", &[("id", "first"), ("id", "second")]),
            )
            .expect("append");
        let el = tree.get(el).expect("el");
        assert_eq!(el.attr("id"), Some("first"));
        assert_eq!(el.attr("missing"), None);
        assert_eq!(el.tag(), Some(Tag::Div));
    }

    #[test]
    fn class_contains_splits_on_whitespace() {
        let (tree, ul, [a, b, _]) = sample();
        let ul = tree.get(ul).expect("ul");
        assert!(ul.class_contains("menu"));
        assert!(ul.class_contains("main"));
        assert!(!ul.class_contains("men"));
        assert!(!tree.get(a).expect("li").class_contains("menu"));
        assert!(!tree.get(b).expect("text").class_contains("menu"));
    }

    #[test]
    fn unknown_tag_keeps_name() {
        let el = Element::new("my-widget", Vec::new());
        assert_eq!(el.tag, None);
        assert_eq!(el.name, "my-widget");
    }

    #[test]
    fn kinds() {
        assert_eq!(NodeData::Document.kind(), NodeKind::Document);
        assert_eq!(NodeData::text("x").kind(), NodeKind::Text);
        assert_eq!(NodeData::Raw(String::new()).kind(), NodeKind::Raw);
        assert_eq!(NodeData::Error.kind(), NodeKind::Error);
    }

    #[test]
    fn tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Tree>();
        assert_send_sync::<NodeRef<'static>>();
    }
}
