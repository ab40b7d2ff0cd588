//! Predicate-driven search and lazy traversal.
//!
//! Every function here walks in preorder, depth-first, children left to
//! right, and never descends into a Text node. Sequences are plain
//! iterators: nothing is visited until the consumer pulls, and dropping the
//! iterator stops the walk.
//!
//! The `*_element*` variants differ from their base functions only by
//! wrapping the predicate with [`element_pred`].

use std::iter::FusedIterator;

use crate::node::{NodeId, NodeRef, Tree};

/// Wrap `pred` so it only ever sees Element nodes.
///
/// The returned predicate is false for every other kind, and `pred` is not
/// called for them.
pub fn element_pred<'a, P>(mut pred: P) -> impl FnMut(NodeRef<'a>) -> bool
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    move |node| node.is_element() && pred(node)
}

/// Find the first node, in a preorder walk of the tree rooted at `node`,
/// satisfying `pred`.
///
/// `pred` is tried on `node` itself first. Returns `None` when nothing
/// matches.
pub fn find<'a, P>(node: NodeRef<'a>, pred: P) -> Option<NodeRef<'a>>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    // find_all only skips subtrees below a match, so its first item is the
    // first preorder match.
    find_all(node, pred).next()
}

/// Like [`find`], but only Element nodes are tested.
pub fn find_element<'a, P>(node: NodeRef<'a>, pred: P) -> Option<NodeRef<'a>>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    find(node, element_pred(pred))
}

/// Iterate over the tree rooted at `node` in preorder.
///
/// `node` itself is always yielded. Below it, Text nodes are neither yielded
/// nor descended into.
#[must_use]
pub fn walk(node: NodeRef<'_>) -> Walk<'_> {
    Walk {
        stack: Stack::new(node),
    }
}

/// Iterate over the nodes of the tree rooted at `node` that satisfy `pred`.
///
/// A matching node is yielded and its subtree is skipped. To keep searching
/// inside a yielded node `n`, call [`find_all_children`]`(n, ...)` while
/// handling it.
pub fn find_all<'a, P>(node: NodeRef<'a>, pred: P) -> FindAll<'a, P>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    FindAll {
        stack: Stack::new(node),
        pred,
    }
}

/// Same as [`find_all`], but starts at the children of `node` rather than
/// `node` itself.
pub fn find_all_children<'a, P>(node: NodeRef<'a>, pred: P) -> FindAll<'a, P>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    let mut stack = Stack::empty(node.tree());
    if !node.is_text() {
        stack.push_children(node, |_| true);
    }
    FindAll { stack, pred }
}

/// Like [`find_all`], but only Element nodes are tested.
pub fn find_all_elements<'a, P>(
    node: NodeRef<'a>,
    pred: P,
) -> FindAll<'a, impl FnMut(NodeRef<'a>) -> bool>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    find_all(node, element_pred(pred))
}

/// Like [`find_all_children`], but only Element nodes are tested.
pub fn find_all_child_elements<'a, P>(
    node: NodeRef<'a>,
    pred: P,
) -> FindAll<'a, impl FnMut(NodeRef<'a>) -> bool>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    find_all_children(node, element_pred(pred))
}

/// Pending nodes of a preorder walk; the top of the stack is visited next.
#[derive(Debug, Clone)]
struct Stack<'a> {
    tree: &'a Tree,
    pending: Vec<NodeId>,
}

impl<'a> Stack<'a> {
    fn new(node: NodeRef<'a>) -> Self {
        Self {
            tree: node.tree(),
            pending: vec![node.id()],
        }
    }

    fn empty(tree: &'a Tree) -> Self {
        Self {
            tree,
            pending: Vec::new(),
        }
    }

    fn pop(&mut self) -> Option<NodeRef<'a>> {
        let id = self.pending.pop()?;
        self.tree.get(id)
    }

    /// Queue the children of `node` accepted by `keep`, so that the first
    /// child comes off the stack first.
    fn push_children(&mut self, node: NodeRef<'a>, keep: impl Fn(NodeRef<'a>) -> bool) {
        let mut child = node.last_child();
        while let Some(c) = child {
            if keep(c) {
                self.pending.push(c.id());
            }
            child = c.prev_sibling();
        }
    }
}

/// Iterator returned by [`walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Stack<'a>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if !node.is_text() {
            self.stack.push_children(node, |c| !c.is_text());
        }
        Some(node)
    }
}

impl FusedIterator for Walk<'_> {}

/// Iterator returned by [`find_all`] and its variants.
#[derive(Clone)]
pub struct FindAll<'a, P> {
    stack: Stack<'a>,
    pred: P,
}

impl<'a, P> Iterator for FindAll<'a, P>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if (self.pred)(node) {
                return Some(node);
            }
            if !node.is_text() {
                self.stack.push_children(node, |_| true);
            }
        }
        None
    }
}

impl<'a, P> FusedIterator for FindAll<'a, P> where P: FnMut(NodeRef<'a>) -> bool {}

impl<P> std::fmt::Debug for FindAll<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindAll")
            .field("pending", &self.stack.pending.len())
            .finish_non_exhaustive()
    }
}
