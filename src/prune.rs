//! Copy-producing subtree removal.

use crate::node::{NodeId, NodeRef, Tree};

/// Copy the tree rooted at `node`, minus every subtree whose root satisfies
/// `pred`.
///
/// The copy is a new `Tree` whose root is a copy of `node`, with no parent.
/// Each retained node keeps its payload; child chains are rebuilt so they
/// only link retained children, in their original order. The source tree is
/// left untouched.
///
/// Returns `None` if `node` itself satisfies `pred`.
///
/// `pred` sees source nodes in preorder and should not depend on
/// side effects of earlier calls.
pub fn prune<'a, P>(node: NodeRef<'a>, mut pred: P) -> Option<Tree>
where
    P: FnMut(NodeRef<'a>) -> bool,
{
    if pred(node) {
        return None;
    }

    let mut out = Tree::with_root(node.data().clone());
    let mut pending = Vec::new();
    push_children(&mut pending, node, out.root().id());

    // Preorder, so each parent's surviving children are attached in order.
    while let Some((source, parent)) = pending.pop() {
        if pred(source) {
            continue;
        }
        let copy = out.create(source.data().clone());
        out.attach(parent, copy);
        push_children(&mut pending, source, copy);
    }

    tracing::debug!(
        source_root = node.id().index(),
        retained = out.len(),
        "pruned subtree copied"
    );
    Some(out)
}

/// Queue the children of `source` under `parent`, first child on top.
fn push_children<'a>(
    pending: &mut Vec<(NodeRef<'a>, NodeId)>,
    source: NodeRef<'a>,
    parent: NodeId,
) {
    let mut child = source.last_child();
    while let Some(c) = child {
        pending.push((c, parent));
        child = c.prev_sibling();
    }
}
