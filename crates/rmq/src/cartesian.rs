use std::ops::Range;

use crate::StaticRmq;
use crate::lca::Lca;
use crate::tree::{NodeId, Tree};
use crate::util::check_query_range;

/// General ⟨O(n), O(1)⟩ RMQ: build the Cartesian tree of the input, then
/// answer range minima as lowest-common-ancestor queries on it.
///
/// The Cartesian tree's inorder traversal is the input left to right and
/// every subtree's minimum sits at its root, so the minimum of `[u, v)` is
/// the LCA of the nodes for positions `u` and `v - 1`.
#[derive(Clone, Debug)]
pub struct CartesianRmq<'a> {
    values: &'a [i64],
    tree: Tree<usize>,
    nodes: Vec<NodeId>,
    lca: Lca,
}

impl CartesianRmq<'_> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds the Cartesian tree with the linear right-spine algorithm.
    ///
    /// The spine stack always holds the path from the root to the rightmost
    /// node, shallowest first. Pops are strict, so a run of equal values
    /// descends to the right and range queries resolve ties leftmost.
    fn cartesian_tree(values: &[i64]) -> (Tree<usize>, Vec<NodeId>, NodeId) {
        let mut tree = Tree::new();
        let mut nodes = Vec::with_capacity(values.len());
        let mut spine: Vec<NodeId> = Vec::new();

        for (pos, &x) in values.iter().enumerate() {
            let mut last_popped = None;
            while let Some(&top) = spine.last()
                && values[*tree.id(top)] > x
            {
                last_popped = spine.pop();
            }

            let node = tree.leaf(pos);
            nodes.push(node);
            if let Some(child) = last_popped {
                // The popped chain re-roots under the new node as its left
                // subtree.
                tree.push_child(node, child);
            }
            if let Some(&parent) = spine.last() {
                if last_popped.is_some() {
                    // `parent`'s rightmost child was the top of the popped
                    // chain; the new node takes that slot.
                    tree.replace_last_child(parent, node);
                } else {
                    tree.push_child(parent, node);
                }
            }
            spine.push(node);
        }

        (tree, nodes, spine[0])
    }
}

impl<'a> StaticRmq<'a> for CartesianRmq<'a> {
    fn new(values: &'a [i64]) -> Self {
        assert!(!values.is_empty(), "cannot build an RMQ over an empty input");

        let (tree, nodes, root) = Self::cartesian_tree(values);
        let lca = Lca::new(&tree, root);

        Self {
            values,
            tree,
            nodes,
            lca,
        }
    }

    fn argmin(&self, range: Range<usize>) -> usize {
        check_query_range(self.values.len(), &range);
        let u = self.nodes[range.start];
        let v = self.nodes[range.end - 1];
        *self.tree.id(self.lca.query(u, v))
    }
}
