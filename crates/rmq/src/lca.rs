use crate::pm_one::PmTable;
use crate::tree::{NodeId, Tree};

const UNVISITED: usize = usize::MAX;

/// Lowest-common-ancestor queries in O(1) after an O(n) build.
///
/// The build walks the tree once, recording every node on entry and again
/// after each child returns (the Euler tour), together with its depth. The
/// depth sequence steps by exactly ±1, so a [`PmTable`] over it answers
/// range-minimum queries in constant time, and the LCA of two nodes is the
/// shallowest entry between their first visits.
///
/// The engine is self-contained after construction; it does not borrow the
/// tree it was built from.
#[derive(Clone, Debug)]
pub struct Lca {
    euler: Vec<NodeId>,
    level: Vec<i64>,
    first_visit: Vec<usize>,
    pm: PmTable,
}

impl Lca {
    pub fn new<T>(tree: &Tree<T>, root: NodeId) -> Self {
        assert!(
            root.index() < tree.len(),
            "root does not belong to the tree"
        );

        let n = tree.len();
        let mut euler = Vec::with_capacity(2 * n - 1);
        let mut level = Vec::with_capacity(2 * n - 1);
        let mut first_visit = vec![UNVISITED; n];

        // Depth-first walk with an explicit (node, next-child) stack, so
        // degenerate path-shaped trees cannot exhaust the call stack. The
        // depth of the node being visited is always stack.len().
        let mut stack: Vec<(NodeId, usize)> = Vec::with_capacity(n);
        first_visit[root.index()] = 0;
        euler.push(root);
        level.push(0);
        stack.push((root, 0));

        while let Some(&(node, next)) = stack.last() {
            let children = tree.children(node);
            if next < children.len() {
                let top = stack.len() - 1;
                stack[top].1 += 1;
                let child = children[next];
                debug_assert!(first_visit[child.index()] == UNVISITED);
                first_visit[child.index()] = euler.len();
                euler.push(child);
                level.push(stack.len() as i64);
                stack.push((child, 0));
            } else {
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    euler.push(parent);
                    level.push((stack.len() - 1) as i64);
                }
            }
        }

        let pm = PmTable::new(&level);

        Self {
            euler,
            level,
            first_visit,
            pm,
        }
    }

    /// The lowest common ancestor of `u` and `v`, in either argument order.
    ///
    /// Both nodes must belong to the preprocessed tree and be reachable from
    /// its root.
    pub fn query(&self, u: NodeId, v: NodeId) -> NodeId {
        let ui = self.first_visit[u.index()];
        let vi = self.first_visit[v.index()];
        assert!(
            ui != UNVISITED && vi != UNVISITED,
            "node is not reachable from the preprocessed root"
        );

        let (lo, hi) = if ui <= vi { (ui, vi) } else { (vi, ui) };
        let k = self.pm.argmin_assume_valid(&self.level, lo, hi + 1);
        self.euler[k]
    }
}
