/// Handle to a node in a [`Tree`] arena.
///
/// Handles are plain indices: cheap to copy, stable for the lifetime of the
/// arena, and only meaningful for the tree that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    id: T,
    children: Vec<NodeId>,
}

/// Rooted, ordered n-ary tree stored in a flat arena.
///
/// Each node carries an id of arbitrary type and an ordered list of child
/// handles. Nodes are identified by their [`NodeId`], never by id equality.
/// Trees never copy implicitly; cloning one is an explicit O(n) `clone()`.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node with no children.
    pub fn leaf(&mut self, id: T) -> NodeId {
        self.node(id, Vec::new())
    }

    /// Adds an internal node owning `children`, in order.
    pub fn node(&mut self, id: T, children: Vec<NodeId>) -> NodeId {
        debug_assert!(children.iter().all(|c| c.0 < self.nodes.len()));
        let node = NodeId(self.nodes.len());
        self.nodes.push(Node { id, children });
        node
    }

    pub fn id(&self, node: NodeId) -> &T {
        &self.nodes[node.0].id
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(child.0 < self.nodes.len());
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn replace_last_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(child.0 < self.nodes.len());
        let children = &mut self.nodes[parent.0].children;
        debug_assert!(!children.is_empty());
        let last = children.len() - 1;
        children[last] = child;
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;

    #[test]
    fn builds_bottom_up() {
        let mut tree = Tree::new();
        let c = tree.leaf('c');
        let d = tree.leaf('d');
        let b = tree.node('b', vec![c, d]);
        let e = tree.leaf('e');
        let a = tree.node('a', vec![b, e]);

        assert_eq!(tree.len(), 5);
        assert_eq!(*tree.id(a), 'a');
        assert_eq!(tree.children(a), &[b, e]);
        assert_eq!(tree.children(b), &[c, d]);
        assert!(tree.children(e).is_empty());
    }

    #[test]
    fn clone_is_deep() {
        let mut tree = Tree::new();
        let leaf = tree.leaf(1_u32);
        let root = tree.node(0_u32, vec![leaf]);

        let copy = tree.clone();
        let extra = tree.leaf(2_u32);
        tree.push_child(root, extra);

        assert_eq!(copy.len(), 2);
        assert_eq!(tree.len(), 3);
        assert_eq!(copy.children(root), &[leaf]);
        assert_eq!(tree.children(root), &[leaf, extra]);
    }
}
