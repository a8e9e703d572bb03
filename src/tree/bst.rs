//! Unbalanced binary search tree stored in an arena.
//!
//! Nodes live in a `Vec` and refer to their children by index.  Values equal
//! to a node are routed to its right subtree, so duplicates accumulate there
//! and `search` stops at the first equal node on the descent path.  Every
//! walk is iterative, so sorted input (height `n`) does not grow the call
//! stack.

use std::cmp::Ordering;

/// Index of a node inside its tree's arena.
pub type NodeId = usize;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

/// Borrowed view of one node of a [`BinarySearchTree`].
#[derive(Debug)]
pub struct TreeNode<'a, T> {
    tree: &'a BinarySearchTree<T>,
    id: NodeId,
}

// Manual impls: a derive would require `T: Clone`/`T: Copy`.
impl<T> Clone for TreeNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreeNode<'_, T> {}

impl<'a, T> TreeNode<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.tree.nodes[self.id].value
    }

    pub fn left(&self) -> Option<TreeNode<'a, T>> {
        self.tree.nodes[self.id].left.map(|id| self.tree.view(id))
    }

    pub fn right(&self) -> Option<TreeNode<'a, T>> {
        self.tree.nodes[self.id].right.map(|id| self.tree.view(id))
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree whose root holds `value`.
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.insert(value);
        tree
    }

    /// Inserts `value` and returns the id of its new node.
    ///
    /// Smaller values descend left, everything else (equal included) descends
    /// right. No rebalancing is done.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = self.nodes.len();
        if let Some(mut current) = self.root {
            loop {
                let node = &mut self.nodes[current];
                let slot = if value < node.value {
                    &mut node.left
                } else {
                    &mut node.right
                };
                match *slot {
                    Some(next) => current = next,
                    None => {
                        *slot = Some(id);
                        break;
                    }
                }
            }
        } else {
            self.root = Some(id);
        }
        self.nodes.push(Node::leaf(value));
        id
    }

    /// Finds the first node equal to `value` along the descent path.
    pub fn search(&self, value: &T) -> Option<TreeNode<'_, T>> {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            let next = match value.cmp(&node.value) {
                Ordering::Equal => return Some(self.view(current)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            current = next?;
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }
}

impl<T> BinarySearchTree<T> {
    pub fn root(&self) -> Option<TreeNode<'_, T>> {
        self.root.map(|id| self.view(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        tallest
    }

    /// Iterates values in order: left subtree, node, right subtree.
    pub fn iter(&self) -> InorderIter<'_, T> {
        InorderIter {
            nodes: &self.nodes,
            stack: Vec::new(),
            pending: self.root,
        }
    }

    /// Collects the in-order traversal. The result is non-decreasing.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn view(&self, id: NodeId) -> TreeNode<'_, T> {
        TreeNode { tree: self, id }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InorderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator driven by an explicit stack of pending ancestors.
pub struct InorderIter<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<NodeId>,
    pending: Option<NodeId>,
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.pending {
            self.stack.push(id);
            self.pending = self.nodes[id].left;
        }
        let id = self.stack.pop()?;
        self.pending = self.nodes[id].right;
        Some(&self.nodes[id].value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::with_root(10);
        tree.extend([5, 15, 3, 7, 12, 18]);
        tree
    }

    #[test]
    fn test_inorder_is_sorted() {
        assert_eq!(sample().inorder_traversal(), vec![3, 5, 7, 10, 12, 15, 18]);
    }

    #[test]
    fn test_shape_follows_insert_order() {
        let tree = sample();
        let root = tree.root().unwrap();
        assert_eq!(*root.value(), 10);
        assert_eq!(*root.left().unwrap().value(), 5);
        assert_eq!(*root.right().unwrap().value(), 15);
        assert_eq!(*root.left().unwrap().right().unwrap().value(), 7);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_search_found_and_missing() {
        let tree = sample();
        for v in [3, 5, 7, 10, 12, 15, 18] {
            assert_eq!(tree.search(&v).map(|n| *n.value()), Some(v));
        }
        assert!(tree.search(&99).is_none());
        assert!(!tree.contains(&4));
    }

    #[test]
    fn test_duplicates_go_right_and_shadow() {
        let mut tree = BinarySearchTree::with_root(10);
        let first = tree.insert(10);
        let second = tree.insert(10);
        let root = tree.root().unwrap();
        assert_eq!(root.right().map(|n| n.id()), Some(first));
        assert_eq!(root.right().and_then(|n| n.right()).map(|n| n.id()), Some(second));
        // search stops at the first match
        assert_eq!(tree.search(&10).map(|n| n.id()), Some(root.id()));
        assert_eq!(tree.inorder_traversal(), vec![10, 10, 10]);
    }

    #[test]
    fn test_empty_tree() {
        let tree: BinarySearchTree<u8> = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(tree.search(&1).is_none());
        assert!(tree.inorder_traversal().is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_first_insert_becomes_root() {
        let mut tree = BinarySearchTree::new();
        let id = tree.insert("m");
        assert_eq!(tree.root().map(|n| n.id()), Some(id));
        tree.insert("a");
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_sorted_input_degenerates_without_overflow() {
        let tree: BinarySearchTree<u32> = (0..5_000).collect();
        assert_eq!(tree.height(), 5_000);
        assert!(tree.contains(&4_999));
        assert!(tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a <= b));
    }

    #[test]
    fn test_borrowing_iteration() {
        let tree: BinarySearchTree<String> =
            ["pear", "apple", "fig"].into_iter().map(String::from).collect();
        let words: Vec<&str> = (&tree).into_iter().map(String::as_str).collect();
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }
}
