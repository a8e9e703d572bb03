// binary search tree module
mod bst;

pub use bst::{BinarySearchTree, InorderIter, NodeId, TreeNode};
