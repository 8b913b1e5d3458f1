//! Construction of binary trees from level-order literal values.
//!
//! Level-order literals list the tree breadth-first, e.g. `[1,null,2,3]`:
//!
//! ```text
//!     1
//!      \
//!       2
//!      /
//!     3
//! ```
//!
//! # Builder rules
//! 1. The first value (if present and not absent) becomes the root
//! 2. The remaining values are consumed two at a time, giving the left and then
//!    the right child of the oldest vertex still waiting for its children
//! 3. An absent value (`None`) consumes its slot but creates no vertex,
//!    so nothing is queued for it
//! 4. Construction stops as soon as either the queue or the input runs out;
//!    values left over at that point are ignored

use crate::model::tree::BinaryTree;
use std::collections::VecDeque;

impl BinaryTree {
    /// Builds a tree from level-order values, see [module docs](self).
    ///
    /// Deterministic: calling this twice with the same values gives two
    /// independent trees that compare equal.
    ///
    /// # Example
    /// ```
    /// use katacheck::model::BinaryTree;
    ///
    /// let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2)]);
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), 1);
    /// assert!(root.left().is_none());
    /// assert_eq!(tree.right_of(root).unwrap().value(), 2);
    /// ```
    pub fn from_level_order(values: &[Option<i64>]) -> Self {
        let num_present = values.iter().flatten().count();
        let mut tree = BinaryTree::with_capacity(num_present);

        let Some(Some(root_value)) = values.first() else {
            return tree;
        };
        let root = tree.add_vertex(*root_value);
        tree.set_root(root);

        let mut pending = VecDeque::from([root]);
        let mut slots = values[1..].iter();

        while let Some(parent) = pending.pop_front() {
            let Some(left) = slots.next() else { break };
            if let Some(value) = left {
                let child = tree.add_vertex(*value);
                tree.attach_left(parent, child);
                pending.push_back(child);
            }

            let Some(right) = slots.next() else { break };
            if let Some(value) = right {
                let child = tree.add_vertex(*value);
                tree.attach_right(parent, child);
                pending.push_back(child);
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_root_gives_empty_tree() {
        let tree = BinaryTree::from_level_order(&[None, Some(1), Some(2)]);
        assert!(tree.is_empty());
        assert_eq!(tree.num_vertices(), 0);
    }

    #[test]
    fn test_leftover_values_are_ignored() {
        // Queue runs dry after the root's two absent children
        let tree = BinaryTree::from_level_order(&[Some(1), None, None, Some(4), Some(5)]);
        assert_eq!(tree.num_vertices(), 1);
        assert!(tree.is_valid());
    }
}
