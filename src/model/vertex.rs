//! Vertex module for binary tree representation.

use crate::model::tree::TreeIndex;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a [BinaryTree](crate::model::BinaryTree).
///
/// Children are referenced by their [TreeIndex] in the tree arena;
/// a missing child is `None`.
///
/// # Invariants
/// - `index` is the position of this vertex in the arena
/// - each child index refers to a vertex with exactly this vertex as parent
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Vertex {
    /// Index of this vertex in the tree arena
    index: TreeIndex,
    /// Integer payload of this vertex
    value: i64,
    /// Index of the left child, if any
    left: Option<TreeIndex>,
    /// Index of the right child, if any
    right: Option<TreeIndex>,
}

impl Vertex {
    /// Creates a new vertex without children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `value` - The value stored in this vertex
    pub fn new(index: TreeIndex, value: i64) -> Self {
        Vertex {
            index,
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> TreeIndex {
        self.index
    }

    /// Returns the value stored in this vertex.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the index of the left child, if any.
    pub fn left(&self) -> Option<TreeIndex> {
        self.left
    }

    /// Returns the index of the right child, if any.
    pub fn right(&self) -> Option<TreeIndex> {
        self.right
    }

    pub(crate) fn set_left(&mut self, child: TreeIndex) {
        self.left = Some(child);
    }

    pub(crate) fn set_right(&mut self, child: TreeIndex) {
        self.right = Some(child);
    }
}
