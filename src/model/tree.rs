//! Tree module for binary tree representation.
//!
//! This module provides the core data structure for representing binary trees:
//! - [BinaryTree]: The tree structure using the arena pattern.
//! - [TreeIndex] is used to index vertices.

use crate::model::vertex::Vertex;
use std::collections::VecDeque;

/// Index of a vertex in a tree (arena).
pub type TreeIndex = usize;

// =#========================================================================#=
// BINARY TREE
// =#========================================================================#=
/// A binary tree of integers represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by [TreeIndex].
/// No parent references are stored, as no algorithm in this crate walks upwards.
///
/// # Structure
/// - All vertices are stored in the arena, the root index is maintained
/// - An empty tree has no vertices and no root
/// - Each vertex has at most one parent (checked by [BinaryTree::is_valid])
///
/// # Construction
/// Usually built from a level-order literal with
/// [from_level_order](BinaryTree::from_level_order). Manual construction adds
/// vertices and then attaches them:
///
/// # Example
/// ```
/// use katacheck::model::BinaryTree;
///
/// // Tree: [1,null,2]
/// let mut tree = BinaryTree::new();
/// let root = tree.add_vertex(1);
/// let right = tree.add_vertex(2);
/// tree.set_root(root);
/// tree.attach_right(root, right);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.to_level_order(), vec![Some(1), None, Some(2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree, `None` for the empty tree
    root_index: Option<TreeIndex>,
}

// ============================================================================
// New, Construction, Getters / Accessors (pub)
// ============================================================================
impl BinaryTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty tree with capacity for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        BinaryTree {
            vertices: Vec::with_capacity(num_vertices),
            root_index: None,
        }
    }

    /// Adds a detached vertex to the tree, assigning a unique index, which gets returned.
    pub fn add_vertex(&mut self, value: i64) -> TreeIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, value));
        index
    }

    /// Marks the vertex at `index` as root.
    pub fn set_root(&mut self, index: TreeIndex) {
        self.root_index = Some(index);
    }

    /// Sets `child` as left child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn attach_left(&mut self, parent: TreeIndex, child: TreeIndex) {
        self[parent].set_left(child);
    }

    /// Sets `child` as right child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn attach_right(&mut self, parent: TreeIndex, child: TreeIndex) {
        self[parent].set_right(child);
    }

    /// Returns the index of the root, or `None` for the empty tree.
    pub fn root_index(&self) -> Option<TreeIndex> {
        self.root_index
    }

    /// Returns a reference to the root vertex, or `None` for the empty tree.
    pub fn root(&self) -> Option<&Vertex> {
        self.root_index.map(|index| &self[index])
    }

    /// Returns the left child of `vertex`, if any.
    pub fn left_of(&self, vertex: &Vertex) -> Option<&Vertex> {
        vertex.left().map(|index| &self[index])
    }

    /// Returns the right child of `vertex`, if any.
    pub fn right_of(&self, vertex: &Vertex) -> Option<&Vertex> {
        vertex.right().map(|index| &self[index])
    }

    /// Returns the number of vertices in the arena.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root_index.is_none()
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index (if set) is within bounds; an empty tree has no vertices
    /// - All vertex indices match their position in the arena
    /// - All child indices are within bounds
    /// - Every vertex except the root has exactly one parent, the root has none
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let Some(root_index) = self.root_index else {
            return self.vertices.is_empty();
        };
        if root_index >= self.vertices.len() {
            return false;
        }

        let mut parent_count = vec![0usize; self.vertices.len()];
        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index() != index {
                return false;
            }

            for child in [vertex.left(), vertex.right()].into_iter().flatten() {
                if child >= self.vertices.len() {
                    return false;
                }
                parent_count[child] += 1;
            }
        }

        let single_parents = parent_count
            .iter()
            .enumerate()
            .all(|(index, &count)| if index == root_index { count == 0 } else { count == 1 });
        if !single_parents {
            return false;
        }

        // With single parents, anything unreachable from the root sits on a detached cycle
        let mut reachable = 0;
        let mut stack = vec![root_index];
        while let Some(index) = stack.pop() {
            reachable += 1;
            let vertex = &self[index];
            stack.extend(vertex.right());
            stack.extend(vertex.left());
        }
        reachable == self.vertices.len()
    }
}

impl std::ops::Index<TreeIndex> for BinaryTree {
    type Output = Vertex;

    fn index(&self, index: TreeIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl std::ops::IndexMut<TreeIndex> for BinaryTree {
    fn index_mut(&mut self, index: TreeIndex) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

// ============================================================================
// Level-order serialization (pub)
// ============================================================================
impl BinaryTree {
    /// Converts the tree to its level-order literal values.
    ///
    /// Vertices are listed breadth-first; a missing child of a listed vertex
    /// becomes `None`. Trailing `None` values are trimmed, so the empty tree
    /// yields an empty vector.
    ///
    /// Building a tree from the result with
    /// [from_level_order](BinaryTree::from_level_order) gives a tree of the same shape.
    pub fn to_level_order(&self) -> Vec<Option<i64>> {
        let mut values = Vec::with_capacity(2 * self.vertices.len() + 1);
        let mut queue = VecDeque::new();
        queue.push_back(self.root_index);

        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(index) => {
                    let vertex = &self[index];
                    values.push(Some(vertex.value()));
                    queue.push_back(vertex.left());
                    queue.push_back(vertex.right());
                }
                None => values.push(None),
            }
        }

        while values.last() == Some(&None) {
            values.pop();
        }
        values
    }
}
