//! Data structures the exercises operate on.
//!
//! - [list]: singly linked list with one owning [Box] per edge
//! - [BinaryTree] + [Vertex]: binary tree using the arena pattern, so
//!   vertices are referenced by [TreeIndex] instead of pointers
//! - [TestCase]: one raw row of a test table

/// Singly linked list nodes and helpers
pub mod list;
/// Binary tree structure and serialization
pub mod tree;
/// Level-order construction of binary trees
pub mod tree_builder;
/// Tree vertex type
pub mod vertex;

mod test_case;

pub use list::{Link, ListNode};
pub use test_case::TestCase;
pub use tree::{BinaryTree, TreeIndex};
pub use vertex::Vertex;
