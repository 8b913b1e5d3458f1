//! Binary tree inorder traversal: list the values of a binary tree in inorder.
//!
//! Input literal: `root=[1,null,2,3]` (level order), expected literal: `[1,3,2]`.

mod key;
mod solution;

pub use key::inorder_traversal_key;
pub use solution::inorder_traversal;

use crate::model::BinaryTree;
use crate::parser::literal::parse_labeled_optional_int_list;
use crate::parser::ParsingError;
use crate::problems::{Answer, Problem};

const ROOT_LABEL: &str = "root=";

/// The binary-tree-inorder-traversal exercise.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTreeInorderTraversal;

impl Problem for BinaryTreeInorderTraversal {
    type Input = Vec<Option<i64>>;
    type Structure = BinaryTree;

    fn slug(&self) -> &'static str {
        "binary-tree-inorder-traversal"
    }

    fn parse_input(&self, literal: &str) -> Result<Vec<Option<i64>>, ParsingError> {
        parse_labeled_optional_int_list(literal, Some(ROOT_LABEL))
    }

    fn build(&self, values: &Vec<Option<i64>>) -> BinaryTree {
        BinaryTree::from_level_order(values)
    }

    fn candidate(&self, tree: BinaryTree) -> Answer {
        Answer::Values(inorder_traversal(&tree))
    }

    fn key(&self, tree: BinaryTree) -> Answer {
        Answer::Values(inorder_traversal_key(&tree))
    }
}
