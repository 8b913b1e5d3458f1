//! Reverse linked list: reverse a singly linked list.
//!
//! Input literal: `head=[1,2,3]`, expected literal: `[3,2,1]`.

mod key;
mod solution;

pub use key::reverse_list_key;
pub use solution::reverse_list;

use crate::model::list::{build_list, list_values};
use crate::model::Link;
use crate::parser::literal::parse_labeled_int_list;
use crate::parser::ParsingError;
use crate::problems::{Answer, Problem};

const HEAD_LABEL: &str = "head=";

/// The reverse-linked-list exercise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseLinkedList;

impl Problem for ReverseLinkedList {
    type Input = Vec<i64>;
    type Structure = Link;

    fn slug(&self) -> &'static str {
        "reverse-linked-list"
    }

    fn parse_input(&self, literal: &str) -> Result<Vec<i64>, ParsingError> {
        parse_labeled_int_list(literal, Some(HEAD_LABEL))
    }

    fn build(&self, values: &Vec<i64>) -> Link {
        build_list(values)
    }

    fn candidate(&self, head: Link) -> Answer {
        Answer::Values(list_values(&reverse_list(head)))
    }

    fn key(&self, head: Link) -> Answer {
        Answer::Values(list_values(&reverse_list_key(head)))
    }
}
