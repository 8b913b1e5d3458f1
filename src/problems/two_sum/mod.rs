//! Two-sum: find the indices of the two numbers adding up to a target.
//!
//! Input literal: `nums=[2,7,11,15];target=9`, expected literal: `[0,1]`.
//! An expected `[]` states that no pair exists.

mod key;
mod solution;

pub use key::two_sum_key;
pub use solution::two_sum;

use crate::parser::literal::{parse_int_list, parse_labeled_int, parse_labeled_int_list, split_fields};
use crate::parser::ParsingError;
use crate::problems::{Answer, Problem};

const NUMS_LABEL: &str = "nums=";
const TARGET_LABEL: &str = "target=";

/// Numbers and target of a two-sum case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoSumInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

/// The two-sum exercise; the structure is the input itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSum;

impl TwoSum {
    fn to_answer(pair: Option<(usize, usize)>) -> Answer {
        match pair {
            Some((i, j)) => Answer::Values(vec![i as i64, j as i64]),
            None => Answer::NotFound,
        }
    }
}

impl Problem for TwoSum {
    type Input = TwoSumInput;
    type Structure = TwoSumInput;

    fn slug(&self) -> &'static str {
        "two-sum"
    }

    /// Parses `nums=[...];target=N`; both labels are optional.
    fn parse_input(&self, literal: &str) -> Result<TwoSumInput, ParsingError> {
        let fields = split_fields(literal, 2)?;
        let nums = parse_labeled_int_list(fields[0], Some(NUMS_LABEL))?;
        let target = parse_labeled_int(fields[1], Some(TARGET_LABEL))?;
        Ok(TwoSumInput { nums, target })
    }

    fn parse_expected(&self, literal: &str) -> Result<Answer, ParsingError> {
        let values = parse_int_list(literal)?;
        if values.is_empty() {
            Ok(Answer::NotFound)
        } else {
            Ok(Answer::Values(values))
        }
    }

    fn build(&self, input: &TwoSumInput) -> TwoSumInput {
        input.clone()
    }

    fn candidate(&self, input: TwoSumInput) -> Answer {
        Self::to_answer(two_sum(&input.nums, input.target))
    }

    fn key(&self, input: TwoSumInput) -> Answer {
        Self::to_answer(two_sum_key(&input.nums, input.target))
    }
}
