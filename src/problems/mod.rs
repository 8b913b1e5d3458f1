//! Algorithm exercises and the [Problem] abstraction the harness runs them through.
//!
//! Every exercise lives in its own module with the same three parts:
//! * `key` - the reference solution, assumed correct
//! * `solution` - the learner's attempt, to be checked against the key
//! * `mod` - a [Problem] implementation adapting literals to the native
//!   structure and flattening results into an [Answer]
//!
//! # Exercises
//! * [TwoSum] - indices of the two numbers adding up to a target
//! * [ReverseLinkedList] - reverse a singly linked list
//! * [BinaryTreeInorderTraversal] - inorder values of a binary tree

pub mod binary_tree_inorder_traversal;
pub mod reverse_linked_list;
pub mod two_sum;

pub use binary_tree_inorder_traversal::BinaryTreeInorderTraversal;
pub use reverse_linked_list::ReverseLinkedList;
pub use two_sum::TwoSum;

use crate::parser::literal::{format_int_list, parse_int_list};
use crate::parser::ParsingError;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Directory holding one sub-directory of test tables per exercise.
pub const PROBLEMS_DIR: &str = "problems";

/// File name of the test table inside an exercise directory.
pub const TESTS_FILE_NAME: &str = "tests.csv";

// =#========================================================================#=
// ANSWER
// =#========================================================================#=
/// Flattened result of running a solution, or an expected result from a test table.
///
/// Equality is positional: same length and same value at every index.
/// [Answer::NotFound] only equals itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Ordered integer sequence
    Values(Vec<i64>),
    /// The solution reported that no answer exists
    NotFound,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Values(values) => write!(f, "{}", format_int_list(values)),
            Answer::NotFound => write!(f, "not found"),
        }
    }
}

// =#========================================================================#=
// PROBLEM (trait)
// =#========================================================================#=
/// An exercise the [Harness](crate::harness::Harness) can check.
///
/// The harness drives the pipeline for each test case:
/// 1. [parse_input](Self::parse_input) and [parse_expected](Self::parse_expected)
///    on the raw literals; a failure skips the case
/// 2. [build](Self::build) twice from the same parsed input, so the candidate
///    and the key each own an independent structure
/// 3. [candidate](Self::candidate) and [key](Self::key) consume their structure
///    and return flattened [Answer]s
///
/// Solutions run on a worker thread, hence the `Sync` and `Send` bounds.
pub trait Problem: Sync {
    /// Value parsed from the input literal.
    type Input;

    /// Native structure handed to a solution; built fresh for every run.
    type Structure: Send;

    /// Short name used on the command line and as test table directory.
    fn slug(&self) -> &'static str;

    /// Parses the raw input literal of a test case.
    fn parse_input(&self, literal: &str) -> Result<Self::Input, ParsingError>;

    /// Parses the raw expected literal of a test case.
    ///
    /// Defaults to a plain integer list.
    fn parse_expected(&self, literal: &str) -> Result<Answer, ParsingError> {
        parse_int_list(literal).map(Answer::Values)
    }

    /// Builds the structure a solution operates on.
    fn build(&self, input: &Self::Input) -> Self::Structure;

    /// Runs the learner's solution.
    fn candidate(&self, structure: Self::Structure) -> Answer;

    /// Runs the reference solution.
    fn key(&self, structure: Self::Structure) -> Answer;
}

// =#========================================================================#=
// PROBLEM KIND
// =#========================================================================#=
/// The exercises available from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProblemKind {
    /// Indices of two numbers adding up to a target
    TwoSum,
    /// Reverse a singly linked list
    ReverseLinkedList,
    /// Inorder traversal of a binary tree
    BinaryTreeInorderTraversal,
}

impl ProblemKind {
    /// Returns the slug of this exercise, e.g. `two-sum`.
    pub fn slug(&self) -> &'static str {
        match self {
            ProblemKind::TwoSum => TwoSum.slug(),
            ProblemKind::ReverseLinkedList => ReverseLinkedList.slug(),
            ProblemKind::BinaryTreeInorderTraversal => BinaryTreeInorderTraversal.slug(),
        }
    }

    /// Returns the conventional test table location `problems/<slug>/tests.csv`.
    pub fn default_tests_path(&self) -> PathBuf {
        [PROBLEMS_DIR, self.slug(), TESTS_FILE_NAME].iter().collect()
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
