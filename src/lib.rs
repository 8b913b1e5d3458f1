//! Katacheck is a small harness for checking solutions of algorithm exercises
//! against a reference key, driven by CSV test tables.
//!
//! Core functionality provided:
//! - Test tables: `tests.csv` files with an `id,input,expected` header and one
//!   row per case; fields containing commas are quoted.
//! - Literals: integer lists like `[2,7,11,15]`, optionally labeled
//!   (`nums=[2,7]`), with `null` for absent tree positions, and
//!   `;`-separated multi-field inputs (`nums=[2,7];target=9`).
//! - Structures: singly linked lists ([ListNode](model::ListNode)) and arena
//!   binary trees ([BinaryTree](model::BinaryTree)) built from level-order literals.
//! - Exercises: see [crate::problems]; each pairs a learner's candidate with a key.
//! - Harness: runs candidate and key on independent copies of every input and
//!   passes a case only if candidate, key and expected answer all agree.
//!
//! A broken case (bad literal, wrong answer, panicking solution) never stops a
//! run; only an unreadable or empty test table is a [HarnessError].
//!
//! # Usage patterns
//! 1. [check_problem] and [check_and_report] run one of the bundled exercises
//!    by [ProblemKind].
//! 2. Implement [Problem](problems::Problem) for your own exercise and drive
//!    it with a [Harness](harness::Harness).
//!
//! ## Example
//! ```no_run
//! use katacheck::check_and_report;
//! use katacheck::harness::Reporter;
//! use katacheck::problems::ProblemKind;
//!
//! let kind = ProblemKind::TwoSum;
//! let mut out = std::io::stdout();
//! let summary = check_and_report(kind, kind.default_tests_path(), &Reporter::new(true), &mut out)?;
//! assert!(summary.all_passed());
//! # Ok::<(), katacheck::error::HarnessError>(())
//! ```

pub mod error;
pub mod harness;
pub mod model;
pub mod parser;
pub mod problems;

use crate::error::HarnessError;
use crate::harness::{Harness, Reporter, RunSummary};
use crate::problems::{BinaryTreeInorderTraversal, ProblemKind, ReverseLinkedList, TwoSum};
use std::io::Write;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Runs all cases of the test table at `path` for the exercise `kind`
/// using default harness settings.
///
/// # Errors
/// If the test table cannot be read, is malformed, or has no data rows.
pub fn check_problem<P: AsRef<Path>>(kind: ProblemKind, path: P) -> Result<RunSummary, HarnessError> {
    match kind {
        ProblemKind::TwoSum => Harness::new(TwoSum).run_file(path),
        ProblemKind::ReverseLinkedList => Harness::new(ReverseLinkedList).run_file(path),
        ProblemKind::BinaryTreeInorderTraversal => {
            Harness::new(BinaryTreeInorderTraversal).run_file(path)
        }
    }
}

/// Like [check_problem], then writes the report of every case and the final
/// `passed X/Y` line to `out`.
///
/// # Errors
/// Those of [check_problem], plus [HarnessError::Report] if writing fails.
pub fn check_and_report<P: AsRef<Path>, W: Write>(
    kind: ProblemKind,
    path: P,
    reporter: &Reporter,
    out: &mut W,
) -> Result<RunSummary, HarnessError> {
    let summary = check_problem(kind, path)?;
    reporter.write_report(&summary, out)?;
    Ok(summary)
}
