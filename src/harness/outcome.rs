//! Outcome records of a harness run.

use crate::parser::ParsingError;
use crate::problems::Answer;

/// Which literal of a test case failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Input,
    Expected,
}

/// Classification of a single test case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseStatus {
    /// Candidate matches key, and key matches expected
    Passed,
    /// At least one of the two comparisons failed
    Failed,
    /// A literal could not be parsed; no solution was run
    ParseError { literal: Literal, error: ParsingError },
    /// Candidate or key panicked
    Panicked { message: String },
}

impl CaseStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseStatus::Passed)
    }

    /// Short tag shown in front of a case report.
    pub fn tag(&self) -> &'static str {
        match self {
            CaseStatus::Passed => "PASS",
            CaseStatus::Failed | CaseStatus::Panicked { .. } => "FAIL",
            CaseStatus::ParseError { .. } => "SKIP",
        }
    }
}

/// Everything known about one executed (or skipped) test case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// 1-based position among the data rows
    pub number: usize,
    /// Case identifier from the test table
    pub id: String,
    /// Raw input literal
    pub input: String,
    pub status: CaseStatus,
    /// `None` if the candidate did not run to completion
    pub candidate: Option<Answer>,
    /// `None` if the key did not run to completion
    pub key: Option<Answer>,
    /// `None` if the expected literal was not parsed
    pub expected: Option<Answer>,
}

/// Result of running all cases of a test table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    /// Number of passed cases.
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.status.is_passed()).count()
    }

    /// Number of cases in the table, including skipped ones.
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if every case passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Classifies a case from its three answers: pass only if the candidate
/// matches the key and the key matches the expected answer.
pub fn classify(candidate: &Answer, key: &Answer, expected: &Answer) -> CaseStatus {
    if candidate == key && key == expected {
        CaseStatus::Passed
    } else {
        CaseStatus::Failed
    }
}
