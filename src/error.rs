//! Fatal errors that abort a whole harness run.
//!
//! Problems with a single test case (bad literal, wrong answer, panicking
//! solution) are never errors at this level; they are recorded in the
//! [RunSummary](crate::harness::RunSummary) and the run continues.

use crate::parser::ParsingError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a harness run before or while reporting.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read test table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("test table {} has no test rows", .path.display())]
    NoTestRows { path: PathBuf },

    #[error("malformed test table {}: {source}", .path.display())]
    MalformedTable {
        path: PathBuf,
        #[source]
        source: ParsingError,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
