//! Generic harness checking a [Problem]'s candidate solution against its key.
//!
//! For every [TestCase] the harness parses both literals, builds two independent
//! copies of the input structure, runs the candidate and the key on one copy
//! each, and compares the flattened answers positionally. Case-local failures
//! (unparsable literal, mismatch, panic) are recorded in the [RunSummary];
//! only an unusable test table is a [HarnessError].
//!
//! # Example
//! ```
//! use katacheck::harness::Harness;
//! use katacheck::model::TestCase;
//! use katacheck::problems::TwoSum;
//!
//! let cases = vec![TestCase::new(
//!     1,
//!     "1".to_string(),
//!     "nums=[2,7,11,15];target=9".to_string(),
//!     "[0,1]".to_string(),
//! )];
//! let summary = Harness::new(TwoSum).run(&cases);
//! assert_eq!(summary.passed(), 1);
//! ```

mod outcome;
mod report;

pub use outcome::{CaseReport, CaseStatus, Literal, RunSummary, classify};
pub use report::Reporter;

use crate::error::HarnessError;
use crate::model::TestCase;
use crate::parser::ByteParser;
use crate::parser::table::parse_test_table;
use crate::problems::{Answer, Problem};
use std::any::Any;
use std::panic;
use std::path::Path;
use std::sync::Once;
use std::thread;
use tracing::{debug, info, warn};

/// Stack size of the worker thread running a solution, enough for recursive
/// solutions on inputs with hundreds of thousands of nodes.
const SOLUTION_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Name of the worker thread running a solution.
const SOLUTION_THREAD_NAME: &str = "katacheck-solution";

static QUIET_SOLUTION_PANICS: Once = Once::new();

// =#========================================================================#=
// TEST TABLE LOADING
// =#========================================================================#=
/// Reads and parses the test table at `path`.
///
/// The file is read into memory and closed before parsing starts.
///
/// # Errors
/// * [HarnessError::Io] if the file cannot be read
/// * [HarnessError::MalformedTable] if the CSV structure is broken
/// * [HarnessError::NoTestRows] if there is no data row after the header
pub fn load_test_table<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>, HarnessError> {
    let path = path.as_ref();
    let mut parser = ByteParser::for_file(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cases = parse_test_table(&mut parser).map_err(|source| HarnessError::MalformedTable {
        path: path.to_path_buf(),
        source,
    })?;

    if cases.is_empty() {
        return Err(HarnessError::NoTestRows {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), rows = cases.len(), "loaded test table");
    Ok(cases)
}

// =#========================================================================#=
// HARNESS
// =#========================================================================#=
/// Runs the test cases of one [Problem].
///
/// # Configuration
/// * [`with_catch_panics(bool)`](Self::with_catch_panics)
///     - Whether a panicking solution fails only its case (default)
///       or aborts the run.
///
/// With panics caught, each solution runs on its own worker thread with a
/// large stack; its panic is reported in the [CaseReport] only, not on stderr.
pub struct Harness<P: Problem> {
    problem: P,
    catch_panics: bool,
}

impl<P: Problem> Harness<P> {
    /// Creates a harness for `problem` with default settings.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            catch_panics: true,
        }
    }

    /// Sets whether panics in solutions are caught and recorded per case.
    pub fn with_catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Returns the problem under test.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Loads the test table at `path` and runs all of its cases.
    ///
    /// # Errors
    /// See [load_test_table]; failing cases are never errors.
    pub fn run_file<Q: AsRef<Path>>(&self, path: Q) -> Result<RunSummary, HarnessError> {
        let cases = load_test_table(path)?;
        Ok(self.run(&cases))
    }

    /// Runs all `cases` in order, one after the other.
    pub fn run(&self, cases: &[TestCase]) -> RunSummary {
        let summary = RunSummary {
            cases: cases.iter().map(|case| self.run_case(case)).collect(),
        };
        info!(
            problem = self.problem.slug(),
            passed = summary.passed(),
            total = summary.total(),
            "run finished"
        );
        summary
    }

    /// Runs a single case and classifies it.
    pub fn run_case(&self, case: &TestCase) -> CaseReport {
        debug!(case = case.number, id = %case.id, input = %case.input, "running case");
        let mut report = CaseReport {
            number: case.number,
            id: case.id.clone(),
            input: case.input.clone(),
            status: CaseStatus::Failed,
            candidate: None,
            key: None,
            expected: None,
        };

        let input = match self.problem.parse_input(&case.input) {
            Ok(input) => input,
            Err(error) => {
                warn!(case = case.number, %error, "failed to parse input literal");
                report.status = CaseStatus::ParseError { literal: Literal::Input, error };
                return report;
            }
        };
        let expected = match self.problem.parse_expected(&case.expected) {
            Ok(expected) => expected,
            Err(error) => {
                warn!(case = case.number, %error, "failed to parse expected literal");
                report.status = CaseStatus::ParseError { literal: Literal::Expected, error };
                return report;
            }
        };

        // One structure per side
        let candidate_structure = self.problem.build(&input);
        let key_structure = self.problem.build(&input);
        let candidate = self.execute(|| self.problem.candidate(candidate_structure));
        let key = self.execute(|| self.problem.key(key_structure));

        report.status = match (&candidate, &key) {
            (Ok(candidate), Ok(key)) => classify(candidate, key, &expected),
            (Err(message), _) => CaseStatus::Panicked {
                message: format!("candidate panicked: {message}"),
            },
            (_, Err(message)) => CaseStatus::Panicked {
                message: format!("key panicked: {message}"),
            },
        };
        if let CaseStatus::Panicked { message } = &report.status {
            warn!(case = case.number, %message, "solution panicked");
        }

        report.candidate = candidate.ok();
        report.key = key.ok();
        report.expected = Some(expected);
        report
    }

    /// Runs a solution, turning a panic into an error message if configured.
    fn execute<F>(&self, solution: F) -> Result<Answer, String>
    where
        F: FnOnce() -> Answer + Send,
    {
        if !self.catch_panics {
            return Ok(solution());
        }

        silence_solution_panics();
        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name(SOLUTION_THREAD_NAME.to_string())
                .stack_size(SOLUTION_STACK_SIZE)
                .spawn_scoped(scope, solution)
                .map_err(|err| format!("failed to start solution thread: {err}"))?;
            worker.join().map_err(panic_message)
        })
    }
}

/// Installs (once) a panic hook that stays silent on solution worker threads
/// and defers to the previous hook everywhere else.
fn silence_solution_panics() {
    QUIET_SOLUTION_PANICS.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if thread::current().name() != Some(SOLUTION_THREAD_NAME) {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
