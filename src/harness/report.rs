//! Human-readable rendering of a [RunSummary].
//!
//! ```text
//! [PASS] Case 1 (id: 1)
//!   input:     nums=[2,7,11,15];target=9
//!   candidate: [0,1]
//!   key:       [0,1]
//!   expected:  [0,1]
//! passed 1/1
//! ```

use super::outcome::{CaseReport, CaseStatus, Literal, RunSummary};
use crate::problems::Answer;
use colored::{Color, Colorize};
use std::io::{self, Write};

/// Placeholder for an answer that was never produced.
const MISSING: &str = "-";

/// Writes case reports and the final tally, optionally colored.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Reporter {
    /// Creates a reporter; `color = false` yields plain text.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Writes every case report followed by the `passed X/Y` line.
    pub fn write_report<W: Write>(&self, summary: &RunSummary, out: &mut W) -> io::Result<()> {
        for case in &summary.cases {
            write!(out, "{}", self.format_case(case))?;
        }
        writeln!(out, "{}", self.format_summary(summary))?;
        out.flush()
    }

    /// Formats one case as a status line followed by indented detail lines.
    pub fn format_case(&self, case: &CaseReport) -> String {
        let tag_color = match case.status {
            CaseStatus::Passed => Color::Green,
            CaseStatus::Failed | CaseStatus::Panicked { .. } => Color::Red,
            CaseStatus::ParseError { .. } => Color::Yellow,
        };
        let mut text = format!(
            "{} Case {} (id: {})\n",
            self.paint(&format!("[{}]", case.status.tag()), tag_color),
            case.number,
            case.id
        );
        text.push_str(&detail("input:", &case.input));

        match &case.status {
            CaseStatus::ParseError { literal, error } => {
                let label = match literal {
                    Literal::Input => "parse input error:",
                    Literal::Expected => "parse expected error:",
                };
                text.push_str(&detail(label, &self.paint(&error.to_string(), Color::Red)));
            }
            CaseStatus::Panicked { message } => {
                text.push_str(&detail("panicked:", &self.paint(message, Color::Red)));
                text.push_str(&self.format_answers(case));
            }
            CaseStatus::Passed | CaseStatus::Failed => {
                text.push_str(&self.format_answers(case));
            }
        }
        text
    }

    /// Formats the final tally, green if all cases passed, red otherwise.
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let color = if summary.all_passed() {
            Color::Green
        } else {
            Color::Red
        };
        self.paint(
            &format!("passed {}/{}", summary.passed(), summary.total()),
            color,
        )
    }

    fn format_answers(&self, case: &CaseReport) -> String {
        let mut text = detail("candidate:", &answer_or_missing(&case.candidate));
        text.push_str(&detail("key:", &answer_or_missing(&case.key)));
        text.push_str(&detail("expected:", &answer_or_missing(&case.expected)));
        text
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detail(label: &str, value: &str) -> String {
    format!("  {label:<10} {value}\n")
}

fn answer_or_missing(answer: &Option<Answer>) -> String {
    answer
        .as_ref()
        .map_or_else(|| MISSING.to_string(), Answer::to_string)
}
