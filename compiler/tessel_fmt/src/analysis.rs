//! Per-token analysis records.

use std::fmt;

use tessel_ir::{Span, TokenIdx};
use tessel_knn::Decision;

/// What the formatter predicted for one token next to what the document
/// itself did there. Observational only: nothing in the engine reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenPositionAnalysis {
    pub token: TokenIdx,
    pub text: String,
    pub predicted_whitespace: Decision,
    pub predicted_alignment: Decision,
    /// Layout of the input document at this token.
    pub observed_whitespace: Decision,
    pub observed_alignment: Decision,
    /// The anti-merge failsafe overrode a zero-space prediction.
    pub failsafe: bool,
    /// A preceding line comment forced a newline.
    pub forced_newline: bool,
    /// Newline/whitespace classifier report (query, rationale, neighbours).
    pub whitespace_analysis: String,
    pub alignment_analysis: String,
    /// Byte range of the token in the formatted output.
    pub span: Span,
}

impl TokenPositionAnalysis {
    /// Both predictions agree with the input layout.
    pub fn matches_observed(&self) -> bool {
        self.predicted_whitespace == self.observed_whitespace
            && self.predicted_alignment == self.observed_alignment
    }
}

impl fmt::Display for TokenPositionAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.token, self.text, self.span)?;
        if self.failsafe {
            f.write_str(" [failsafe]")?;
        }
        if self.forced_newline {
            f.write_str(" [forced newline]")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  whitespace: predicted {}, observed {}",
            self.predicted_whitespace, self.observed_whitespace
        )?;
        for line in self.whitespace_analysis.lines() {
            writeln!(f, "    {line}")?;
        }
        writeln!(
            f,
            "  alignment: predicted {}, observed {}",
            self.predicted_alignment, self.observed_alignment
        )?;
        for line in self.alignment_analysis.lines() {
            writeln!(f, "    {line}")?;
        }
        Ok(())
    }
}
