//! Error adapter for converting ChordwheelError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use chordwheel::ChordwheelError;

/// Adapter for [`ChordwheelError`] variants.
///
/// This adapter wraps an error and implements [`MietteDiagnostic`] to
/// enable rich error formatting in the CLI. Chordwheel errors carry no
/// source spans, so the adapter supplies codes and help text only.
pub struct ErrorAdapter<'a>(pub &'a ChordwheelError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ChordwheelError::Io(_) => "chordwheel::io",
            ChordwheelError::Style(_) => "chordwheel::style",
            ChordwheelError::Export(_) => "chordwheel::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ChordwheelError::Style(_) => Some(Box::new(
                "colors accept CSS color strings such as \"#ff8800\" or \"rebeccapurple\"",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
