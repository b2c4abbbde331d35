//! Error types for chordwheel operations.
//!
//! This module provides the main error type [`ChordwheelError`] which wraps
//! the error conditions that can occur while rendering a wheel.

use std::io;

use thiserror::Error;

/// The main error type for chordwheel operations.
///
/// Graph building and layout are infallible; errors arise at the
/// boundaries: file I/O, style color parsing, and export backends.
#[derive(Debug, Error)]
pub enum ChordwheelError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ChordwheelError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
