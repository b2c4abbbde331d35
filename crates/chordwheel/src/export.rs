//! Export backends for composed wheel scenes.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting composed scenes into output markup. It is the final stage in
//! the chordwheel processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Input Text
//!     ↓ tokenize + ingest
//! ChordGraph
//!     ↓ layout
//! WheelLayout
//!     ↓ scene
//! Scene
//!     ↓ export (this module)
//! Output Markup
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — SVG output via [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`ChordwheelError::Export`] at the crate
//! boundary.
//!
//! [`ChordwheelError::Export`]: crate::ChordwheelError::Export

/// SVG export backend.
pub mod svg;

use chordwheel_core::draw::Scene;
use thiserror::Error;

/// Abstraction for scene export backends.
///
/// Implementors convert a [`Scene`] into a specific output format, returned
/// as the format's textual serialization (e.g. an SVG document string).
///
/// See the [`svg`] module for the built-in SVG implementation.
pub trait Exporter {
    /// Exports a composed scene to the backend's output format.
    ///
    /// A [`Scene`] contains abstract draw commands organized into rendering
    /// layers, with absolute coordinates ready for output.
    ///
    /// # Arguments
    ///
    /// * `scene` - The composed scene to export.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if the backend streams through an
    /// external sink and that fails.
    fn export_scene(&mut self, scene: &Scene) -> Result<String, Error>;
}

/// Errors that can occur during scene export.
///
/// This type is converted into [`ChordwheelError::Export`] at the crate
/// boundary via the [`From`] implementation in the crate error module.
///
/// [`ChordwheelError::Export`]: crate::ChordwheelError::Export
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by the message.
    #[error("Render error: {0}")]
    Render(String),

    /// An I/O error encountered while producing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
