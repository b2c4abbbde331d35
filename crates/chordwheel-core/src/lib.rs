//! Chordwheel Core Types and Definitions
//!
//! This crate provides the foundational types for the chordwheel text
//! visualizer. It includes:
//!
//! - **Identifiers**: Interned category keys and opaque item ids ([`identifier`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Palettes**: Gradient color palettes with round-robin assignment ([`palette::ColorPalette`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Abstract draw commands grouped into layered scenes ([`draw`] module)
//!
//! Nothing in this crate performs I/O or talks to a rendering backend; the
//! [`draw::Scene`] command list is the boundary consumed by renderers.

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod palette;
