//! Terminal display module
//!
//! Formats task listings, coloring the status label on interactive terminals.

mod formatter;

pub use formatter::Palette;
