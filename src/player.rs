//! The episode player controller.
//!
//! This module owns the per-card UI state (toggle glyph, scrubber, elapsed
//! time label) and the single "currently audible" session reference, and
//! drives a playback backend through the [`Transport`] trait.

mod controller;
mod types;

pub use controller::*;
pub use types::*;

#[cfg(test)]
mod tests;
