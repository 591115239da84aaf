//! Episode library: the on-disk audio files podbay renders as cards.
//!
//! `library::scan` walks a directory and reads tags via `lofty`; the
//! resulting `Episode` list is what the UI and the audio engine index into.

mod model;
mod scan;

pub use model::*;
pub use scan::*;
