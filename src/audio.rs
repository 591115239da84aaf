//! Audio engine: a dedicated rodio thread plus the handles to talk to it.
//!
//! The engine receives commands over a channel, publishes progress into a
//! shared [`PlaybackInfo`] and remembers a resume position per episode so a
//! card paused in favor of another picks up where it left off.

mod engine;
mod sink;
mod thread;
mod types;

pub use engine::*;
pub use types::*;

#[cfg(test)]
mod tests;
