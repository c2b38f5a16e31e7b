//! Shared task primitives for the preview engine.
//!
//! Everything asynchronous in the engine is spawned through this crate so that
//! tasks carry a [`TaskClass`] in their trace output, stale results can be
//! rejected through a [`GenerationClock`], and hide timers are real
//! cancellable [`DelayedAction`]s.

mod class;
mod join_set;
mod spawn;
mod timer;
mod token;

pub use class::TaskClass;
pub use join_set::WorkerJoinSet;
pub use spawn::spawn;
pub use timer::DelayedAction;
pub use token::{Generation, GenerationClock};
