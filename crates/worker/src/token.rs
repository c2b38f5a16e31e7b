use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque request generation. Two generations compare equal only if they were
/// issued by the same [`GenerationClock::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
	pub const fn get(self) -> u64 {
		self.0
	}
}

/// Monotonic generation clock used to reject stale async results.
///
/// Every new request advances the clock; a completing task compares the
/// generation it captured against [`GenerationClock::current`] and drops its
/// result on mismatch.
#[derive(Debug, Default, Clone)]
pub struct GenerationClock {
	current: Arc<AtomicU64>,
}

impl GenerationClock {
	/// Creates a clock at generation 0. The first advance yields generation 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a new generation, invalidating all earlier ones.
	pub fn advance(&self) -> Generation {
		Generation(self.current.fetch_add(1, Ordering::AcqRel).wrapping_add(1))
	}

	/// Returns the most recently issued generation.
	pub fn current(&self) -> Generation {
		Generation(self.current.load(Ordering::Acquire))
	}

	/// Returns true if `generation` is still the most recent one.
	pub fn is_current(&self, generation: Generation) -> bool {
		self.current() == generation
	}
}
