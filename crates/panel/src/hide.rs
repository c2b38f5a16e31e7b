use std::time::Duration;

use glimpse_worker::DelayedAction;

/// Auto-hide countdown of a displayed panel.
///
/// Each arming carries a generation. The expiry callback must pass it back
/// through [`HideTimer::fire`], which only succeeds for the latest arming, so
/// a timer that expires concurrently with its cancellation does nothing.
#[derive(Debug, Default)]
pub struct HideTimer {
	pending: Option<DelayedAction>,
	generation: u64,
}

impl HideTimer {
	/// Restarts the countdown. `on_expire` receives this arming's generation.
	pub fn arm<F>(&mut self, delay: Duration, on_expire: F)
	where
		F: FnOnce(u64) + Send + 'static,
	{
		self.cancel();
		let generation = self.generation;
		self.pending = Some(DelayedAction::schedule(delay, move || on_expire(generation)));
	}

	pub fn cancel(&mut self) {
		self.generation += 1;
		if let Some(action) = self.pending.take() {
			action.cancel();
		}
	}

	pub fn is_armed(&self) -> bool {
		self.pending.is_some()
	}

	/// Disarms and returns true if `generation` is the current arming.
	pub fn fire(&mut self, generation: u64) -> bool {
		if self.pending.is_none() || self.generation != generation {
			return false;
		}
		// Dropping the handle from inside its own task is harmless: the
		// callback is synchronous and already running.
		self.pending = None;
		true
	}
}
