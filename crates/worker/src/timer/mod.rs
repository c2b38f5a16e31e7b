use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{TaskClass, spawn};

/// A cancellable action scheduled to run once after a delay.
///
/// Dropping the handle cancels the action, so an owner that replaces or clears
/// its timer field never leaves a detached callback behind.
#[derive(Debug)]
pub struct DelayedAction {
	handle: JoinHandle<()>,
}

impl DelayedAction {
	/// Runs `action` after `delay` on the timer task class.
	pub fn schedule<F>(delay: Duration, action: F) -> Self
	where
		F: FnOnce() + Send + 'static,
	{
		let handle = spawn(TaskClass::Timer, async move {
			tokio::time::sleep(delay).await;
			action();
		});
		Self { handle }
	}

	/// Cancels the action if it has not run yet.
	pub fn cancel(self) {
		self.handle.abort();
	}

	/// Returns true once the action has run or been cancelled.
	pub fn is_finished(&self) -> bool {
		self.handle.is_finished()
	}
}

impl Drop for DelayedAction {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

#[cfg(test)]
mod tests;
