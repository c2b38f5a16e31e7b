use std::future::Future;

use tokio::task::JoinSet;

use crate::TaskClass;
use crate::spawn::runtime_handle;

/// Fan-out of independent tasks of one class, collected together.
///
/// The engine spawns one task per candidate link of a feed batch and applies
/// the results once all of them have finished.
#[derive(Debug)]
pub struct WorkerJoinSet<T> {
	class: TaskClass,
	tasks: JoinSet<T>,
}

impl<T> WorkerJoinSet<T>
where
	T: Send + 'static,
{
	pub fn new(class: TaskClass) -> Self {
		Self {
			class,
			tasks: JoinSet::new(),
		}
	}

	/// Number of tasks not yet collected.
	pub fn pending(&self) -> usize {
		self.tasks.len()
	}

	pub fn spawn<F>(&mut self, fut: F)
	where
		F: Future<Output = T> + Send + 'static,
	{
		self.tasks.spawn_on(fut, &runtime_handle());
		tracing::trace!(worker_class = self.class.as_str(), pending = self.tasks.len(), "worker.join_set.spawn");
	}

	/// Waits for every task and returns the outputs in completion order.
	///
	/// A task that panicked is logged and contributes nothing.
	pub async fn join_all(mut self) -> Vec<T> {
		let mut done = Vec::with_capacity(self.tasks.len());
		while let Some(joined) = self.tasks.join_next().await {
			match joined {
				Ok(output) => done.push(output),
				Err(error) => tracing::warn!(worker_class = self.class.as_str(), %error, "worker task failed"),
			}
		}
		done
	}
}
