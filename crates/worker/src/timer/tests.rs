use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::DelayedAction;

async fn settle() {
	for _ in 0..4 {
		tokio::task::yield_now().await;
	}
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn action_runs_after_delay() {
	let fired = Arc::new(AtomicUsize::new(0));
	let f = fired.clone();
	let _timer = DelayedAction::schedule(Duration::from_millis(1000), move || {
		f.fetch_add(1, Ordering::SeqCst);
	});
	settle().await;

	tokio::time::advance(Duration::from_millis(999)).await;
	settle().await;
	assert_eq!(fired.load(Ordering::SeqCst), 0);

	tokio::time::advance(Duration::from_millis(2)).await;
	settle().await;
	assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn cancel_prevents_action() {
	let fired = Arc::new(AtomicUsize::new(0));
	let f = fired.clone();
	let timer = DelayedAction::schedule(Duration::from_millis(500), move || {
		f.fetch_add(1, Ordering::SeqCst);
	});
	settle().await;
	timer.cancel();

	tokio::time::advance(Duration::from_secs(2)).await;
	settle().await;
	assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn dropping_handle_cancels_action() {
	let fired = Arc::new(AtomicUsize::new(0));
	let f = fired.clone();
	let timer = DelayedAction::schedule(Duration::from_millis(500), move || {
		f.fetch_add(1, Ordering::SeqCst);
	});
	drop(timer);

	tokio::time::advance(Duration::from_secs(2)).await;
	settle().await;
	assert_eq!(fired.load(Ordering::SeqCst), 0);
}
