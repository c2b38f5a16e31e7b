use std::collections::VecDeque;

use glimpse_primitives::LinkId;
use tokio::sync::mpsc;

use crate::element::AddedNode;

/// What the host reports about its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
	/// Nodes added since the last batch.
	Batch { added: Vec<AddedNode> },
	/// Anchors that left the document.
	Removed { links: Vec<LinkId> },
	/// The document has settled; `existing` is everything present at startup.
	Ready { existing: Vec<AddedNode> },
}

/// Host side of the feed.
#[derive(Debug, Clone)]
pub struct FeedSender {
	tx: mpsc::UnboundedSender<FeedEvent>,
}

impl FeedSender {
	/// Reports added nodes. Returns false once the engine side is gone.
	pub fn push_batch(&self, added: Vec<AddedNode>) -> bool {
		if added.is_empty() {
			return true;
		}
		self.tx.send(FeedEvent::Batch { added }).is_ok()
	}

	/// Reports anchors removed from the document.
	pub fn push_removed(&self, links: Vec<LinkId>) -> bool {
		if links.is_empty() {
			return true;
		}
		self.tx.send(FeedEvent::Removed { links }).is_ok()
	}

	/// Signals readiness with the startup content.
	pub fn ready(&self, existing: Vec<AddedNode>) -> bool {
		self.tx.send(FeedEvent::Ready { existing }).is_ok()
	}
}

/// Engine side of the feed.
///
/// Batches and removals that arrive before [`FeedEvent::Ready`] are held back and
/// delivered right after it, so startup content is always processed first.
#[derive(Debug)]
pub struct MutationFeed {
	rx: mpsc::UnboundedReceiver<FeedEvent>,
	ready: bool,
	held: VecDeque<FeedEvent>,
}

impl MutationFeed {
	pub fn channel() -> (FeedSender, MutationFeed) {
		let (tx, rx) = mpsc::unbounded_channel();
		(
			FeedSender { tx },
			MutationFeed {
				rx,
				ready: false,
				held: VecDeque::new(),
			},
		)
	}

	pub fn is_ready(&self) -> bool {
		self.ready
	}

	/// Next event in delivery order, or `None` once every sender is dropped.
	///
	/// Batches still held when the senders go away without a readiness signal
	/// are delivered anyway.
	pub async fn next(&mut self) -> Option<FeedEvent> {
		if self.ready
			&& let Some(event) = self.held.pop_front()
		{
			return Some(event);
		}
		loop {
			match self.rx.recv().await {
				Some(event @ FeedEvent::Ready { .. }) => {
					if self.ready {
						tracing::debug!("duplicate readiness signal");
					}
					self.ready = true;
					return Some(event);
				}
				Some(batch) if self.ready => return Some(batch),
				Some(batch) => self.held.push_back(batch),
				None => {
					self.ready = true;
					return self.held.pop_front();
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::element::Element;

	fn node(n: u64) -> AddedNode {
		AddedNode::detached(Element::anchor(LinkId(n), format!("https://example.com/{n}.png")))
	}

	#[tokio::test]
	async fn holds_batches_until_ready() {
		let (tx, mut feed) = MutationFeed::channel();
		assert!(tx.push_batch(vec![node(2)]));
		assert!(tx.ready(vec![node(1)]));
		assert!(tx.push_batch(vec![node(3)]));
		assert!(tx.push_removed(vec![LinkId(2)]));
		drop(tx);

		assert_eq!(feed.next().await, Some(FeedEvent::Ready { existing: vec![node(1)] }));
		assert!(feed.is_ready());
		assert_eq!(feed.next().await, Some(FeedEvent::Batch { added: vec![node(2)] }));
		assert_eq!(feed.next().await, Some(FeedEvent::Batch { added: vec![node(3)] }));
		assert_eq!(feed.next().await, Some(FeedEvent::Removed { links: vec![LinkId(2)] }));
		assert_eq!(feed.next().await, None);
	}

	#[tokio::test]
	async fn flushes_held_batches_when_host_goes_away() {
		let (tx, mut feed) = MutationFeed::channel();
		tx.push_batch(vec![node(1)]);
		drop(tx);

		assert_eq!(feed.next().await, Some(FeedEvent::Batch { added: vec![node(1)] }));
		assert_eq!(feed.next().await, None);
	}

	#[tokio::test]
	async fn empty_batches_are_not_sent() {
		let (tx, mut feed) = MutationFeed::channel();
		tx.ready(Vec::new());
		tx.push_batch(Vec::new());
		drop(tx);

		assert_eq!(feed.next().await, Some(FeedEvent::Ready { existing: Vec::new() }));
		assert_eq!(feed.next().await, None);
	}
}
