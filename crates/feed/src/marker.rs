use std::collections::HashSet;

use glimpse_primitives::LinkId;
use parking_lot::Mutex;

/// Per-link processed marker. Each link is handled at most once.
#[derive(Debug, Default)]
pub struct ProcessedLinks {
	seen: Mutex<HashSet<LinkId>>,
}

impl ProcessedLinks {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks `link`, returning true if it was not marked before.
	pub fn mark(&self, link: LinkId) -> bool {
		self.seen.lock().insert(link)
	}

	pub fn is_marked(&self, link: LinkId) -> bool {
		self.seen.lock().contains(&link)
	}

	/// Clears the marker of a link that left the document.
	pub fn forget(&self, link: LinkId) {
		self.seen.lock().remove(&link);
	}

	pub fn len(&self) -> usize {
		self.seen.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.seen.lock().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn marks_once() {
		let marks = ProcessedLinks::new();
		assert!(marks.mark(LinkId(1)));
		assert!(!marks.mark(LinkId(1)));
		assert!(marks.is_marked(LinkId(1)));

		marks.forget(LinkId(1));
		assert!(marks.mark(LinkId(1)));
	}
}
