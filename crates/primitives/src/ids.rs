use std::fmt;

/// Stable handle for an anchor element in the host document.
///
/// The host assigns these when it reports elements through the mutation feed;
/// the engine never dereferences them, it only compares and routes by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub u64);

impl fmt::Display for LinkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "link#{}", self.0)
	}
}
