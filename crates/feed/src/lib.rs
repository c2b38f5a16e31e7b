//! Mutation feed adapter.
//!
//! The host reports its document through [`FeedEvent`]s: one
//! [`FeedEvent::Ready`] carrying the content present at startup, then
//! [`FeedEvent::Batch`]es of nodes added afterwards. The adapter extracts
//! candidate links from those nodes, remembers which links were already
//! handled, and owns the hover-trigger subscriptions attached to them.

mod element;
mod feed;
mod marker;
mod trigger;

pub use element::{AddedNode, CHAT_CONTAINER_CLASS, Element, LinkCandidate, NOTIFICATION_ID, extract_links};
pub use feed::{FeedEvent, FeedSender, MutationFeed};
pub use marker::ProcessedLinks;
pub use trigger::{TriggerRegistry, TriggerSubscription};
