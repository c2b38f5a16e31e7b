use std::collections::BTreeMap;

use glimpse_primitives::LinkId;

/// Class of the chat message container. Only beatmap links inside it count.
pub const CHAT_CONTAINER_CLASS: &str = "stream-chat";

/// Id of the upload notification. Links inside it are never previewed.
pub const NOTIFICATION_ID: &str = "twitchtweaks-notification";

/// One node of the host document, as reported by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub id: LinkId,
	pub tag: String,
	pub attrs: BTreeMap<String, String>,
	pub children: Vec<Element>,
}

impl Element {
	pub fn new(id: LinkId, tag: impl Into<String>) -> Self {
		Self {
			id,
			tag: tag.into(),
			attrs: BTreeMap::new(),
			children: Vec::new(),
		}
	}

	/// Anchor element pointing at `href`.
	pub fn anchor(id: LinkId, href: impl Into<String>) -> Self {
		Self::new(id, "a").with_attr("href", href)
	}

	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	pub fn with_child(mut self, child: Element) -> Self {
		self.children.push(child);
		self
	}

	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.attr("class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
	}

	/// The `href` of an anchor element.
	pub fn href(&self) -> Option<&str> {
		self.tag.eq_ignore_ascii_case("a").then(|| self.attr("href")).flatten()
	}
}

/// A node added to the document together with what its ancestors imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedNode {
	pub node: Element,
	/// Some ancestor is the chat container.
	pub in_chat: bool,
	/// Some ancestor is the upload notification.
	pub in_notification: bool,
}

impl AddedNode {
	/// A node with no relevant ancestors.
	pub fn detached(node: Element) -> Self {
		Self {
			node,
			in_chat: false,
			in_notification: false,
		}
	}

	pub fn in_chat(node: Element) -> Self {
		Self {
			node,
			in_chat: true,
			in_notification: false,
		}
	}
}

/// An anchor found in an added subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
	pub link: LinkId,
	pub href: String,
	pub in_chat: bool,
	pub in_notification: bool,
}

/// Collects the anchors of `added` and its descendants in document order.
pub fn extract_links(added: &AddedNode) -> Vec<LinkCandidate> {
	let mut out = Vec::new();
	walk(&added.node, added.in_chat, added.in_notification, &mut out);
	out
}

fn walk(element: &Element, in_chat: bool, in_notification: bool, out: &mut Vec<LinkCandidate>) {
	let in_chat = in_chat || element.has_class(CHAT_CONTAINER_CLASS);
	let in_notification = in_notification || element.attr("id") == Some(NOTIFICATION_ID);

	if let Some(href) = element.href().filter(|h| !h.is_empty()) {
		out.push(LinkCandidate {
			link: element.id,
			href: href.to_string(),
			in_chat,
			in_notification,
		});
	}
	for child in &element.children {
		walk(child, in_chat, in_notification, out);
	}
}

#[cfg(test)]
mod tests;
