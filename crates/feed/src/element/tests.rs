use pretty_assertions::assert_eq;

use super::*;

fn id(n: u64) -> LinkId {
	LinkId(n)
}

#[test]
fn finds_anchor_node_itself() {
	let added = AddedNode::detached(Element::anchor(id(1), "https://example.com/a.png"));
	let links = extract_links(&added);
	assert_eq!(
		links,
		vec![LinkCandidate {
			link: id(1),
			href: "https://example.com/a.png".into(),
			in_chat: false,
			in_notification: false,
		}]
	);
}

#[test]
fn finds_descendant_anchors_in_order() {
	let message = Element::new(id(1), "div")
		.with_child(Element::anchor(id(2), "https://a.example/1"))
		.with_child(Element::new(id(3), "span").with_child(Element::anchor(id(4), "https://a.example/2")));
	let hrefs: Vec<_> = extract_links(&AddedNode::detached(message)).into_iter().map(|c| c.href).collect();
	assert_eq!(hrefs, vec!["https://a.example/1", "https://a.example/2"]);
}

#[test]
fn chat_container_marks_descendants() {
	let chat = Element::new(id(1), "section")
		.with_attr("class", "chat-room stream-chat")
		.with_child(Element::anchor(id(2), "https://osu.ppy.sh/beatmaps/1"));
	let links = extract_links(&AddedNode::detached(chat));
	assert!(links[0].in_chat);
}

#[test]
fn ancestor_context_is_inherited() {
	let added = AddedNode::in_chat(Element::anchor(id(5), "https://osu.ppy.sh/beatmaps/1"));
	assert!(extract_links(&added)[0].in_chat);
}

#[test]
fn notification_marks_descendants() {
	let banner = Element::new(id(1), "div")
		.with_attr("id", NOTIFICATION_ID)
		.with_child(Element::anchor(id(2), "https://files.example/upload.png"));
	let links = extract_links(&AddedNode::detached(banner));
	assert!(links[0].in_notification);
}

#[test]
fn ignores_non_anchors_and_empty_hrefs() {
	let node = Element::new(id(1), "div")
		.with_attr("href", "https://not-an-anchor.example")
		.with_child(Element::anchor(id(2), ""))
		.with_child(Element::new(id(3), "A").with_attr("href", "https://upper.example"));
	let links = extract_links(&AddedNode::detached(node));
	assert_eq!(links.len(), 1);
	assert_eq!(links[0].link, id(3));
}
