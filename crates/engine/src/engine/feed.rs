//! Feed processing: turning added links into triggers or inline embeds.

use std::sync::Arc;

use glimpse_classifier::{ClassifyScope, rules};
use glimpse_feed::{AddedNode, FeedEvent, LinkCandidate, MutationFeed, extract_links};
use glimpse_osu::BeatmapRef;
use glimpse_panel::Settings;
use glimpse_primitives::{ContentKind, LinkId, PanelKind, PreviewLocation};
use glimpse_worker::{TaskClass, WorkerJoinSet};
use tokio::task::JoinHandle;

use super::{Engine, Inner, TrackedLink};
use crate::inline::InlineEmbed;

const ALL_KINDS: [PanelKind; 3] = [PanelKind::Media, PanelKind::Text, PanelKind::Beatmap];

/// What a candidate link ended up as.
#[derive(Debug)]
enum Outcome {
	Triggers(Vec<PanelKind>),
	Embedded(InlineEmbed),
	Untouched,
}

impl Engine {
	/// Consumes `feed` until every sender is gone.
	///
	/// Batches are marked in arrival order but classified concurrently, so a
	/// slow probe only delays its own batch. Returns once every outstanding
	/// batch has been applied.
	pub async fn run(&self, mut feed: MutationFeed) {
		let mut outstanding = Vec::new();
		while let Some(event) = feed.next().await {
			outstanding.retain(|batch: &JoinHandle<()>| !batch.is_finished());
			outstanding.extend(self.begin_event(event));
		}
		for batch in outstanding {
			if let Err(error) = batch.await {
				tracing::warn!(%error, "feed batch failed");
			}
		}
		tracing::debug!("mutation feed closed");
	}

	/// Processes one feed event to completion.
	pub async fn handle_feed_event(&self, event: FeedEvent) {
		if let Some(batch) = self.begin_event(event)
			&& let Err(error) = batch.await
		{
			tracing::warn!(%error, "feed batch failed");
		}
	}

	fn begin_event(&self, event: FeedEvent) -> Option<JoinHandle<()>> {
		match event {
			FeedEvent::Ready { existing } => {
				tracing::debug!(nodes = existing.len(), "feed ready");
				self.begin_batch(&existing)
			}
			FeedEvent::Batch { added } => self.begin_batch(&added),
			FeedEvent::Removed { links } => {
				self.forget_links(&links);
				None
			}
		}
	}

	/// Marks the new links synchronously and classifies them on a
	/// background task.
	fn begin_batch(&self, nodes: &[AddedNode]) -> Option<JoinHandle<()>> {
		let candidates: Vec<LinkCandidate> = nodes
			.iter()
			.flat_map(extract_links)
			.filter(|c| self.inner.processed.mark(c.link))
			.collect();
		if candidates.is_empty() {
			return None;
		}
		let inner = self.inner.clone();
		Some(glimpse_worker::spawn(TaskClass::Background, async move {
			inner.process_batch(candidates).await;
		}))
	}

	fn forget_links(&self, links: &[LinkId]) {
		{
			let mut tracked = self.inner.links.lock();
			let mut embedded = self.inner.embedded.lock();
			for link in links {
				self.inner.processed.forget(*link);
				tracked.remove(link);
				embedded.remove(link);
			}
		}
		for link in links {
			self.inner.media.link_removed(*link);
			self.inner.text_panel.link_removed(*link);
			self.inner.osu.link_removed(*link);
		}
		tracing::debug!(count = links.len(), "links removed");
	}
}

impl Inner {
	async fn process_batch(self: Arc<Self>, candidates: Vec<LinkCandidate>) {
		let settings = self.settings.get(&ALL_KINDS).await;
		let mut tasks = WorkerJoinSet::new(TaskClass::Background);
		for candidate in candidates {
			let inner = self.clone();
			tasks.spawn(async move {
				let outcome = inner.resolve_candidate(&candidate, settings).await;
				(candidate, outcome)
			});
		}
		for (candidate, outcome) in tasks.join_all().await {
			self.apply(candidate, outcome);
		}
	}

	async fn resolve_candidate(&self, candidate: &LinkCandidate, settings: Settings) -> Outcome {
		let href = candidate.href.as_str();
		let mut kinds = Vec::new();

		if settings.osu == PreviewLocation::Panel && candidate.in_chat && BeatmapRef::parse(href).is_some() {
			kinds.push(PanelKind::Beatmap);
		}

		match settings.image {
			PreviewLocation::Panel => {
				if self.classifier.classify(href, ClassifyScope::Media).await.is_media() {
					kinds.push(PanelKind::Media);
				}
			}
			PreviewLocation::Chat if !candidate.in_notification => {
				if let Some(embed) = media_embed(href) {
					return Outcome::Embedded(embed);
				}
			}
			PreviewLocation::Chat | PreviewLocation::Disabled => {}
		}

		match settings.text {
			PreviewLocation::Panel => {
				if self.classifier.classify(href, ClassifyScope::Text).await == ContentKind::Text {
					kinds.push(PanelKind::Text);
				}
			}
			PreviewLocation::Chat if !candidate.in_notification && rules::is_text_href(href) => match self.text.get_or_load(href).await {
				Ok(text) => {
					return Outcome::Embedded(InlineEmbed::Text {
						url: href.to_string(),
						text,
					});
				}
				Err(error) => tracing::warn!(url = href, %error, "inline text fetch failed"),
			},
			PreviewLocation::Chat | PreviewLocation::Disabled => {}
		}

		if kinds.is_empty() {
			Outcome::Untouched
		} else {
			Outcome::Triggers(kinds)
		}
	}

	fn apply(&self, candidate: LinkCandidate, outcome: Outcome) {
		let link = candidate.link;
		if !self.processed.is_marked(link) {
			tracing::trace!(%link, "link removed before classification finished");
			return;
		}
		match outcome {
			Outcome::Triggers(kinds) => {
				tracing::debug!(%link, ?kinds, "hover triggers attached");
				let triggers = kinds.into_iter().map(|kind| self.triggers.attach(link, kind)).collect();
				self.links.lock().insert(
					link,
					TrackedLink {
						href: candidate.href,
						in_chat: candidate.in_chat,
						_triggers: triggers,
					},
				);
			}
			Outcome::Embedded(embed) => {
				tracing::debug!(%link, url = embed.url(), "link embedded inline");
				self.embedded.lock().insert(link, embed.clone());
				self.embedder.embed(link, embed);
			}
			Outcome::Untouched => tracing::trace!(%link, "link left untouched"),
		}
	}
}

fn media_embed(href: &str) -> Option<InlineEmbed> {
	let url = href.to_string();
	match rules::media_kind(&rules::parse(href)?)? {
		ContentKind::Image => Some(InlineEmbed::Image { url }),
		ContentKind::Video => Some(InlineEmbed::Video { url }),
		ContentKind::Text | ContentKind::Other => None,
	}
}
