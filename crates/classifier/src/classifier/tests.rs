use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use glimpse_primitives::ContentKind;
use glimpse_storage::{CacheConfig, KeyValueStore, MemoryStore};
use url::Url;

use super::*;

#[derive(Default)]
struct CountingProber {
	image: bool,
	video: bool,
	delay: Duration,
	image_calls: AtomicUsize,
	video_calls: AtomicUsize,
}

impl CountingProber {
	fn calls(&self) -> usize {
		self.image_calls.load(Ordering::SeqCst) + self.video_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Prober for CountingProber {
	async fn probe_image(&self, _url: &Url) -> bool {
		self.image_calls.fetch_add(1, Ordering::SeqCst);
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}
		self.image
	}

	async fn probe_video(&self, _url: &Url) -> bool {
		self.video_calls.fetch_add(1, Ordering::SeqCst);
		self.video
	}
}

fn classifier(prober: Arc<CountingProber>) -> (LinkClassifier, Arc<MemoryStore>) {
	let store = Arc::new(MemoryStore::new());
	let classifier = LinkClassifier::new(store.clone(), CacheConfig::default(), prober);
	(classifier, store)
}

#[tokio::test]
async fn syntactic_match_skips_probe() {
	let prober = Arc::new(CountingProber::default());
	let (classifier, _) = classifier(prober.clone());

	let kind = classifier.classify("https://example.com/a.gif", ClassifyScope::Media).await;
	assert_eq!(kind, ContentKind::Image);
	assert_eq!(prober.calls(), 0);
	assert_eq!(
		classifier.cached("https://example.com/a.gif", ClassifyScope::Media),
		Some(ContentKind::Image)
	);
}

#[tokio::test]
async fn probe_falls_back_to_video() {
	let prober = Arc::new(CountingProber {
		video: true,
		..Default::default()
	});
	let (classifier, _) = classifier(prober.clone());

	let kind = classifier.classify("https://cdn.example.com/stream", ClassifyScope::Media).await;
	assert_eq!(kind, ContentKind::Video);
	assert_eq!(prober.image_calls.load(Ordering::SeqCst), 1);
	assert_eq!(prober.video_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn negative_result_is_never_reprobed() {
	let prober = Arc::new(CountingProber::default());
	let (classifier, _) = classifier(prober.clone());
	let href = "https://twitch.tv/somechannel";

	assert_eq!(classifier.classify(href, ClassifyScope::Media).await, ContentKind::Other);
	assert_eq!(classifier.classify(href, ClassifyScope::Media).await, ContentKind::Other);
	assert_eq!(prober.calls(), 2, "one image and one video attempt in total");
}

#[tokio::test]
async fn negative_result_survives_reopen() {
	let prober = Arc::new(CountingProber::default());
	let (classifier, store) = classifier(prober.clone());
	let href = "https://twitch.tv/somechannel";
	classifier.classify(href, ClassifyScope::Media).await;

	let reopened = LinkClassifier::new(store as Arc<dyn KeyValueStore>, CacheConfig::default(), prober.clone());
	assert_eq!(reopened.classify(href, ClassifyScope::Media).await, ContentKind::Other);
	assert_eq!(prober.calls(), 2);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn concurrent_classifications_share_one_probe() {
	let prober = Arc::new(CountingProber {
		image: true,
		delay: Duration::from_millis(50),
		..Default::default()
	});
	let (classifier, _) = classifier(prober.clone());
	let href = "https://cdn.example.com/avatar";

	let (a, b) = tokio::join!(
		classifier.classify(href, ClassifyScope::Media),
		classifier.classify(href, ClassifyScope::Media),
	);
	assert_eq!(a, ContentKind::Image);
	assert_eq!(b, ContentKind::Image);
	assert_eq!(prober.image_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn text_scope_never_probes() {
	let prober = Arc::new(CountingProber {
		image: true,
		..Default::default()
	});
	let (classifier, _) = classifier(prober.clone());

	assert_eq!(
		classifier.classify("https://example.com/readme.md", ClassifyScope::Text).await,
		ContentKind::Text
	);
	assert_eq!(
		classifier.classify("https://example.com/page", ClassifyScope::Text).await,
		ContentKind::Other
	);
	assert_eq!(prober.calls(), 0);
}

#[tokio::test]
async fn scopes_use_separate_namespaces() {
	let prober = Arc::new(CountingProber::default());
	let (classifier, _) = classifier(prober);
	let href = "https://example.com/page";

	classifier.classify(href, ClassifyScope::Text).await;
	assert_eq!(classifier.cached(href, ClassifyScope::Text), Some(ContentKind::Other));
	assert_eq!(classifier.cached(href, ClassifyScope::Media), None);
}

#[tokio::test]
async fn malformed_url_is_other_and_uncached() {
	let prober = Arc::new(CountingProber::default());
	let (classifier, _) = classifier(prober.clone());

	assert_eq!(classifier.classify("not a url", ClassifyScope::Media).await, ContentKind::Other);
	assert_eq!(classifier.cached("not a url", ClassifyScope::Media), None);
	assert_eq!(prober.calls(), 0);
}
