/// Side effects a panel asks of the host page.
pub trait HostActions: Send + Sync {
	/// Copies `text` to the clipboard.
	fn copy_text(&self, text: &str);

	/// Opens `url` in a new tab, without an opener.
	fn open_url(&self, url: &str);
}

/// Host actions that only log. Useful where no page is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActions;

impl HostActions for LoggingActions {
	fn copy_text(&self, text: &str) {
		tracing::debug!(len = text.len(), "copy text requested");
	}

	fn open_url(&self, url: &str) {
		tracing::debug!(url, "open url requested");
	}
}
