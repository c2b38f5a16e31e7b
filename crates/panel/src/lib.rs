//! Floating preview panels.
//!
//! Hosts render panels through the [`Panel`] capability trait and report
//! pointer interaction back to a [`PanelLifecycleManager`], which decides
//! when panels appear and when they go away. Layout and pin state persist per
//! panel kind in the session store.

mod actions;
mod content;
mod hide;
mod loader;
mod manager;
mod panel;
mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use actions::{HostActions, LoggingActions};
pub use content::{BeatmapCard, PanelContent, StatusBadge};
pub use hide::HideTimer;
pub use loader::{ClassifierLoader, ContentLoader};
pub use manager::{ManagerConfig, ManagerDeps, PanelLifecycleManager, PanelPart, Phase};
pub use panel::{Panel, PanelFactory};
pub use settings::{FixedSettings, Settings, SettingsProvider, StoredSettings};
