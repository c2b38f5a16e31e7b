//! Hover preview engine.
//!
//! Links reported by the host's mutation feed are classified once, then
//! either get hover triggers that open floating panels or are replaced
//! inline, depending on the user's per-kind preview location.

pub mod config;
mod engine;
mod error;
mod events;
mod inline;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, EngineHost, EngineServices};
pub use error::EngineError;
pub use events::PanelAction;
pub use inline::{InlineEmbed, InlineEmbedder, NoInline};
