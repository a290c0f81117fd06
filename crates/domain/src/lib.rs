//! Scopegate Domain Layer
pub mod config;
pub mod errors;
pub mod scope;

pub use config::{Config, ConfigError, DefaultWordlists, SettingsValidator};
pub use errors::ScopeError;
pub use scope::{Scope, ScopeIndex};
