//! Scopegate Infrastructure Layer
pub mod settings;
pub mod wordlists;

pub use settings::TomlSettingsLoader;
pub use wordlists::{FileListSource, UrlListSource};
