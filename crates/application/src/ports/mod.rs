mod list_source;
mod scope_filter;
mod settings_source;

pub use list_source::ListSourcePort;
pub use scope_filter::ScopeFilterPort;
pub use settings_source::SettingsSourcePort;
