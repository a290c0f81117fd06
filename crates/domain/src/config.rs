mod defaults;
mod errors;
mod root;
mod validator;

pub use defaults::DefaultWordlists;
pub use errors::ConfigError;
pub use root::Config;
pub use validator::SettingsValidator;
