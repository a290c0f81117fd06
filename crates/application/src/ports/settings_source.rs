use async_trait::async_trait;
use scopegate_domain::{Config, ConfigError};

/// Port for producing a populated [`Config`] from a settings resource.
#[async_trait]
pub trait SettingsSourcePort: Send + Sync {
    async fn load(&self, path: &str) -> Result<Config, ConfigError>;
}
