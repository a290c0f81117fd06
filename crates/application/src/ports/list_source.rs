use async_trait::async_trait;
use scopegate_domain::ConfigError;

/// A finite, restartable list resource used to hydrate word lists and domain
/// lists. Each call to `load` re-reads the underlying resource and yields
/// trimmed, non-empty, non-comment lines.
#[async_trait]
pub trait ListSourcePort: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, ConfigError>;
}
