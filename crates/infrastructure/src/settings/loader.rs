use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use scopegate_application::ports::SettingsSourcePort;
use scopegate_domain::{Config, ConfigError};

use crate::wordlists::{list_source_for, shared_client};

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    brute_forcing: bool,

    #[serde(default)]
    passive: bool,

    #[serde(default)]
    active: bool,

    #[serde(default)]
    alterations: bool,

    #[serde(default)]
    wordlist: Vec<String>,

    #[serde(default)]
    alt_wordlist: Vec<String>,

    /// Path or URL of a word list to hydrate `wordlist` from
    #[serde(default)]
    wordlist_file: Option<String>,

    /// Path or URL of a word list to hydrate `alt_wordlist` from
    #[serde(default)]
    alt_wordlist_file: Option<String>,

    #[serde(default)]
    scope: RawScope,
}

#[derive(Debug, Default, Deserialize)]
struct RawScope {
    #[serde(default)]
    domains: Vec<String>,

    #[serde(default)]
    addresses: Vec<String>,

    #[serde(default)]
    blacklist: Vec<String>,
}

/// Reads a TOML settings resource into a populated [`Config`], hydrating
/// word lists referenced by path or URL. Runs strictly before the concurrent
/// query phase; this is one of the two I/O boundaries of the core.
pub struct TomlSettingsLoader {
    client: reqwest::Client,
}

impl TomlSettingsLoader {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            client: shared_client()?,
        })
    }
}

#[async_trait]
impl SettingsSourcePort for TomlSettingsLoader {
    async fn load(&self, path: &str) -> Result<Config, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        let raw: RawSettings =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut config = Config::new();
        config.brute_forcing = raw.brute_forcing;
        config.passive = raw.passive;
        config.active = raw.active;
        config.alterations = raw.alterations;
        config.wordlist = raw.wordlist;
        config.alt_wordlist = raw.alt_wordlist;

        config.scope.add_domains(&raw.scope.domains);
        for entry in &raw.scope.blacklist {
            config.scope.add_blacklist_entry(entry);
        }
        config
            .scope
            .add_addresses(&raw.scope.addresses)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if let Some(resource) = &raw.wordlist_file {
            let resource = resolve_resource(path, resource);
            let lines = list_source_for(&resource, &self.client).load().await?;
            config.wordlist.extend(lines);
            info!(resource = %resource, words = config.wordlist.len(), "Hydrated wordlist");
        }
        if let Some(resource) = &raw.alt_wordlist_file {
            let resource = resolve_resource(path, resource);
            let lines = list_source_for(&resource, &self.client).load().await?;
            config.alt_wordlist.extend(lines);
            info!(resource = %resource, words = config.alt_wordlist.len(), "Hydrated alteration wordlist");
        }

        info!(
            path = %path,
            domains = config.scope.provided_names.len(),
            addresses = config.scope.addresses.len(),
            blacklist = config.scope.blacklist.len(),
            "Settings loaded"
        );

        Ok(config)
    }
}

/// Relative file resources are resolved against the settings file's
/// directory; URLs and absolute paths pass through unchanged.
fn resolve_resource(settings_path: &str, resource: &str) -> String {
    if resource.starts_with("http://") || resource.starts_with("https://") {
        return resource.to_string();
    }
    let resource_path = Path::new(resource);
    if resource_path.is_absolute() {
        return resource.to_string();
    }
    match Path::new(settings_path).parent() {
        Some(dir) => dir.join(resource_path).display().to_string(),
        None => resource.to_string(),
    }
}
