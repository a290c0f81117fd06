use scopegate_domain::{Config, ScopeError, ScopeIndex, SettingsValidator};
use std::sync::Arc;
use tracing::info;

use crate::ports::ScopeFilterPort;

/// The validated, frozen per-session scope. `prepare` consumes the mutable
/// configuration, so no ingestion-phase mutation can leak into the concurrent
/// query phase. Handles are cheap to clone and shared across workers.
#[derive(Clone)]
pub struct SessionScope {
    config: Arc<Config>,
    index: Arc<ScopeIndex>,
}

impl SessionScope {
    /// Validate with the built-in default word lists, then freeze.
    pub fn prepare(config: Config) -> Result<Self, ScopeError> {
        Self::prepare_with(config, &SettingsValidator::default())
    }

    /// Validate with an injected validator, normalize addresses, and compile
    /// the immutable query index. On failure the configuration is unusable
    /// and session startup must abort.
    pub fn prepare_with(
        mut config: Config,
        validator: &SettingsValidator,
    ) -> Result<Self, ScopeError> {
        validator.check(&mut config)?;
        config.scope.normalize_addresses()?;

        let index = config.scope.clone().compile();
        info!(
            domains = config.scope.provided_names.len(),
            addresses = config.scope.addresses.len(),
            blacklist = config.scope.blacklist.len(),
            "Scope compiled"
        );

        Ok(Self {
            config: Arc::new(config),
            index: Arc::new(index),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> Arc<ScopeIndex> {
        Arc::clone(&self.index)
    }
}

impl ScopeFilterPort for SessionScope {
    #[inline]
    fn is_domain_in_scope(&self, candidate: &str) -> bool {
        self.index.is_domain_in_scope(candidate)
    }

    fn which_domain(&self, candidate: &str) -> Option<Arc<str>> {
        self.index.which_domain(candidate)
    }

    #[inline]
    fn is_address_in_scope(&self, candidate: &str) -> bool {
        self.index.is_address_in_scope(candidate)
    }

    #[inline]
    fn blacklisted(&self, candidate: &str) -> bool {
        self.index.blacklisted(candidate)
    }

    fn domains(&self) -> Vec<Arc<str>> {
        self.index.domains()
    }
}
