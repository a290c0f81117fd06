use serde::{Deserialize, Serialize};

use super::validator::SettingsValidator;
use crate::errors::ScopeError;
use crate::scope::Scope;

/// Session configuration: operating-mode flags, word lists, and the
/// enumeration scope. Built during the single-threaded ingestion phase,
/// validated exactly once, then treated as read-only.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Brute-force subdomain guessing enabled
    #[serde(default)]
    pub brute_forcing: bool,

    /// Passive mode: data-source collection only, no direct contact
    #[serde(default)]
    pub passive: bool,

    /// Active mode: techniques that contact target infrastructure
    #[serde(default)]
    pub active: bool,

    /// Name alteration/permutation generation enabled
    #[serde(default)]
    pub alterations: bool,

    /// Words used for brute-forcing
    #[serde(default)]
    pub wordlist: Vec<String>,

    /// Words used for name alterations
    #[serde(default)]
    pub alt_wordlist: Vec<String>,

    /// Targets, addresses, and exclusions for this session
    #[serde(default)]
    pub scope: Scope,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate mode-flag consistency and fill required defaults using the
    /// built-in word lists. Must succeed before discovery starts.
    pub fn check_settings(&mut self) -> Result<(), ScopeError> {
        SettingsValidator::default().check(self)
    }

    pub fn add_domain(&mut self, name: &str) {
        self.scope.add_domain(name);
    }

    pub fn add_domains<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scope.add_domains(names);
    }
}
