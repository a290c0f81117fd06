use super::defaults::{DefaultWordlists, BUILTIN};
use super::root::Config;
use crate::errors::ScopeError;

/// Single-pass consistency check over a [`Config`]: rejects mutually
/// exclusive mode flags and fills empty word lists required by an enabled
/// mode. Pure aside from the injected default lists.
pub struct SettingsValidator {
    defaults: DefaultWordlists,
}

impl SettingsValidator {
    pub fn new(defaults: DefaultWordlists) -> Self {
        Self { defaults }
    }

    pub fn check(&self, config: &mut Config) -> Result<(), ScopeError> {
        if config.brute_forcing && config.passive {
            return Err(ScopeError::ConflictingModes("brute-forcing", "passive"));
        }
        if config.active && config.passive {
            return Err(ScopeError::ConflictingModes("active", "passive"));
        }

        if config.brute_forcing && config.wordlist.is_empty() {
            config.wordlist = to_owned_list(self.defaults.brute_force);
        }
        if config.alterations && config.alt_wordlist.is_empty() {
            config.alt_wordlist = to_owned_list(self.defaults.alterations);
        }

        Ok(())
    }
}

impl Default for SettingsValidator {
    fn default() -> Self {
        Self::new(BUILTIN)
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
