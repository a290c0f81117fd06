mod address_set;
mod index;
mod label_trie;

pub use index::ScopeIndex;

use serde::{Deserialize, Serialize};

use crate::errors::ScopeError;
use address_set::normalize_entry;

/// Mutable scope builder for the ingestion phase. Holds domains, addresses,
/// and blacklist entries exactly as the operator supplied them, deduplicated
/// case-insensitively on insert. Consumed by [`Scope::compile`] into the
/// immutable [`ScopeIndex`] before concurrent querying begins.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Scope {
    /// Domain names supplied as enumeration starting points
    #[serde(default, alias = "domains")]
    pub provided_names: Vec<String>,

    /// Normalized textual IP addresses and CIDR blocks
    #[serde(default)]
    pub addresses: Vec<String>,

    /// Names excluded from scope even when a root domain matches
    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a domain unless an equal name (ignoring ASCII case) is already
    /// present. Re-adding is a no-op.
    pub fn add_domain(&mut self, name: &str) {
        push_unique(&mut self.provided_names, name);
    }

    /// [`Scope::add_domain`] applied to each entry. Calling repeatedly with
    /// overlapping lists yields the same scope as one call with the union.
    pub fn add_domains<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_domain(name.as_ref());
        }
    }

    pub fn add_blacklist_entry(&mut self, name: &str) {
        push_unique(&mut self.blacklist, name);
    }

    /// Parse and normalize raw address entries (plain IPs, CIDR blocks, and
    /// IPv4 dash ranges), appending the canonical forms to `addresses`.
    /// Operator input is trusted data, so malformed entries are an error
    /// rather than silently dropped.
    pub fn add_addresses<I, S>(&mut self, entries: I) -> Result<(), ScopeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            for canonical in normalize_entry(entry.as_ref())? {
                push_unique(&mut self.addresses, &canonical);
            }
        }
        Ok(())
    }

    /// Re-normalize `addresses` in place. Used after fields were populated
    /// directly (deserialization) rather than through [`Scope::add_addresses`].
    pub fn normalize_addresses(&mut self) -> Result<(), ScopeError> {
        let raw = std::mem::take(&mut self.addresses);
        self.add_addresses(raw.iter().map(String::as_str))
    }

    /// Freeze this scope into the immutable, lock-free query index.
    pub fn compile(self) -> ScopeIndex {
        ScopeIndex::build(self)
    }
}

fn push_unique(list: &mut Vec<String>, entry: &str) {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return;
    }
    if !list.iter().any(|e| e.eq_ignore_ascii_case(trimmed)) {
        list.push(trimmed.to_string());
    }
}
