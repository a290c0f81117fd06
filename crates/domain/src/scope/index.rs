use compact_str::CompactString;
use regex::Regex;
use rustc_hash::FxBuildHasher;
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::Arc;

use super::address_set::AddressSet;
use super::label_trie::DomainTrie;
use super::Scope;
use crate::errors::ScopeError;

/// Immutable scope snapshot queried concurrently by discovery workers. All
/// queries are total: malformed candidate input yields `false`, never an
/// error, since candidates arrive from untrusted discovery data.
pub struct ScopeIndex {
    roots: Vec<Arc<str>>,
    exact: HashMap<CompactString, u32, FxBuildHasher>,
    tree: DomainTrie,
    blacklist_exact: HashSet<CompactString, FxBuildHasher>,
    blacklist_tree: DomainTrie,
    addresses: AddressSet,
}

impl ScopeIndex {
    pub(crate) fn build(scope: Scope) -> Self {
        let mut roots: Vec<Arc<str>> = Vec::with_capacity(scope.provided_names.len());
        let mut exact: HashMap<CompactString, u32, FxBuildHasher> =
            HashMap::with_capacity_and_hasher(scope.provided_names.len(), FxBuildHasher);
        let mut tree = DomainTrie::new();

        for name in &scope.provided_names {
            let Some(lowered) = normalize_name(name) else {
                continue;
            };
            let id = roots.len() as u32;
            roots.push(Arc::from(name.as_str()));
            exact.insert(CompactString::new(&lowered), id);
            // Path-qualified entries are matched verbatim only; they do not
            // participate in the domain hierarchy.
            if !lowered.contains('/') {
                tree.insert(&lowered, id);
            }
        }

        let mut blacklist_exact: HashSet<CompactString, FxBuildHasher> =
            HashSet::with_capacity_and_hasher(scope.blacklist.len(), FxBuildHasher);
        let mut blacklist_tree = DomainTrie::new();

        for (id, entry) in scope.blacklist.iter().enumerate() {
            let Some(lowered) = normalize_name(entry) else {
                continue;
            };
            blacklist_exact.insert(CompactString::new(&lowered));
            if !lowered.contains('/') {
                blacklist_tree.insert(&lowered, id as u32);
            }
        }

        let addresses = AddressSet::from_entries(scope.addresses.iter().map(String::as_str));

        Self {
            roots,
            exact,
            tree,
            blacklist_exact,
            blacklist_tree,
            addresses,
        }
    }

    /// True iff `candidate` equals, or is a label-boundary-safe subdomain of,
    /// a provided domain.
    #[inline]
    pub fn is_domain_in_scope(&self, candidate: &str) -> bool {
        self.matching_root(candidate).is_some()
    }

    /// The provided entry that `candidate` matched, used to attribute a
    /// finding to its root target. The most specific entry wins when several
    /// match.
    pub fn which_domain(&self, candidate: &str) -> Option<Arc<str>> {
        self.matching_root(candidate)
            .map(|id| Arc::clone(&self.roots[id as usize]))
    }

    /// The deduplicated provided names, in insertion order.
    pub fn domains(&self) -> Vec<Arc<str>> {
        self.roots.iter().map(Arc::clone).collect()
    }

    /// True iff `candidate` parses as an IP address that equals a stored
    /// address or falls within a stored block.
    #[inline]
    pub fn is_address_in_scope(&self, candidate: &str) -> bool {
        match candidate.trim().parse::<IpAddr>() {
            Ok(ip) => self.addresses.contains(ip),
            Err(_) => false,
        }
    }

    /// True iff `candidate` equals or is a subdomain of a blacklist entry.
    /// Evaluated independently of positive matching; callers consult both.
    #[inline]
    pub fn blacklisted(&self, candidate: &str) -> bool {
        let Some(lowered) = normalize_name(candidate) else {
            return false;
        };
        self.blacklist_exact.contains(lowered.as_str())
            || self.blacklist_tree.lookup(&lowered).is_some()
    }

    /// A compiled matcher recognizing `domain` and any of its subdomains,
    /// anchored and case-insensitive. Fails when `domain` is syntactically
    /// invalid or not tracked in this scope.
    pub fn domain_regex(&self, domain: &str) -> Result<Regex, ScopeError> {
        let lowered = normalize_name(domain)
            .ok_or_else(|| ScopeError::MalformedDomain(domain.to_string()))?;
        if !is_valid_domain(&lowered) || !self.is_domain_in_scope(&lowered) {
            return Err(ScopeError::MalformedDomain(domain.to_string()));
        }

        let pattern = format!(
            r"(?i)^([_a-z0-9](?:[_a-z0-9-]{{0,61}}[a-z0-9])?\.)*{}$",
            regex::escape(&lowered)
        );
        Regex::new(&pattern).map_err(|_| ScopeError::MalformedDomain(domain.to_string()))
    }

    #[inline]
    fn matching_root(&self, candidate: &str) -> Option<u32> {
        let lowered = normalize_name(candidate)?;
        if let Some(&id) = self.exact.get(lowered.as_str()) {
            return Some(id);
        }
        self.tree.lookup(&lowered)
    }
}

fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

fn is_valid_domain(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
    })
}
