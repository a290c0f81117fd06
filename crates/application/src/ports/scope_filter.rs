use scopegate_domain::ScopeIndex;
use std::sync::Arc;

/// Query surface consumed by discovery workers. Every operation is total and
/// side-effect free: malformed candidates yield `false`, never an error.
pub trait ScopeFilterPort: Send + Sync {
    fn is_domain_in_scope(&self, candidate: &str) -> bool;
    fn which_domain(&self, candidate: &str) -> Option<Arc<str>>;
    fn is_address_in_scope(&self, candidate: &str) -> bool;
    fn blacklisted(&self, candidate: &str) -> bool;
    fn domains(&self) -> Vec<Arc<str>>;
}

impl ScopeFilterPort for ScopeIndex {
    #[inline]
    fn is_domain_in_scope(&self, candidate: &str) -> bool {
        ScopeIndex::is_domain_in_scope(self, candidate)
    }

    fn which_domain(&self, candidate: &str) -> Option<Arc<str>> {
        ScopeIndex::which_domain(self, candidate)
    }

    #[inline]
    fn is_address_in_scope(&self, candidate: &str) -> bool {
        ScopeIndex::is_address_in_scope(self, candidate)
    }

    #[inline]
    fn blacklisted(&self, candidate: &str) -> bool {
        ScopeIndex::blacklisted(self, candidate)
    }

    fn domains(&self) -> Vec<Arc<str>> {
        ScopeIndex::domains(self)
    }
}
