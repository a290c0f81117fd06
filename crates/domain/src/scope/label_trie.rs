use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    root: Option<u32>,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            root: None,
        }
    }
}

/// Reversed-label trie over lowercased domain names. A lookup matches whole
/// dot-delimited labels only, so `evilowasp.org` never matches an entry for
/// `owasp.org`. An entry matches itself and any of its subdomains; when
/// several entries match, the most specific (deepest) one wins.
#[derive(Default)]
pub(crate) struct DomainTrie {
    root: TrieNode,
}

impl DomainTrie {
    pub(crate) fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    pub(crate) fn insert(&mut self, domain: &str, root_id: u32) {
        let mut node = &mut self.root;
        for label in domain.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        node.root = Some(root_id);
    }

    #[inline]
    pub(crate) fn lookup(&self, domain: &str) -> Option<u32> {
        let labels: SmallVec<[&str; 8]> = domain.split('.').rev().collect();
        let mut node = &self.root;
        let mut hit = None;

        for label in labels.iter() {
            match node.children.get(*label) {
                Some(child) => {
                    if let Some(id) = child.root {
                        hit = Some(id);
                    }
                    node = child;
                }
                None => break,
            }
        }

        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_matches_itself_and_subdomains() {
        let mut trie = DomainTrie::new();
        trie.insert("owasp.org", 0);

        assert_eq!(trie.lookup("owasp.org"), Some(0));
        assert_eq!(trie.lookup("www.owasp.org"), Some(0));
        assert_eq!(trie.lookup("a.b.owasp.org"), Some(0));
    }

    #[test]
    fn test_label_boundaries_are_respected() {
        let mut trie = DomainTrie::new();
        trie.insert("owasp.org", 0);

        assert_eq!(trie.lookup("evilowasp.org"), None);
        assert_eq!(trie.lookup("org"), None);
        assert_eq!(trie.lookup("owasp.org.evil.com"), None);
    }

    #[test]
    fn test_deepest_entry_wins() {
        let mut trie = DomainTrie::new();
        trie.insert("owasp.org", 0);
        trie.insert("sub.owasp.org", 1);

        assert_eq!(trie.lookup("x.sub.owasp.org"), Some(1));
        assert_eq!(trie.lookup("sub.owasp.org"), Some(1));
        assert_eq!(trie.lookup("other.owasp.org"), Some(0));
    }
}
