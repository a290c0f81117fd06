use scopegate_domain::{Scope, ScopeError};

#[test]
fn test_registered_address_is_in_scope() {
    let mut scope = Scope::new();
    scope.add_addresses(["192.0.2.1"]).unwrap();
    let index = scope.compile();

    assert!(index.is_address_in_scope("192.0.2.1"));
    assert!(!index.is_address_in_scope("192.0.2.2"));
}

#[test]
fn test_malformed_candidate_is_false_not_an_error() {
    let mut scope = Scope::new();
    scope.add_addresses(["192.0.2.1"]).unwrap();
    let index = scope.compile();

    assert!(!index.is_address_in_scope("not-an-ip"));
    assert!(!index.is_address_in_scope(""));
    assert!(!index.is_address_in_scope("192.0.2"));
    assert!(!index.is_address_in_scope("owasp.org"));
}

#[test]
fn test_cidr_containment() {
    let mut scope = Scope::new();
    scope.add_addresses(["10.0.0.0/24"]).unwrap();
    let index = scope.compile();

    assert!(index.is_address_in_scope("10.0.0.1"));
    assert!(index.is_address_in_scope("10.0.0.254"));
    assert!(!index.is_address_in_scope("10.0.1.1"));
}

#[test]
fn test_range_expands_to_individual_addresses() {
    let mut scope = Scope::new();
    scope.add_addresses(["192.0.2.10-12"]).unwrap();

    assert_eq!(
        scope.addresses,
        vec!["192.0.2.10", "192.0.2.11", "192.0.2.12"]
    );

    let index = scope.compile();
    assert!(index.is_address_in_scope("192.0.2.11"));
    assert!(!index.is_address_in_scope("192.0.2.13"));
}

#[test]
fn test_ipv6_addresses_and_blocks() {
    let mut scope = Scope::new();
    scope.add_addresses(["2001:db8::1", "2001:db8:1::/48"]).unwrap();
    let index = scope.compile();

    assert!(index.is_address_in_scope("2001:db8::1"));
    assert!(index.is_address_in_scope("2001:db8:1::42"));
    assert!(!index.is_address_in_scope("2001:db8:2::1"));
}

#[test]
fn test_normalize_addresses_after_direct_population() {
    let mut scope = Scope::new();
    scope.addresses = vec!["192.000.002.001".to_string()];

    // Leading zeros are not a valid textual IP.
    assert!(matches!(
        scope.normalize_addresses(),
        Err(ScopeError::InvalidAddress(_))
    ));

    let mut scope = Scope::new();
    scope.addresses = vec!["192.0.2.5-6".to_string()];
    scope.normalize_addresses().unwrap();
    assert_eq!(scope.addresses, vec!["192.0.2.5", "192.0.2.6"]);
}

#[test]
fn test_malformed_operator_entries_are_rejected_at_ingestion() {
    let mut scope = Scope::new();
    assert!(scope.add_addresses(["bogus"]).is_err());
    assert!(scope.add_addresses(["10.0.0.0/33"]).is_err());
    assert!(scope.add_addresses(["192.0.2.20-10"]).is_err());
}
