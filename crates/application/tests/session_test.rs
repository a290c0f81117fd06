use scopegate_application::ports::ScopeFilterPort;
use scopegate_application::SessionScope;
use scopegate_domain::{Config, ScopeError};

fn session_config() -> Config {
    let mut config = Config::new();
    config.brute_forcing = true;
    config.add_domains(["owasp.org", "google.com"]);
    config.scope.add_blacklist_entry("test.owasp.org");
    config.scope.addresses = vec!["192.0.2.1".to_string(), "10.0.0.0/24".to_string()];
    config
}

#[test]
fn test_prepare_validates_and_freezes() {
    let session = SessionScope::prepare(session_config()).unwrap();

    assert!(!session.config().wordlist.is_empty());
    assert!(session.is_domain_in_scope("www.owasp.org"));
    assert!(session.blacklisted("test.owasp.org"));
    assert!(session.is_address_in_scope("10.0.0.42"));
    assert_eq!(session.domains().len(), 2);
}

#[test]
fn test_prepare_rejects_conflicting_modes() {
    let mut config = session_config();
    config.passive = true;

    assert!(matches!(
        SessionScope::prepare(config),
        Err(ScopeError::ConflictingModes(_, _))
    ));
}

#[test]
fn test_prepare_rejects_malformed_operator_addresses() {
    let mut config = Config::new();
    config.scope.addresses = vec!["bogus".to_string()];

    assert!(matches!(
        SessionScope::prepare(config),
        Err(ScopeError::InvalidAddress(_))
    ));
}

#[test]
fn test_handles_are_queried_concurrently() {
    let session = SessionScope::prepare(session_config()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = session.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    assert!(session.is_domain_in_scope("api.google.com"));
                    assert!(!session.is_domain_in_scope("evilowasp.org"));
                    assert_eq!(
                        session.which_domain("mail.owasp.org").as_deref(),
                        Some("owasp.org")
                    );
                    assert!(session.is_address_in_scope("192.0.2.1"));
                    assert!(!session.is_address_in_scope("not-an-ip"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
