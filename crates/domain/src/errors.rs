use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Conflicting modes: {0} and {1} cannot both be enabled")]
    ConflictingModes(&'static str, &'static str),

    #[error("Malformed domain name: {0}")]
    MalformedDomain(String),

    #[error("Invalid address entry: {0}")]
    InvalidAddress(String),
}
