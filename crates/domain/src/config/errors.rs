#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to fetch {0}: {1}")]
    Fetch(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
