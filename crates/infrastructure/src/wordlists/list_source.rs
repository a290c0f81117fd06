use async_trait::async_trait;
use scopegate_application::ports::ListSourcePort;
use scopegate_domain::ConfigError;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub fn parse_list_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.to_string())
}

pub fn parse_list_text(text: &str) -> Vec<String> {
    text.lines().filter_map(parse_list_line).collect()
}

/// Shared HTTP client for list fetching.
pub fn shared_client() -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .user_agent("scopegate/0.3 (list-fetch)")
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| ConfigError::Fetch("client".to_string(), e.to_string()))
}

/// Pick a list source for a resource string: URLs fetch over HTTP, anything
/// else reads from the filesystem.
pub fn list_source_for(resource: &str, client: &reqwest::Client) -> Box<dyn ListSourcePort> {
    if resource.starts_with("http://") || resource.starts_with("https://") {
        Box::new(UrlListSource::new(resource, client.clone()))
    } else {
        Box::new(FileListSource::new(resource))
    }
}

pub struct FileListSource {
    path: PathBuf,
}

impl FileListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListSourcePort for FileListSource {
    async fn load(&self) -> Result<Vec<String>, ConfigError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::FileRead(self.path.display().to_string(), e.to_string()))?;
        Ok(parse_list_text(&text))
    }
}

pub struct UrlListSource {
    url: String,
    client: reqwest::Client,
}

impl UrlListSource {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl ListSourcePort for UrlListSource {
    async fn load(&self) -> Result<Vec<String>, ConfigError> {
        let text = fetch_url(&self.url, &self.client).await?;
        info!(url = %self.url, lines = text.lines().count(), "Fetched list source");
        Ok(parse_list_text(&text))
    }
}

async fn fetch_url(url: &str, client: &reqwest::Client) -> Result<String, ConfigError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ConfigError::Fetch(url.to_string(), e.to_string()))?;

    if !response.status().is_success() {
        return Err(ConfigError::Fetch(
            url.to_string(),
            format!("HTTP {}", response.status().as_u16()),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| ConfigError::Fetch(url.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let text = "www\n\n# comment\n  api  \n#\nmail\n";
        assert_eq!(parse_list_text(text), vec!["www", "api", "mail"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_list_text("").is_empty());
        assert!(parse_list_text("\n\n# only comments\n").is_empty());
    }
}
