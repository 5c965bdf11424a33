//! Client configuration.

use std::time::Duration;

/// Where a client points and how long each round trip may take.
///
/// Fixed at construction; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root address of the service, e.g. `https://api.x.com/v1`.
    pub base_url: String,
    /// Sub-path appended verbatim to `base_url`, e.g. `/widgets`.
    pub api_endpoint: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_endpoint: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(base_url),
        }
    }

    /// `base_url` followed by `api_endpoint`, or `base_url` alone when the
    /// endpoint is absent or empty. Computed on every call.
    pub fn endpoint(&self) -> String {
        match self.api_endpoint.as_deref() {
            None | Some("") => self.base_url.clone(),
            Some(path) => format!("{}{path}", self.base_url),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn api_endpoint(mut self, path: impl Into<String>) -> Self {
        self.config.api_endpoint = Some(path.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("https://api.x.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_endpoint, None);
    }

    #[test]
    fn endpoint_without_sub_path_is_base_url() {
        assert_eq!(ClientConfig::new("https://api.x.com/v1").endpoint(), "https://api.x.com/v1");
        let empty = ClientConfig::builder("https://api.x.com/v1").api_endpoint("").build();
        assert_eq!(empty.endpoint(), "https://api.x.com/v1");
    }

    #[test]
    fn endpoint_concatenates_without_normalising() {
        let pairs = [
            ("https://api.x.com/v1", "/widgets", "https://api.x.com/v1/widgets"),
            ("https://api.x.com/v1/", "/widgets", "https://api.x.com/v1//widgets"),
            ("http://h", "widgets", "http://hwidgets"),
            ("", "/only", "/only"),
        ];
        for (base, path, expected) in pairs {
            let config = ClientConfig::builder(base).api_endpoint(path).build();
            assert_eq!(config.endpoint(), expected);
        }
    }

    #[test]
    fn endpoint_follows_field_changes() {
        let mut config = ClientConfig::builder("http://a").api_endpoint("/x").build();
        assert_eq!(config.endpoint(), "http://a/x");
        config.base_url = "http://b".to_string();
        config.api_endpoint = Some("/y".to_string());
        assert_eq!(config.endpoint(), "http://b/y");
    }

    #[test]
    fn builder_sets_timeout() {
        let config = ClientConfig::builder("http://a")
            .timeout(Duration::from_millis(250))
            .build();
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
