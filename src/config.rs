use std::path::PathBuf;

/// HTTP server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub http_port: u16,
    pub wordlist_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            http_port: 8080,
            wordlist_path: PathBuf::from("./words.json"),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(bind_addr: String, http_port: u16, wordlist_path: PathBuf) -> Self {
        Self {
            bind_addr,
            http_port,
            wordlist_path,
        }
    }

    /// Socket address string the HTTP listener binds to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}

/// Caller-side validation limits for query input
#[derive(Clone, Copy, Debug)]
pub struct QueryLimits {
    /// Maximum number of letters accepted per query
    pub max_letters: usize,
    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_letters: 50,
            max_body_bytes: 75,
        }
    }
}

impl QueryLimits {
    pub fn with_max_letters(mut self, max_letters: usize) -> Self {
        self.max_letters = max_letters;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Per-IP rate limiting configuration
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_minute: u32,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_minute: 10,
            burst_size: 10,
        }
    }
}

impl RateLimitConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_requests_per_minute(mut self, requests_per_minute: u32) -> Self {
        self.requests_per_minute = requests_per_minute;
        self
    }

    pub fn with_burst_size(mut self, burst_size: u32) -> Self {
        self.burst_size = burst_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");

        let limits = QueryLimits::default();
        assert_eq!(limits.max_letters, 50);
        assert_eq!(limits.max_body_bytes, 75);

        let rate_limit = RateLimitConfig::default();
        assert!(rate_limit.enabled);
        assert_eq!(rate_limit.requests_per_minute, 10);
    }

    #[test]
    fn test_limits_builder() {
        let limits = QueryLimits::default()
            .with_max_letters(20)
            .with_max_body_bytes(128);
        assert_eq!(limits.max_letters, 20);
        assert_eq!(limits.max_body_bytes, 128);
    }

    #[test]
    fn test_rate_limit_builder() {
        let config = RateLimitConfig::default()
            .with_enabled(false)
            .with_requests_per_minute(100)
            .with_burst_size(25);
        assert!(!config.enabled);
        assert_eq!(config.requests_per_minute, 100);
        assert_eq!(config.burst_size, 25);
    }
}
