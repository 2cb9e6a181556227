use serde::{Deserialize, Serialize};

/// Query parameters for `GET /unscramble`
#[derive(Debug, Clone, Deserialize)]
pub struct UnscrambleParams {
    #[serde(default)]
    pub letters: Option<String>,
}

/// Body of a `POST /unscramble` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnscrambleBody {
    #[serde(default)]
    pub letters: Option<String>,
}

/// Successful lookup envelope: `{"status": "ok", "message": [..words..]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnscrambleResponse {
    pub status: String,
    pub message: Vec<String>,
}

impl UnscrambleResponse {
    pub fn ok(words: Vec<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: words,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub message: String,
}

/// Root endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub status: String,
}

/// Error envelope shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
