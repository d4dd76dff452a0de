use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM authentication failed: {0}")]
    Authentication(String),

    #[error("LLM rate limit exceeded")]
    RateLimited,

    #[error("LLM API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to reach LLM API at {url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),
}
