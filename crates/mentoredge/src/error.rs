//! Error types for the recommendation engine and its collaborators.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Credential rejected (401/403 response)
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create an unauthorized error.
    #[must_use]
    pub fn unauthorized(status: u16, message: impl Into<String>) -> Self {
        Self::Unauthorized { status, message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Timeout(_) | Self::Server { .. })
    }

    /// Returns true if a recommendation run can skip the failed query and go on.
    ///
    /// Only a rejected credential is fatal: every later query would fail the same way.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Unauthorized { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// A user profile that cannot drive a recommendation run.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// No search keywords were given.
    #[error("profile must contain at least one primary keyword")]
    NoKeywords,

    /// A keyword is empty or whitespace only.
    #[error("primary keyword at index {index} is blank")]
    BlankKeyword {
        /// Position of the offending keyword
        index: usize,
    },

    /// A scoring weight is negative, NaN or infinite.
    #[error("scoring weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight {
        /// Weight key (relevance, citations, recency)
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// All scoring weights are zero.
    #[error("scoring weights sum to zero")]
    ZeroWeights,
}

/// Errors that abort a recommendation run.
#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    /// The paper source failed in a way that affects every keyword.
    #[error("paper source failed for keyword '{keyword}': {source}")]
    Source {
        /// Keyword whose query surfaced the failure
        keyword: String,
        /// Originating client error
        #[source]
        source: ClientError,
    },
}

/// Errors while exporting recommendations.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// CSV writer error
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Recommendation run failed
    #[error("Recommendation error: {0}")]
    Recommend(#[from] RecommendError),

    /// Profile rejected
    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileError),

    /// Export failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Recommend(RecommendError::Source {
                source: ClientError::Unauthorized { .. },
                ..
            }) => "Semantic Scholar rejected the API key. Check SEMANTIC_SCHOLAR_API_KEY."
                .to_string(),
            Self::Profile(err) => format!("Invalid profile: {err}"),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
