use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {body}")]
    Rejected { status: StatusCode, body: Value },

    #[error("store failed ({status}): {body}")]
    Upstream { status: StatusCode, body: Value },

    #[error("stored data could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("record id {0:?} cannot be addressed in the store")]
    InvalidKey(String),
}

impl StoreError {
    /// Classifies a non-2xx answer from the store.
    pub fn from_status(status: StatusCode, body: Value) -> Self {
        if status.is_client_error() {
            StoreError::Rejected { status, body }
        } else {
            StoreError::Upstream { status, body }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Network(_) => "network",
            StoreError::Rejected { .. } => "rejected",
            StoreError::Upstream { .. } => "upstream",
            StoreError::Codec(_) => "parse",
            StoreError::InvalidKey(_) => "invalid_key",
        }
    }

    /// What the store said, or the local error text when it said nothing.
    pub fn details(&self) -> Value {
        match self {
            StoreError::Rejected { body, .. } | StoreError::Upstream { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}
