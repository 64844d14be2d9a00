use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// The response for a request that completed without a record to return
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// What happened
    pub message: String,
}

impl MessageDto {
    /// Wraps a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Every documented route, served at the API root
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    /// Every documented route path, sorted.
    pub endpoints: Vec<String>,
}
