//! Offset-based pagination for list endpoints.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In a route handler
//! let params = ListParams { offset: Some(20), limit: Some(10) };
//! let validated = params.validate();
//!
//! // In a model
//! let dreams = Dream::list(&validated, pool).await?;
//! ```

use serde::Deserialize;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on page size.
pub const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters as received from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Number of records to skip.
    pub offset: Option<i64>,
    /// Number of records to return (default 10, max 100).
    pub limit: Option<i64>,
}

impl ListParams {
    /// Apply defaults and bounds.
    ///
    /// Negative offsets are treated as 0; limits are clamped to 1-100.
    pub fn validate(&self) -> ValidatedListParams {
        let offset = self.offset.unwrap_or(0).max(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        ValidatedListParams { offset, limit }
    }
}

/// Validated and normalized pagination parameters.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedListParams {
    pub offset: i64,
    pub limit: i64,
}
