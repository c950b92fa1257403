// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The HTTP layer and the background worker depend on these traits,
// concrete backends implement them.
//
// Naming convention: Base* for trait names (e.g., BaseContentGenerator)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::dreams::models::OutputKind;

// =============================================================================
// Content Generator Trait (Infrastructure - generative AI backend)
// =============================================================================

/// Output of a successful generation call.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    /// Generated text, stored as the dream's content preview
    pub preview: String,
    /// Link to a rendered asset, when the backend produces one
    pub url: Option<String>,
}

#[async_trait]
pub trait BaseContentGenerator: Send + Sync {
    /// Generate content for a dream description in the requested output kind.
    ///
    /// Implementations own prompt construction and provider transport.
    /// Any error is treated by callers as a failed generation for the dream.
    async fn generate(
        &self,
        description: &str,
        output_kind: OutputKind,
    ) -> Result<GeneratedContent>;
}
