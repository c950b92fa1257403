// Mock implementations for testing
//
// Provides mock services that can be injected in place of live backends.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseContentGenerator, GeneratedContent};
use crate::domains::dreams::models::OutputKind;

// =============================================================================
// Mock Content Generator
// =============================================================================

/// Arguments captured from a generate call
#[derive(Debug, Clone)]
pub struct GenerateCallArgs {
    pub description: String,
    pub output_kind: OutputKind,
}

pub struct MockGenerator {
    responses: Arc<Mutex<Vec<Result<GeneratedContent, String>>>>,
    calls: Arc<Mutex<Vec<GenerateCallArgs>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful generation result.
    pub fn with_content(self, preview: &str, url: Option<&str>) -> Self {
        self.responses.lock().unwrap().push(Ok(GeneratedContent {
            preview: preview.to_string(),
            url: url.map(|u| u.to_string()),
        }));
        self
    }

    /// Queue a failed generation.
    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    /// Get all recorded generate calls.
    pub fn calls(&self) -> Vec<GenerateCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Check if a description was sent for generation.
    pub fn was_called_with(&self, description: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.description == description)
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseContentGenerator for MockGenerator {
    async fn generate(
        &self,
        description: &str,
        output_kind: OutputKind,
    ) -> Result<GeneratedContent> {
        // Record the call
        self.calls.lock().unwrap().push(GenerateCallArgs {
            description: description.to_string(),
            output_kind,
        });

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            return match responses.remove(0) {
                Ok(content) => Ok(content),
                Err(message) => Err(anyhow::anyhow!(message)),
            };
        }

        // Default canned content when nothing was queued
        Ok(GeneratedContent {
            preview: format!("A generated {} for: {}", output_kind.as_str(), description),
            url: None,
        })
    }
}
