// Content generation using Google Gemini
//
// This is the infrastructure implementation of BaseContentGenerator.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::GeminiClient;
use tracing::{debug, info, warn};

use super::{BaseContentGenerator, GeneratedContent};
use crate::domains::dreams::models::OutputKind;

/// Build the generation prompt for a dream.
fn build_prompt(description: &str, output_kind: OutputKind) -> String {
    format!(
        "Based on the following dream description, generate creative content.\n\
         The preferred output format is: {}.\n\n\
         Dream description:\n\
         \"{}\"\n\n\
         Generate the content and make sure it is coherent with the description \
         and the requested format.",
        output_kind.as_str(),
        description
    )
}

/// Gemini implementation of content generation.
///
/// The client is built once at startup. When no API key is configured the
/// generator is still constructible: submissions keep being accepted and
/// every generation attempt fails with a configuration error, which marks
/// the dream as failed instead of crashing the server.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: Option<GeminiClient>,
}

impl GeminiGenerator {
    pub fn new(api_key: Option<String>, model: Option<String>) -> Self {
        let client = api_key.map(|key| {
            let client = GeminiClient::new(key);
            match model {
                Some(model) => client.with_model(model),
                None => client,
            }
        });

        if client.is_none() {
            warn!("GEMINI_API_KEY is not set; dream processing will fail until it is configured");
        }

        Self { client }
    }

    /// Wrap an already-configured client.
    pub fn from_client(client: GeminiClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

#[async_trait]
impl BaseContentGenerator for GeminiGenerator {
    async fn generate(
        &self,
        description: &str,
        output_kind: OutputKind,
    ) -> Result<GeneratedContent> {
        let client = self
            .client
            .as_ref()
            .context("Gemini API key is not configured")?;

        let prompt = build_prompt(description, output_kind);

        debug!(
            output_kind = output_kind.as_str(),
            prompt_length = prompt.len(),
            model = client.model(),
            "Requesting dream content from Gemini"
        );

        let text = client
            .generate_content(&prompt)
            .await
            .context("Failed to generate content with Gemini")?;

        info!(
            response_length = text.len(),
            output_kind = output_kind.as_str(),
            "Gemini content generated"
        );

        // Text-only backend for now: there is no rendered asset to link
        Ok(GeneratedContent {
            preview: text,
            url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_includes_description_and_kind() {
        let prompt = build_prompt("flying over a frozen sea", OutputKind::Illustration);
        assert!(prompt.contains("flying over a frozen sea"));
        assert!(prompt.contains("illustration"));
    }

    #[tokio::test]
    async fn test_generate_without_api_key_fails() {
        let generator = GeminiGenerator::new(None, None);
        let result = generator.generate("a quiet library", OutputKind::Narrative).await;

        let error = result.expect_err("generation must fail without an API key");
        assert!(error.to_string().contains("not configured"));
    }

    #[tokio::test]
    async fn test_generate_maps_candidate_text_to_preview() {
        use httpmock::prelude::*;

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-1.5-flash:generateContent")
                    .header("x-goog-api-key", "test-key");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "candidates": [{
                            "content": {
                                "parts": [{"text": "A wave held still above the harbor."}],
                                "role": "model"
                            },
                            "finishReason": "STOP"
                        }]
                    }));
            })
            .await;

        let generator = GeminiGenerator::from_client(
            GeminiClient::new("test-key").with_base_url(server.base_url()),
        );

        let content = generator
            .generate("a harbor frozen mid-wave", OutputKind::Illustration)
            .await
            .unwrap();

        assert_eq!(content.preview, "A wave held still above the harbor.");
        assert!(content.url.is_none());
        mock.assert_async().await;
    }
}
