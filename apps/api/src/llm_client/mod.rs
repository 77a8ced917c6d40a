/// LLM Client — the single point of entry for all Gemini API calls in SkillPath.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All provider interactions MUST go through the `CompletionProvider` trait.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all provider calls in SkillPath.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned empty content")]
    EmptyContent,
}

/// Everything needed for one completion call, produced by the request
/// builder. The schema descriptor is forwarded to the provider as a hint;
/// the decoder re-validates the payload independently.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system: String,
    pub response_schema: Value,
    pub temperature: f32,
}

/// Seam between the pipeline and the external completion service.
/// Implementations return the raw text payload; decoding happens elsewhere.
/// Each call is independent — no retries at this layer.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

// Gemini generateContent wire structures

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiSystemInstruction<'a>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The production `CompletionProvider`: Google's Gemini generateContent API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{GEMINI_API_URL}/models/{MODEL}:generateContent?key={}",
            self.api_key
        )
    }

    fn request_body(request: &CompletionRequest) -> GeminiRequest<'_> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiPart {
                    text: &request.system,
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
            },
        }
    }
}

/// Pulls the text payload out of a parsed response.
/// A missing candidate or an empty text part is a provider-level failure.
fn extract_text(response: GeminiResponse) -> Result<String, LlmError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(LlmError::EmptyContent)
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    /// Makes a single call to the Gemini API. No retry loop: each
    /// submission maps to exactly one provider call, and recovery is the
    /// caller re-submitting.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = Self::request_body(request);

        let response = self
            .client
            .post(self.build_url())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Provider call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0)
            );
        }

        extract_text(parsed)
    }
}

#[cfg(test)]
pub mod testing {
    //! Test doubles for the provider seam.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Scripted provider: returns a fixed payload or failure and counts
    /// invocations so tests can assert the provider was never contacted.
    pub struct ScriptedProvider {
        payload: Result<String, String>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        pub fn ok(payload: &str) -> Self {
            Self {
                payload: Ok(payload.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                payload: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.payload {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }
}
