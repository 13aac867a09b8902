//! Summary generation via the Gemini `generateContent` API.
//!
//! The pipeline only needs one operation from its generative collaborator:
//! prompt in, text out. That seam is the [`SummaryProvider`] trait, so tests
//! can substitute a deterministic stub and callers can wrap the real client
//! in middleware without this crate knowing.
//!
//! [`GeminiClient`] is the production implementation: a thin reqwest client
//! for `POST /v1beta/models/{model}:generateContent`. There is no retry
//! logic — a transient failure surfaces immediately as that request's
//! terminal error — but every call is bounded by the configured deadline so
//! a hung upstream cannot pin a request forever.

use crate::error::SummarizeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default endpoint for the generative-language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A collaborator that turns a prompt into free-form summary text.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Generate text for `prompt` with the given model.
    ///
    /// Implementations return [`SummarizeError::EmptySummary`] when the
    /// call succeeds but carries no text, and
    /// [`SummarizeError::GenerationTimeout`] when the deadline expires.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, SummarizeError>;
}

/// Production [`SummaryProvider`] backed by the Gemini REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
    temperature: f32,
    max_output_tokens: usize,
}

impl GeminiClient {
    /// Create a client for the public Gemini endpoint.
    pub fn new(
        api_key: impl Into<String>,
        timeout_secs: u64,
        temperature: f32,
        max_output_tokens: usize,
    ) -> Result<Self, SummarizeError> {
        Self::with_base_url(
            api_key,
            GEMINI_API_BASE,
            timeout_secs,
            temperature,
            max_output_tokens,
        )
    }

    /// Create a client against a custom base URL (local mocks in tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout_secs: u64,
        temperature: f32,
        max_output_tokens: usize,
    ) -> Result<Self, SummarizeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SummarizeError::Internal(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout_secs,
            temperature,
            max_output_tokens,
        })
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, SummarizeError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        debug!(model, prompt_chars = prompt.len(), "calling generateContent");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummarizeError::GenerationTimeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    SummarizeError::Generation {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Generation {
                message: format!("HTTP {status}: {}", truncate(&body, 300)),
            });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(|e| SummarizeError::Generation {
                message: format!("Malformed API response: {e}"),
            })?;

        let text = body.into_text();
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptySummary);
        }

        debug!(summary_chars = text.len(), "received summary");
        Ok(text)
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
