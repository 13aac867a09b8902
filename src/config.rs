//! Configuration for transcript summarization.
//!
//! Every knob lives in [`SummarizeConfig`], built via its builder. Keeping
//! the whole configuration in one cloneable struct means the HTTP layer can
//! hold a single copy in its shared state and hand a reference to each
//! request without any per-request setup.

use crate::error::SummarizeError;
use crate::pipeline::generate::SummaryProvider;
use std::fmt;
use std::sync::Arc;

/// Configuration for one summarization pipeline.
///
/// Built via [`SummarizeConfig::builder()`] or [`SummarizeConfig::default()`].
///
/// # Example
/// ```rust
/// use meetsum::SummarizeConfig;
///
/// let config = SummarizeConfig::builder()
///     .model("gemini-2.0-flash-exp")
///     .api_timeout_secs(30)
///     .speaker_label("John")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct SummarizeConfig {
    /// Gemini model identifier. Default: "gemini-2.0-flash-exp".
    ///
    /// Passed into the REST path as `models/{model}:generateContent`.
    pub model: String,

    /// Explicit API key. If None, `GOOGLE_API_KEY` is read from the
    /// environment when the provider is resolved.
    pub api_key: Option<String>,

    /// Pre-constructed summarization provider. Takes precedence over any
    /// API key. Useful in tests or when the caller needs custom middleware
    /// around the collaborator.
    pub provider: Option<Arc<dyn SummaryProvider>>,

    /// Sampling temperature forwarded to the model. Default: 0.3.
    ///
    /// Summaries should stay faithful to the transcript, so the default
    /// leans deterministic without pinning the model entirely.
    pub temperature: f32,

    /// Maximum tokens the model may generate. Default: 2048.
    ///
    /// Long multi-topic meetings produce summaries well over 1000 tokens;
    /// setting this too low truncates the "Assigned Work" section, which
    /// sits at the end of the requested structure.
    pub max_output_tokens: usize,

    /// Deadline on the generative call in seconds. Default: 60.
    ///
    /// A hung upstream call would otherwise block its request indefinitely.
    /// Expiry surfaces as [`SummarizeError::GenerationTimeout`], which the
    /// HTTP layer maps to 504 rather than a generic 500.
    pub api_timeout_secs: u64,

    /// Speaker labels whose attribution lines are rendered bold.
    ///
    /// A line containing `"{label}:"` for any configured label renders as a
    /// bold body block. Default: empty (no speaker rule fires).
    pub speaker_labels: Vec<String>,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash-exp".to_string(),
            api_key: None,
            provider: None,
            temperature: 0.3,
            max_output_tokens: 2048,
            api_timeout_secs: 60,
            speaker_labels: Vec::new(),
        }
    }
}

impl fmt::Debug for SummarizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizeConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("provider", &self.provider.as_ref().map(|_| "<dyn SummaryProvider>"))
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("speaker_labels", &self.speaker_labels)
            .finish()
    }
}

impl SummarizeConfig {
    /// Create a new builder for `SummarizeConfig`.
    pub fn builder() -> SummarizeConfigBuilder {
        SummarizeConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`SummarizeConfig`].
#[derive(Debug)]
pub struct SummarizeConfigBuilder {
    config: SummarizeConfig,
}

impl SummarizeConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn provider(mut self, provider: Arc<dyn SummaryProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_output_tokens(mut self, n: usize) -> Self {
        self.config.max_output_tokens = n;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    /// Add one recognized speaker label.
    pub fn speaker_label(mut self, label: impl Into<String>) -> Self {
        self.config.speaker_labels.push(label.into());
        self
    }

    /// Replace the full set of recognized speaker labels.
    pub fn speaker_labels(mut self, labels: Vec<String>) -> Self {
        self.config.speaker_labels = labels;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<SummarizeConfig, SummarizeError> {
        let c = &self.config;
        if c.model.trim().is_empty() {
            return Err(SummarizeError::InvalidConfig(
                "Model identifier must not be empty".into(),
            ));
        }
        if c.api_timeout_secs == 0 {
            return Err(SummarizeError::InvalidConfig(
                "API timeout must be at least 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SummarizeConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(config.api_timeout_secs, 60);
        assert!(config.speaker_labels.is_empty());
    }

    #[test]
    fn builder_collects_speaker_labels() {
        let config = SummarizeConfig::builder()
            .speaker_label("John")
            .speaker_label("Priya")
            .build()
            .unwrap();
        assert_eq!(config.speaker_labels, vec!["John", "Priya"]);
    }

    #[test]
    fn empty_model_rejected() {
        let result = SummarizeConfig::builder().model("  ").build();
        assert!(matches!(result, Err(SummarizeError::InvalidConfig(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = SummarizeConfig::builder().api_timeout_secs(0).build();
        assert!(matches!(result, Err(SummarizeError::InvalidConfig(_))));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = SummarizeConfig::builder().api_key("secret").build().unwrap();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
