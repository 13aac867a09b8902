//! Error types for the meetsum library.
//!
//! Every failure in the pipeline maps to exactly one [`SummarizeError`]
//! variant, so the HTTP layer can translate errors to status codes with a
//! single `match` and callers of the library can distinguish "the upload was
//! bad" (client errors) from "the collaborator or the disk let us down"
//! (server errors) without string inspection.
//!
//! There is no partial-success mode: a request either yields a complete
//! summary PDF or one of these errors. Transient upstream failures are not
//! retried anywhere in the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the meetsum library.
#[derive(Debug, Error)]
pub enum SummarizeError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// The PDF header/xref is corrupt and lopdf cannot parse it.
    #[error("Failed to parse PDF '{path}': {detail}")]
    PdfParse { path: PathBuf, detail: String },

    /// Every page of the transcript came back empty.
    ///
    /// Almost always a scanned/image-only PDF. Surfaced to HTTP callers as
    /// a 400 since the service cannot do anything useful with the upload.
    #[error("Could not extract text from PDF '{path}'.\nScanned or image-only PDFs are not supported.")]
    NoExtractableText { path: PathBuf },

    // ── Collaborator errors ───────────────────────────────────────────────
    /// No API key was configured for the summarization provider.
    #[error("Summarization provider is not configured.\n{hint}")]
    ProviderNotConfigured { hint: String },

    /// The generative-language API returned an error or a malformed body.
    #[error("Summary generation failed: {message}")]
    Generation { message: String },

    /// The generative-language call exceeded its deadline.
    ///
    /// Kept distinct from [`SummarizeError::Generation`] so the HTTP layer
    /// can answer 504 rather than a generic 500.
    #[error("Summary generation timed out after {secs}s")]
    GenerationTimeout { secs: u64 },

    /// The API call succeeded but the response carried no text.
    #[error("Summarization returned an empty response")]
    EmptySummary,

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the rendered summary PDF.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SummarizeError {
    /// Whether the error is the caller's fault (bad upload) rather than a
    /// service-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SummarizeError::FileNotFound { .. }
                | SummarizeError::PdfParse { .. }
                | SummarizeError::NoExtractableText { .. }
        )
    }
}
