//! Output types for a completed summarization.

use serde::{Deserialize, Serialize};

/// Result of one transcript summarization.
pub struct SummaryOutput {
    /// The rendered summary PDF, ready to serve.
    pub pdf: Vec<u8>,
    /// The sanitized summary text the PDF was rendered from.
    pub summary: String,
    /// Pipeline statistics.
    pub stats: SummaryStats,
}

/// Timing and size statistics for one pipeline run.
///
/// Serializable so callers can log a run as a single structured record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Characters of transcript text extracted from the upload.
    pub transcript_chars: usize,
    /// Characters of summary text returned by the model.
    pub summary_chars: usize,
    /// Time spent parsing and extracting the upload.
    pub extract_duration_ms: u64,
    /// Time spent in the generative API call.
    pub generate_duration_ms: u64,
    /// Time spent rendering the output PDF.
    pub render_duration_ms: u64,
    /// Wall-clock time for the whole pipeline.
    pub total_duration_ms: u64,
}
