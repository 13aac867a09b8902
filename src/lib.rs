//! # meetsum
//!
//! Summarize meeting-transcript PDFs into formatted summary PDFs.
//!
//! ## What it does
//!
//! A transcript PDF goes in; a styled "Meeting Summary" PDF comes out. In
//! between, the transcript text is extracted page by page, embedded in a
//! structured prompt, sent to the Gemini `generateContent` API, and the
//! returned summary is sanitized and rendered with heading/bold formatting.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Extract   page-by-page text via lopdf (CPU-bound, spawn_blocking)
//!  ├─ 2. Prompt    embed transcript + formatting contract
//!  ├─ 3. Generate  Gemini generateContent (deadline-bounded, no retries)
//!  ├─ 4. Sanitize  typographic punctuation → ASCII
//!  ├─ 5. Classify  heading / bold / label / speaker rules per line
//!  └─ 6. Render    styled summary PDF (lopdf), served from memory
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meetsum::{summarize, SummarizeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key read from GOOGLE_API_KEY
//!     let config = SummarizeConfig::default();
//!     let output = summarize("transcript.pdf", &config).await?;
//!     std::fs::write("meeting_summary.pdf", &output.pdf)?;
//!     eprintln!(
//!         "{} transcript chars → {} summary chars",
//!         output.stats.transcript_chars, output.stats.summary_chars
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `server` | on      | Enables the `meetsum-server` binary and the [`server`] module (axum + tower-http + clap) |
//!
//! Disable `server` when using only the library:
//! ```toml
//! meetsum = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompts;
#[cfg(feature = "server")]
pub mod server;
pub mod summarize;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{SummarizeConfig, SummarizeConfigBuilder};
pub use error::SummarizeError;
pub use output::{SummaryOutput, SummaryStats};
pub use pipeline::generate::{GeminiClient, SummaryProvider};
pub use summarize::{summarize, summarize_bytes, summarize_to_file};
