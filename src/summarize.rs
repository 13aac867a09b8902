//! Top-level summarization entry points.
//!
//! Control flow is strictly linear: extract → build prompt → generate →
//! sanitize → render. There is no concurrency coordination inside one
//! request; concurrent requests simply run independent pipelines, since no
//! state is shared between them.

use crate::config::SummarizeConfig;
use crate::error::SummarizeError;
use crate::output::{SummaryOutput, SummaryStats};
use crate::pipeline::generate::{GeminiClient, SummaryProvider};
use crate::pipeline::{extract, render, sanitize};
use crate::prompts::build_summary_prompt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Summarize the transcript PDF at `path` into a rendered summary PDF.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// - [`SummarizeError::NoExtractableText`] when every page is empty
///   (scanned/image-only transcript)
/// - [`SummarizeError::ProviderNotConfigured`] when neither a provider nor
///   an API key is available
/// - Generation and rendering failures propagate as their respective
///   variants; nothing is retried
pub async fn summarize(
    path: impl AsRef<Path>,
    config: &SummarizeConfig,
) -> Result<SummaryOutput, SummarizeError> {
    let total_start = Instant::now();
    let path = path.as_ref().to_path_buf();
    info!("Summarizing transcript: {}", path.display());

    // ── Step 1: Extract transcript text ─────────────────────────────────
    let extract_start = Instant::now();
    let transcript = {
        let path = path.clone();
        tokio::task::spawn_blocking(move || extract::extract_text(&path))
            .await
            .map_err(|e| SummarizeError::Internal(format!("extraction task failed: {e}")))??
    };
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;

    if transcript.trim().is_empty() {
        return Err(SummarizeError::NoExtractableText { path });
    }
    debug!(chars = transcript.len(), "extracted transcript text");

    // ── Step 2: Build the prompt ────────────────────────────────────────
    let prompt = build_summary_prompt(&transcript);

    // ── Step 3: Generate the summary ────────────────────────────────────
    let provider = resolve_provider(config)?;
    let generate_start = Instant::now();
    let raw_summary = provider.generate(&config.model, &prompt).await?;
    let generate_duration_ms = generate_start.elapsed().as_millis() as u64;

    if raw_summary.trim().is_empty() {
        return Err(SummarizeError::EmptySummary);
    }

    // ── Step 4: Sanitize and render ─────────────────────────────────────
    let summary = sanitize::sanitize_text(&raw_summary);
    let render_start = Instant::now();
    let pdf = render::render_summary_pdf(&summary, &config.speaker_labels)?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;

    let stats = SummaryStats {
        transcript_chars: transcript.len(),
        summary_chars: summary.len(),
        extract_duration_ms,
        generate_duration_ms,
        render_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        transcript_chars = stats.transcript_chars,
        summary_chars = stats.summary_chars,
        total_ms = stats.total_duration_ms,
        "summarization complete"
    );

    Ok(SummaryOutput {
        pdf,
        summary,
        stats,
    })
}

/// Summarize a transcript and write the rendered PDF to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub async fn summarize_to_file(
    path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &SummarizeConfig,
) -> Result<SummaryStats, SummarizeError> {
    let output = summarize(path, config).await?;
    let out = output_path.as_ref();

    if let Some(parent) = out.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SummarizeError::OutputWrite {
                path: out.to_path_buf(),
                source: e,
            })?;
    }

    let tmp_path = out.with_extension("pdf.tmp");
    tokio::fs::write(&tmp_path, &output.pdf)
        .await
        .map_err(|e| SummarizeError::OutputWrite {
            path: out.to_path_buf(),
            source: e,
        })?;
    tokio::fs::rename(&tmp_path, out)
        .await
        .map_err(|e| SummarizeError::OutputWrite {
            path: out.to_path_buf(),
            source: e,
        })?;

    Ok(output.stats)
}

/// Summarize transcript PDF bytes held in memory.
///
/// Spools `bytes` to a managed [`tempfile::NamedTempFile`] whose guard
/// deletes the file on every exit path — success, extraction failure, or
/// generation failure. This is the entry point the HTTP layer uses for
/// uploads.
pub async fn summarize_bytes(
    bytes: &[u8],
    config: &SummarizeConfig,
) -> Result<SummaryOutput, SummarizeError> {
    let spooled = spool_pdf_upload(bytes)?;
    // The guard is dropped (and the file deleted) when this function
    // returns, whichever way it returns.
    summarize(spooled.path(), config).await
}

/// Write uploaded bytes to a uniquely named temporary `.pdf` file.
///
/// The returned guard owns the file; dropping it removes the file.
pub(crate) fn spool_pdf_upload(bytes: &[u8]) -> Result<tempfile::NamedTempFile, SummarizeError> {
    let mut tmp = tempfile::Builder::new()
        .prefix("meetsum-upload-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| SummarizeError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| SummarizeError::Internal(format!("tempfile write: {e}")))?;
    tmp.flush()
        .map_err(|e| SummarizeError::Internal(format!("tempfile flush: {e}")))?;
    Ok(tmp)
}

/// Resolve the summarization provider, from most-specific to least-specific.
///
/// 1. **Pre-built provider** (`config.provider`) — the caller constructed
///    the collaborator entirely; used as-is (tests, middleware).
/// 2. **Explicit API key** (`config.api_key`) — a [`GeminiClient`] is built
///    with the configured timeout and sampling options.
/// 3. **`GOOGLE_API_KEY` environment variable** — same client, key from the
///    process environment.
fn resolve_provider(
    config: &SummarizeConfig,
) -> Result<Arc<dyn SummaryProvider>, SummarizeError> {
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }

    let api_key = match config.api_key.clone() {
        Some(key) => key,
        None => std::env::var("GOOGLE_API_KEY").map_err(|_| {
            SummarizeError::ProviderNotConfigured {
                hint: "Set GOOGLE_API_KEY or provide an api_key in SummarizeConfig.".into(),
            }
        })?,
    };

    let client = GeminiClient::new(
        api_key,
        config.api_timeout_secs,
        config.temperature,
        config.max_output_tokens,
    )?;
    Ok(Arc::new(client))
}
