//! Pipeline stages for transcript-to-summary-PDF conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap
//! implementations (e.g. a different generative provider) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! extract ──▶ prompt ──▶ generate ──▶ sanitize ──▶ classify ──▶ render
//! (lopdf)    (string)   (Gemini)     (ASCII)      (per line)   (lopdf)
//! ```
//!
//! 1. [`extract`]  — pull page text out of the uploaded transcript PDF;
//!    runs in `spawn_blocking` because lopdf parsing is CPU-bound
//! 2. [`crate::prompts`] — embed the transcript in the instruction prompt
//! 3. [`generate`] — call the generative-language API; the only stage with
//!    network I/O
//! 4. [`sanitize`] — normalise typographic punctuation to ASCII so the
//!    output font can render every character
//! 5. [`classify`] — map each summary line to a style category
//! 6. [`render`]   — author the formatted summary PDF

pub mod classify;
pub mod extract;
pub mod generate;
pub mod render;
pub mod sanitize;
