//! Prompt construction for transcript summarization.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — the formatting contract between this
//!    service and the model (heading markers, the "Assigned Work" section,
//!    bold names) lives in exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the built prompt directly
//!    without calling a real model, making contract regressions easy to
//!    catch.
//!
//! The constraints below are a request, not a guarantee: the renderer in
//! [`crate::pipeline::classify`] stays tolerant of output that only loosely
//! follows them.

/// Instruction block appended after the transcript.
///
/// Asks for an attendee-briefing summary with attributed statements, an
/// explicit conclusion, per-takeaway subheadings, and a literal
/// "Assigned Work" section where participant names are bolded (and only
/// there). Meta-commentary framing and bullets before names are forbidden
/// because they render poorly in the output PDF.
pub const SUMMARY_INSTRUCTIONS: &str = "\
Please summarize this transcript as if someone at the meeting is telling someone outside the meeting. \
Highlight what specific people said and provide the conclusion of the meeting clearly. \
Generate all the precise Key Takeaways from the meeting with a precise subheading for each key takeaway. \
Don't use these kind of lines 'as if someone who attended is telling someone who didn't:'. \
Provide the assigned work for each participant mentioned in the meeting. \
Use the section header `Assigned Work` to present the tasks assigned to individuals. \
Don't use bullet points before person names. Bold the person name only in the Assigned Work \
section and do not make it bold in other sections. Add names and their work on new lines. \
Make section titles bold.";

/// Section title the model is required to emit verbatim.
pub const ASSIGNED_WORK_HEADER: &str = "Assigned Work";

/// Build the full summarization prompt for one transcript.
///
/// The transcript is embedded verbatim ahead of the instruction block so
/// the model reads the source material before the task description.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Here is a meeting transcript:\n{transcript}\n\n{SUMMARY_INSTRUCTIONS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_transcript_verbatim() {
        let prompt = build_summary_prompt("Alice: we ship on Friday.");
        assert!(prompt.contains("Alice: we ship on Friday."));
    }

    #[test]
    fn prompt_requests_assigned_work_section() {
        let prompt = build_summary_prompt("x");
        assert!(prompt.contains(ASSIGNED_WORK_HEADER));
    }

    #[test]
    fn prompt_forbids_meta_commentary() {
        assert!(SUMMARY_INSTRUCTIONS
            .contains("as if someone who attended is telling someone who didn't"));
    }

    #[test]
    fn prompt_requires_bold_section_titles() {
        assert!(SUMMARY_INSTRUCTIONS.contains("Make section titles bold"));
    }
}
