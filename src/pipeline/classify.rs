//! Line classification for the formatted renderer.
//!
//! The summary text loosely follows the markup conventions requested in the
//! prompt: `###`/`####` heading markers, `**bold**` wrapping, trailing-colon
//! labels, and `Name:` speaker attributions. "Loosely" is the operative
//! word — the model is under no structural obligation, so classification
//! must never fail; an unrecognised line is simply body text.
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! The order matters: `### Conclusion:` is a heading, not a label, because
//! the heading rule is checked first.

/// Style category of one summary line.
///
/// Each category maps to a (boldness, font size) pair in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Attribution line for a recognized speaker. Bold, body size.
    Speaker,
    /// `####` minor heading. Bold, body size.
    SubHeading,
    /// `###` section heading. Bold, title size.
    Heading,
    /// `**…**`-wrapped line. Bold, emphasis size.
    Emphasis,
    /// Trailing-colon label. Bold, label size.
    Label,
    /// Blank line. Half line height of vertical space, no text drawn.
    Spacer,
    /// Plain body text.
    Body,
}

impl LineClass {
    /// Whether the category renders in the bold font.
    pub fn is_bold(self) -> bool {
        !matches!(self, LineClass::Body | LineClass::Spacer)
    }

    /// Font size in points for the category.
    pub fn font_size(self) -> i64 {
        match self {
            LineClass::Heading => 18,
            LineClass::Emphasis => 14,
            LineClass::Label => 13,
            LineClass::Speaker | LineClass::SubHeading | LineClass::Body | LineClass::Spacer => 12,
        }
    }
}

/// One summary line after classification, with markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub text: String,
    pub class: LineClass,
}

/// Classify one line of sanitized summary text.
///
/// The line is trimmed first; marker stripping removes every occurrence of
/// the matched marker sequence and trims again.
pub fn classify_line(line: &str, speaker_labels: &[String]) -> RenderLine {
    let line = line.trim();

    if speaker_labels
        .iter()
        .any(|label| !label.is_empty() && line.contains(&format!("{label}:")))
    {
        return RenderLine {
            text: line.to_string(),
            class: LineClass::Speaker,
        };
    }

    if line.starts_with("####") {
        return RenderLine {
            text: line.replace("####", "").trim().to_string(),
            class: LineClass::SubHeading,
        };
    }

    if line.starts_with("###") {
        return RenderLine {
            text: line.replace("###", "").trim().to_string(),
            class: LineClass::Heading,
        };
    }

    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return RenderLine {
            text: line.replace("**", "").trim().to_string(),
            class: LineClass::Emphasis,
        };
    }

    if line.ends_with(':') {
        return RenderLine {
            text: line.to_string(),
            class: LineClass::Label,
        };
    }

    if line.is_empty() {
        return RenderLine {
            text: String::new(),
            class: LineClass::Spacer,
        };
    }

    RenderLine {
        text: line.to_string(),
        class: LineClass::Body,
    }
}

/// Classify every line of a summary, in order.
pub fn classify_summary(summary: &str, speaker_labels: &[String]) -> Vec<RenderLine> {
    summary
        .trim()
        .split('\n')
        .map(|line| classify_line(line, speaker_labels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn heading_marker_stripped_and_sized() {
        let line = classify_line("### Conclusion", &[]);
        assert_eq!(line.class, LineClass::Heading);
        assert_eq!(line.text, "Conclusion");
        assert!(line.class.is_bold());
        assert_eq!(line.class.font_size(), 18);
    }

    #[test]
    fn subheading_outranks_heading() {
        let line = classify_line("#### Budget follow-up", &[]);
        assert_eq!(line.class, LineClass::SubHeading);
        assert_eq!(line.text, "Budget follow-up");
        assert_eq!(line.class.font_size(), 12);
    }

    #[test]
    fn emphasis_markers_stripped() {
        let line = classify_line("**Key Takeaway**", &[]);
        assert_eq!(line.class, LineClass::Emphasis);
        assert_eq!(line.text, "Key Takeaway");
        assert_eq!(line.class.font_size(), 14);
    }

    #[test]
    fn trailing_colon_is_a_label() {
        let line = classify_line("Action Items:", &[]);
        assert_eq!(line.class, LineClass::Label);
        assert_eq!(line.text, "Action Items:");
        assert_eq!(line.class.font_size(), 13);
    }

    #[test]
    fn empty_line_is_a_spacer() {
        let line = classify_line("   ", &[]);
        assert_eq!(line.class, LineClass::Spacer);
        assert!(line.text.is_empty());
        assert!(!line.class.is_bold());
    }

    #[test]
    fn plain_text_is_body() {
        let line = classify_line("The deadline moved to Friday.", &[]);
        assert_eq!(line.class, LineClass::Body);
        assert!(!line.class.is_bold());
    }

    #[test]
    fn speaker_rule_wins_over_everything() {
        let line = classify_line("### John: we need more time", &labels(&["John"]));
        assert_eq!(line.class, LineClass::Speaker);
        // Speaker lines keep their text verbatim, markers included.
        assert_eq!(line.text, "### John: we need more time");
    }

    #[test]
    fn speaker_rule_needs_the_colon() {
        let line = classify_line("John mentioned the budget.", &labels(&["John"]));
        assert_eq!(line.class, LineClass::Body);
    }

    #[test]
    fn unconfigured_speaker_is_not_matched() {
        let line = classify_line("John: status update", &[]);
        // Ends with neither colon-at-end nor marker; it's body text.
        assert_eq!(line.class, LineClass::Body);
    }

    #[test]
    fn heading_beats_label_on_overlap() {
        // A heading that also ends with a colon stays a heading.
        let line = classify_line("### Conclusion:", &[]);
        assert_eq!(line.class, LineClass::Heading);
        assert_eq!(line.text, "Conclusion:");
    }

    #[test]
    fn bare_bold_marker_is_not_emphasis() {
        let line = classify_line("**", &[]);
        assert_eq!(line.class, LineClass::Body);
    }

    #[test]
    fn summary_lines_kept_in_order() {
        let summary = "### Title\n\n**Point**\nBody text";
        let lines = classify_summary(summary, &[]);
        let classes: Vec<LineClass> = lines.iter().map(|l| l.class).collect();
        assert_eq!(
            classes,
            vec![
                LineClass::Heading,
                LineClass::Spacer,
                LineClass::Emphasis,
                LineClass::Body
            ]
        );
    }
}
