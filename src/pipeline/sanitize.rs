//! Punctuation sanitization for generated summaries.
//!
//! The output PDF embeds the base-14 Helvetica fonts, whose standard
//! encoding cannot represent the typographic punctuation generative models
//! like to emit (curly quotes, em dashes, ellipsis characters). Each of
//! those is mapped to a plain-ASCII equivalent here; everything else passes
//! through untouched.
//!
//! The transform must be idempotent: it is the only normalisation applied
//! before rendering, and the orchestrator makes no promise about applying
//! it exactly once.

/// Unicode-to-ASCII replacement table.
///
/// Order is irrelevant — no replacement produces a character that another
/// rule consumes, which is what makes the transform idempotent.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{2018}', "'"),   // left single quotation mark
    ('\u{201C}', "\""),  // left double quotation mark
    ('\u{201D}', "\""),  // right double quotation mark
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2026}', "..."), // horizontal ellipsis
];

/// Replace typographic punctuation with ASCII equivalents.
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_smart_quotes() {
        assert_eq!(sanitize_text("\u{2018}hi\u{2019}"), "'hi'");
        assert_eq!(sanitize_text("\u{201C}hi\u{201D}"), "\"hi\"");
    }

    #[test]
    fn replaces_dashes_and_ellipsis() {
        assert_eq!(sanitize_text("a\u{2013}b\u{2014}c\u{2026}"), "a-b-c...");
    }

    #[test]
    fn passes_through_plain_text() {
        let text = "Plain ASCII text, with 'quotes' and \"more\" - unchanged...";
        assert_eq!(sanitize_text(text), text);
    }

    #[test]
    fn idempotent() {
        let input = "\u{2018}a\u{2019} \u{201C}b\u{201D} \u{2013} \u{2014} \u{2026} plain";
        let once = sanitize_text(input);
        let twice = sanitize_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_original_characters_survive() {
        let input = "\u{2019}\u{2018}\u{201C}\u{201D}\u{2013}\u{2014}\u{2026}";
        let out = sanitize_text(input);
        for (from, _) in REPLACEMENTS {
            assert!(!out.contains(*from), "U+{:04X} survived", *from as u32);
        }
    }

    #[test]
    fn preserves_other_unicode() {
        // Characters outside the table are not this module's concern.
        assert_eq!(sanitize_text("café"), "café");
    }
}
