//! Paragraph-level utilities for the presentation and translation layers.
//!
//! Reassembled text uses `"\n\n"` as its only structural markup. Translation
//! re-splits on that delimiter, translates each paragraph independently, and
//! rejoins with the same delimiter; [`split_paragraphs`] and
//! [`join_paragraphs`] preserve that round trip exactly.

/// Delimiter between paragraphs in reassembled text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Maximum word count for a paragraph to qualify as a heading.
const HEADING_MAX_WORDS: usize = 7;

/// Split reassembled text into its non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Join paragraphs back into a single `"\n\n"`-delimited string.
pub fn join_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = paragraphs
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .collect();
    parts.join(PARAGRAPH_SEPARATOR)
}

/// Shape-based classification of a reassembled paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParagraphKind {
    /// Heading or title: short, all-caps, or colon-terminated text.
    Heading,
    /// Ordinary body text.
    Body,
}

/// Classify a paragraph as heading-like or body text.
///
/// A paragraph reads as a heading when it has at most seven words, is
/// entirely upper-case (with at least one cased letter), or ends with a
/// colon. Used by presentation layers to style titles differently.
pub fn classify_paragraph(paragraph: &str) -> ParagraphKind {
    let trimmed = paragraph.trim();
    let word_count = trimmed.split_whitespace().count();
    let has_upper = trimmed.chars().any(|c| c.is_uppercase());
    let has_lower = trimmed.chars().any(|c| c.is_lowercase());

    if word_count <= HEADING_MAX_WORDS || (has_upper && !has_lower) || trimmed.ends_with(':') {
        ParagraphKind::Heading
    } else {
        ParagraphKind::Body
    }
}
