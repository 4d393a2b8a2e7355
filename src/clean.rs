//! Cleanup of reassembled paragraph text before display or translation.
//!
//! Operates on the `"\n\n"`-delimited output of [`crate::reflow::reassemble`]:
//! collapses whitespace runs, removes soft hyphens, expands Latin ligatures,
//! and optionally applies Unicode normalization, all while preserving the
//! paragraph structure.

use unicode_normalization::UnicodeNormalization;

use crate::paragraph::{PARAGRAPH_SEPARATOR, split_paragraphs};

/// Unicode normalization form to apply to cleaned text.
///
/// Different PDF generators may produce different Unicode representations
/// for the same visual text (e.g., composed vs. decomposed accented chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeNorm {
    /// No normalization (default).
    #[default]
    None,
    /// Canonical Decomposition, followed by Canonical Composition (NFC).
    Nfc,
    /// Canonical Decomposition (NFD).
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition (NFKC).
    Nfkc,
    /// Compatibility Decomposition (NFKD).
    Nfkd,
}

impl UnicodeNorm {
    /// Apply this normalization form to the given string.
    ///
    /// Returns the input unchanged if normalization is `None`.
    pub fn normalize(&self, text: &str) -> String {
        match self {
            UnicodeNorm::None => text.to_string(),
            UnicodeNorm::Nfc => text.nfc().collect(),
            UnicodeNorm::Nfd => text.nfd().collect(),
            UnicodeNorm::Nfkc => text.nfkc().collect(),
            UnicodeNorm::Nfkd => text.nfkd().collect(),
        }
    }
}

/// Options for paragraph cleanup.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Unicode normalization form applied after the other steps.
    pub normalization: UnicodeNorm,
    /// If true, expand common Latin ligatures (U+FB00–U+FB06) to their
    /// multi-character equivalents.
    pub expand_ligatures: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            normalization: UnicodeNorm::None,
            expand_ligatures: true,
        }
    }
}

/// Clean reassembled paragraph text while preserving paragraph structure.
///
/// Splits on the `"\n\n"` paragraph delimiter, drops blank paragraphs,
/// collapses internal whitespace runs to single spaces, removes soft
/// hyphens (U+00AD), expands ligatures and applies normalization per
/// `options`, then rejoins with the same delimiter.
pub fn clean_paragraphs(text: &str, options: &CleanOptions) -> String {
    let cleaned: Vec<String> = split_paragraphs(text)
        .into_iter()
        .map(|p| clean_paragraph(p, options))
        .collect();
    cleaned.join(PARAGRAPH_SEPARATOR)
}

fn clean_paragraph(paragraph: &str, options: &CleanOptions) -> String {
    let collapsed: String = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_soft_hyphens: String = collapsed.chars().filter(|c| *c != '\u{00AD}').collect();
    let expanded = if options.expand_ligatures {
        expand_ligatures_in_text(&without_soft_hyphens)
    } else {
        without_soft_hyphens
    };
    options.normalization.normalize(&expanded)
}

/// Expand common Latin ligatures (U+FB00–U+FB06) to their multi-character
/// equivalents.
fn expand_ligatures_in_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{FB00}' => result.push_str("ff"),
            '\u{FB01}' => result.push_str("fi"),
            '\u{FB02}' => result.push_str("fl"),
            '\u{FB03}' => result.push_str("ffi"),
            '\u{FB04}' => result.push_str("ffl"),
            '\u{FB05}' => result.push_str("\u{017F}t"), // long s + t
            '\u{FB06}' => result.push_str("st"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_internal_whitespace() {
        let result = clean_paragraphs("too   many\t spaces", &CleanOptions::default());
        assert_eq!(result, "too many spaces");
    }

    #[test]
    fn test_preserves_paragraph_structure() {
        let text = "first  paragraph\n\nsecond   paragraph";
        let result = clean_paragraphs(text, &CleanOptions::default());
        assert_eq!(result, "first paragraph\n\nsecond paragraph");
    }

    #[test]
    fn test_drops_blank_paragraphs() {
        let text = "kept\n\n   \n\nalso kept";
        let result = clean_paragraphs(text, &CleanOptions::default());
        assert_eq!(result, "kept\n\nalso kept");
    }

    #[test]
    fn test_removes_soft_hyphens() {
        let result = clean_paragraphs("hy\u{00AD}phen\u{00AD}ated", &CleanOptions::default());
        assert_eq!(result, "hyphenated");
    }

    #[test]
    fn test_expands_fi_and_fl_ligatures() {
        let result = clean_paragraphs("\u{FB01}rst \u{FB02}oor", &CleanOptions::default());
        assert_eq!(result, "first floor");
    }

    #[test]
    fn test_all_seven_ligatures_expanded() {
        let ligatures = [
            ("\u{FB00}", "ff"),
            ("\u{FB01}", "fi"),
            ("\u{FB02}", "fl"),
            ("\u{FB03}", "ffi"),
            ("\u{FB04}", "ffl"),
            ("\u{FB05}", "\u{017F}t"),
            ("\u{FB06}", "st"),
        ];
        for (lig, expanded) in ligatures {
            assert_eq!(
                clean_paragraphs(lig, &CleanOptions::default()),
                expanded,
                "ligature {lig} should expand to {expanded:?}"
            );
        }
    }

    #[test]
    fn test_ligatures_preserved_when_disabled() {
        let options = CleanOptions {
            expand_ligatures: false,
            ..CleanOptions::default()
        };
        assert_eq!(clean_paragraphs("\u{FB01}nd", &options), "\u{FB01}nd");
    }

    #[test]
    fn test_nfc_normalization() {
        let options = CleanOptions {
            normalization: UnicodeNorm::Nfc,
            ..CleanOptions::default()
        };
        // "café" in NFD (e + combining acute) composes to U+00E9
        let result = clean_paragraphs("caf\u{0065}\u{0301}", &options);
        assert_eq!(result, "caf\u{00E9}");
    }

    #[test]
    fn test_nfkc_expands_ligatures_without_table() {
        let options = CleanOptions {
            normalization: UnicodeNorm::Nfkc,
            expand_ligatures: false,
        };
        assert_eq!(clean_paragraphs("\u{FB01}nd", &options), "find");
    }

    #[test]
    fn test_unicode_norm_default_is_none() {
        assert_eq!(UnicodeNorm::default(), UnicodeNorm::None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_paragraphs("", &CleanOptions::default()), "");
    }
}
