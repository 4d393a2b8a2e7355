use crate::fragment::{Fragment, reading_order};

/// Options for paragraph reassembly.
#[derive(Debug, Clone)]
pub struct ReflowOptions {
    /// Vertical gap (in points) above which consecutive fragments are split
    /// into separate paragraphs. Must be positive; the UI constrains it to
    /// 0.1–50.0. Non-positive values are out of contract.
    pub spacing_threshold: f64,
    /// A gap larger than `spacing_threshold * section_gap_factor` marks a
    /// section break rather than an ordinary paragraph break.
    pub section_gap_factor: f64,
    /// A fragment taller than the previous one by more than this ratio is
    /// treated as heading-like text starting a new section.
    pub heading_height_ratio: f64,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            spacing_threshold: 3.0,
            section_gap_factor: 2.0,
            heading_height_ratio: 1.2,
        }
    }
}

impl ReflowOptions {
    /// Options with the given spacing threshold and default heuristics.
    pub fn with_threshold(spacing_threshold: f64) -> Self {
        Self {
            spacing_threshold,
            ..Self::default()
        }
    }
}

/// Classification of the transition between one fragment and the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Same paragraph: joined to the previous fragment with a single space.
    Continuation,
    /// Ordinary paragraph break: vertical gap exceeded the threshold.
    Paragraph,
    /// Section break: heading-like signal (large gap, taller text, trailing
    /// colon, or all-caps). Forces an extra blank separator internally.
    Section,
}

/// Classify the transition into a fragment given the gap and height ratio
/// relative to the previous fragment.
///
/// `text` is the current fragment's content after hyphen stripping. The
/// section signals intentionally over-trigger on headings, labels, and
/// all-caps text: such text is visually set apart in the source document,
/// and an extra blank line costs little for ordinary body text.
pub fn classify_transition(
    vertical_gap: f64,
    height_ratio: f64,
    text: &str,
    options: &ReflowOptions,
) -> Transition {
    let large_gap = vertical_gap > options.spacing_threshold * options.section_gap_factor;
    let taller_block = height_ratio > options.heading_height_ratio;
    let ends_with_colon = text.trim().ends_with(':');
    let all_caps = is_all_caps(text);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        vertical_gap,
        height_ratio,
        large_gap,
        taller_block,
        ends_with_colon,
        all_caps,
        text,
        "transition signals"
    );

    if large_gap || taller_block || ends_with_colon || all_caps {
        Transition::Section
    } else if vertical_gap > options.spacing_threshold {
        Transition::Paragraph
    } else {
        Transition::Continuation
    }
}

/// Returns `true` if the text has at least one uppercase letter and no
/// lowercase letters.
///
/// Matches Python `str.isupper` semantics: purely numeric or punctuation
/// text is not all-caps, so numeric labels do not register as headings.
fn is_all_caps(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// Strip a single trailing hyphen left over from a line-wrap.
///
/// No dictionary check and no rejoining of the split word: the hyphen is
/// dropped and the halves stay separated by the normal join space. A lossy
/// simplification, not a linguistic dehyphenator.
fn strip_line_wrap_hyphen(text: &str) -> &str {
    text.strip_suffix('-').unwrap_or(text)
}

/// Reassemble text fragments from a page region into paragraph text.
///
/// Fragments are linearized into reading order (top-to-bottom, then
/// left-to-right), then scanned once. Consecutive fragments whose vertical
/// gap stays within `spacing_threshold` are joined with single spaces into
/// one paragraph; a larger gap starts a new paragraph; heading-like signals
/// (see [`classify_transition`]) start a new section with an extra blank
/// separator. Paragraphs are trimmed, blanks dropped, and the survivors
/// joined with `"\n\n"`.
///
/// An empty input yields an empty string. Running the function twice over
/// the same input always yields the identical string: there is no hidden
/// state. NaN or negative geometry is out of contract.
pub fn reassemble(fragments: &[Fragment], options: &ReflowOptions) -> String {
    if fragments.is_empty() {
        return String::new();
    }

    let mut ordered: Vec<&Fragment> = fragments.iter().collect();
    ordered.sort_by(|a, b| reading_order(a, b));

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current_lines: Vec<&str> = Vec::new();
    let mut previous: Option<(f64, f64)> = None; // (top, height)

    for fragment in ordered {
        let text = strip_line_wrap_hyphen(&fragment.text);
        let top = fragment.bbox.top;
        let height = fragment.height();

        match previous {
            None => current_lines.push(text),
            Some((prev_top, prev_height)) => {
                let vertical_gap = (top - prev_top).abs();
                // Zero previous height is degenerate single-line text, not
                // a division error.
                let height_ratio = if prev_height != 0.0 {
                    height / prev_height
                } else {
                    1.0
                };

                match classify_transition(vertical_gap, height_ratio, text, options) {
                    Transition::Section => {
                        paragraphs.push(current_lines.join(" "));
                        // Empty marker forces the extra blank separator that
                        // sets section breaks apart in intermediate state.
                        paragraphs.push(String::new());
                        current_lines = vec![text];
                    }
                    Transition::Paragraph => {
                        paragraphs.push(current_lines.join(" "));
                        current_lines = vec![text];
                    }
                    Transition::Continuation => current_lines.push(text),
                }
            }
        }

        previous = Some((top, height));
    }

    if !current_lines.is_empty() {
        paragraphs.push(current_lines.join(" "));
    }

    let surviving: Vec<&str> = paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();

    surviving.join("\n\n")
}
