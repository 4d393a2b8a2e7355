use crate::fragment::Fragment;

/// Multiplier applied to the median line gap so the suggested threshold
/// leans toward not over-splitting ordinary paragraphs.
const MEDIAN_BUFFER: f64 = 1.2;

/// Estimate a line-spacing threshold from the vertical layout of a page.
///
/// Takes the full-page fragment list (not clipped to a selection), sorts
/// the top coordinates, and measures the gaps between consecutive ones.
/// Zero gaps are noise from overlapping or duplicate fragments and are
/// discarded. The suggested threshold is the median of the remaining gaps
/// times a 1.2 buffer; the median is robust against the handful of
/// anomalously large gaps at section breaks and between columns.
///
/// Returns `None` when fewer than two distinct vertical positions exist,
/// so the caller can keep its prior threshold and report the failure.
///
/// For an even number of gaps the element at index `n / 2` of the
/// ascending-sorted gaps is used, not an average of the two middle values.
pub fn estimate_spacing(fragments: &[Fragment]) -> Option<f64> {
    let mut tops: Vec<f64> = fragments.iter().map(|f| f.bbox.top).collect();
    tops.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut gaps: Vec<f64> = tops
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .filter(|gap| *gap > 0.0)
        .collect();

    if gaps.is_empty() {
        return None;
    }

    gaps.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = gaps[gaps.len() / 2];

    #[cfg(feature = "tracing")]
    tracing::trace!(
        fragments = fragments.len(),
        nonzero_gaps = gaps.len(),
        median,
        suggested = median * MEDIAN_BUFFER,
        "estimated line spacing"
    );

    Some(median * MEDIAN_BUFFER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag_at(top: f64) -> Fragment {
        Fragment::new("line", 0.0, top, 100.0, top + 10.0)
    }

    #[test]
    fn test_empty_page_is_undetectable() {
        assert_eq!(estimate_spacing(&[]), None);
    }

    #[test]
    fn test_single_fragment_is_undetectable() {
        assert_eq!(estimate_spacing(&[frag_at(12.0)]), None);
    }

    #[test]
    fn test_duplicate_positions_only_is_undetectable() {
        // All gaps are zero: overlapping/duplicate fragments, no real line gap.
        let frags = vec![frag_at(10.0), frag_at(10.0), frag_at(10.0)];
        assert_eq!(estimate_spacing(&frags), None);
    }

    #[test]
    fn test_uniform_spacing() {
        let frags = vec![frag_at(0.0), frag_at(12.0), frag_at(24.0), frag_at(36.0)];
        // All gaps are 12; median 12 times the 1.2 buffer
        assert_eq!(estimate_spacing(&frags), Some(12.0 * 1.2));
    }

    #[test]
    fn test_odd_gap_count_takes_middle() {
        // tops [0, 3, 3, 7, 20] → nonzero gaps [3, 4, 13] → median 4
        let frags = vec![
            frag_at(0.0),
            frag_at(3.0),
            frag_at(3.0),
            frag_at(7.0),
            frag_at(20.0),
        ];
        assert_eq!(estimate_spacing(&frags), Some(4.0 * 1.2));
    }

    #[test]
    fn test_even_gap_count_takes_upper_middle_element() {
        // tops [0, 2, 6, 13, 23] → gaps [2, 4, 7, 10] → sorted[4/2] = 7.
        // The n/2 index rule picks one element, never the average (5.5).
        let frags = vec![
            frag_at(0.0),
            frag_at(2.0),
            frag_at(6.0),
            frag_at(13.0),
            frag_at(23.0),
        ];
        assert_eq!(estimate_spacing(&frags), Some(7.0 * 1.2));
    }

    #[test]
    fn test_median_robust_against_section_gaps() {
        // Body lines 12pt apart with one 80pt section gap; the outlier
        // must not drag the estimate upward the way a mean would.
        let frags = vec![
            frag_at(0.0),
            frag_at(12.0),
            frag_at(24.0),
            frag_at(104.0),
            frag_at(116.0),
            frag_at(128.0),
        ];
        // gaps sorted: [12, 12, 12, 12, 80] → median 12
        assert_eq!(estimate_spacing(&frags), Some(12.0 * 1.2));
    }

    #[test]
    fn test_unsorted_input_positions() {
        // Positions arrive in extraction order; the estimator sorts them.
        let frags = vec![frag_at(24.0), frag_at(0.0), frag_at(12.0)];
        assert_eq!(estimate_spacing(&frags), Some(12.0 * 1.2));
    }
}
