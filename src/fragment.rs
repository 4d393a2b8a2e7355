use std::cmp::Ordering;

/// Bounding box with top-left origin coordinate system.
///
/// Coordinates are in document points:
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box. Zero is legal (degenerate single-line text).
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// One observed run of text on a page, as produced by a page text extractor.
///
/// The extractor owns segmentation granularity; this crate only consumes
/// fragments and never mutates their geometry. Extraction order is not
/// assumed to be reading order — see [`reading_order`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// Raw text content. May carry a trailing hyphen from a line-wrap.
    pub text: String,
    /// Bounding box in top-left origin coordinates.
    pub bbox: BBox,
}

impl Fragment {
    pub fn new(text: impl Into<String>, x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            text: text.into(),
            bbox: BBox::new(x0, top, x1, bottom),
        }
    }

    /// Height of this fragment's bounding box.
    pub fn height(&self) -> f64 {
        self.bbox.height()
    }
}

/// Reading-order comparator: top-to-bottom, then left-to-right.
///
/// PDF extraction order is not guaranteed to match reading order for
/// multi-column or irregular layouts, so geometric ordering is authoritative.
/// NaN coordinates are out of contract; ties on NaN collapse to `Equal`.
pub fn reading_order(a: &Fragment, b: &Fragment) -> Ordering {
    a.bbox
        .top
        .partial_cmp(&b.bbox.top)
        .unwrap_or(Ordering::Equal)
        .then(
            a.bbox
                .x0
                .partial_cmp(&b.bbox.x0)
                .unwrap_or(Ordering::Equal),
        )
}
