//! pdfreflow: Reassemble extracted PDF text fragments into paragraph text.
//!
//! A page text extractor hands over axis-aligned text fragments (bounding
//! box plus raw text) from a page or a selected region; this crate
//! linearizes them into reading order and reconstructs semantically
//! correct paragraphs and headings, ready for display or paragraph-wise
//! machine translation.
//!
//! - [`reflow::reassemble`] — the core single-pass reassembly over
//!   fragments sorted top-to-bottom, left-to-right, splitting paragraphs
//!   on vertical gaps and sections on heading-like signals.
//! - [`spacing::estimate_spacing`] — suggests a line-spacing threshold for
//!   the reassembler from the vertical layout of a full page.
//! - [`clean::clean_paragraphs`] — whitespace/soft-hyphen/ligature cleanup
//!   that preserves paragraph structure.
//! - [`paragraph`] — split/join helpers for the `"\n\n"` paragraph
//!   delimiter and a shape-based heading classifier.
//!
//! All routines are pure, synchronous functions over in-memory slices:
//! no I/O, no shared state, safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use pdfreflow::{Fragment, ReflowOptions, reassemble};
//!
//! let fragments = vec![
//!     Fragment::new("The quick", 0.0, 0.0, 80.0, 10.0),
//!     Fragment::new("brown fox.", 0.0, 2.0, 80.0, 12.0),
//! ];
//! let text = reassemble(&fragments, &ReflowOptions::with_threshold(3.0));
//! assert_eq!(text, "The quick brown fox.");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` derives on the public data types.
//! - `tracing`: trace-level events at each classification decision.

pub mod clean;
pub mod fragment;
pub mod paragraph;
pub mod reflow;
pub mod spacing;

pub use clean::{CleanOptions, UnicodeNorm, clean_paragraphs};
pub use fragment::{BBox, Fragment, reading_order};
pub use paragraph::{
    PARAGRAPH_SEPARATOR, ParagraphKind, classify_paragraph, join_paragraphs, split_paragraphs,
};
pub use reflow::{ReflowOptions, Transition, classify_transition, reassemble};
pub use spacing::estimate_spacing;
