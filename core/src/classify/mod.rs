//! Value classification against reference ranges
//!
//! Pure functions over a [`Dictionary`](crate::dictionary::Dictionary):
//! OCR decimal-shift correction, clinical status banding, and advisory
//! note lookup. Every function is total; malformed input degrades to an
//! identity or `Unknown` result instead of an error.

pub mod magnitude;
pub mod notes;
pub mod status;

pub use magnitude::fit_to_range;
pub use notes::note_for;
pub use status::{classify, classify_default, DEFAULT_BORDERLINE_PCT};
