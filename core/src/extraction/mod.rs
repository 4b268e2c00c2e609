pub mod ocr;
pub mod patterns;
pub mod values;

pub use ocr::{lines_from_json, OcrText};
pub use patterns::{scan_patterns, PatternKind, ScanPattern};
pub use values::{extract, extract_values};
