pub mod api;
pub mod classify;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod extraction;
pub mod types;

pub use api::{suggest_panel, LabReport, LabReportAnalyzer, PanelSuggestion, TestResult};
pub use classify::{classify, classify_default, fit_to_range, note_for, DEFAULT_BORDERLINE_PCT};
pub use cli::report::TextReport;
pub use dictionary::resolve::{normalize_label, resolve};
pub use dictionary::units::{convert_to_canonical, normalize_unit, unit_for};
pub use dictionary::Dictionary;
pub use error::{LabscanError, Result};
pub use extraction::{extract, extract_values, lines_from_json, OcrText};
pub use types::*;
