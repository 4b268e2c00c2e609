//! Scan pattern table
//!
//! Tagged patterns with named `label`/`value` captures, compiled once and
//! shared. Keeping the table separate from the scanning loop lets each
//! pattern be unit-tested on its own and new report layouts be added
//! without touching extraction logic.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern category, scanned in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Hand-built patterns for common hematology report phrasing
    Domain,
    /// Loose token/number fallback for labels the domain set misses
    Generic,
}

/// A compiled scan pattern with named `label` and `value` captures
#[derive(Debug)]
pub struct ScanPattern {
    pub kind: PatternKind,
    regex: Regex,
}

impl ScanPattern {
    fn new(kind: PatternKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("Failed to compile scan pattern"),
        }
    }

    /// Yields every (label, value) capture pair in `text`
    pub fn captures<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (&'t str, &'t str)> + 't {
        self.regex.captures_iter(text).filter_map(|c| {
            let label = c.name("label")?.as_str();
            let value = c.name("value")?.as_str();
            Some((label, value))
        })
    }
}

// Recognized label token, then a number within a short non-digit window.
// The window absorbs separators, flags and unit fragments between the
// label and its value ("HGB : 13.4", "WBC (EDTA)  6.2").
const DOMAIN_PATTERN: &str = r"(?i)\b(?P<label>RBC|WBC|HGB|HB|HCT|MCV|MCHC|MCH|RDW|PLT|PLATELETS?|NEUTROPHILS|NEUT|SEGMENTED NEUTROPHILS|LYMPHOCYTES|LYMPH|MONOCYTES|MONO|EOSINOPHILS|EOS|BASOPHILS|BASO)\b[^0-9]{0,18}(?P<value>[0-9]+(?:\.[0-9]+)?)";

// Short alphanumeric token, optional ":"/"=" separator, number
const GENERIC_PATTERN: &str =
    r"(?P<label>[A-Z][A-Z0-9]{1,15})\s*[:=]?\s*(?P<value>[0-9]+(?:\.[0-9]+)?)";

/// The scan pattern table, domain patterns first
pub fn scan_patterns() -> &'static [ScanPattern] {
    static PATTERNS: OnceLock<Vec<ScanPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            ScanPattern::new(PatternKind::Domain, DOMAIN_PATTERN),
            ScanPattern::new(PatternKind::Generic, GENERIC_PATTERN),
        ]
    })
}
