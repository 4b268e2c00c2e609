use std::fmt;

/// A test value detected in OCR text
///
/// Pairs a canonical key with the first raw numeric string found for it.
/// The raw string is kept unconverted for audit and display; magnitude
/// correction happens downstream, not at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExtractedValue {
    /// Canonical test key (always present in the dictionary)
    pub key: &'static str,

    /// Raw numeric string as captured from the OCR text
    pub raw: String,
}

impl ExtractedValue {
    /// Creates a new extracted value
    pub fn new(key: &'static str, raw: impl Into<String>) -> Self {
        Self {
            key,
            raw: raw.into(),
        }
    }

    /// Parses the raw string as a number
    ///
    /// Accepts a comma decimal separator ("13,4" parses as 13.4, a common
    /// OCR artifact on reports from comma-decimal locales). Unparseable
    /// input yields NaN, which downstream classification treats as Unknown.
    pub fn numeric(&self) -> f64 {
        parse_raw_number(&self.raw)
    }
}

impl fmt::Display for ExtractedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.raw)
    }
}

/// Parses a raw OCR numeric string, tolerating a comma decimal separator
///
/// Returns NaN when the string is not a number; callers treat non-finite
/// values as the terminal "Unknown" case rather than an error.
pub fn parse_raw_number(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN)
}
