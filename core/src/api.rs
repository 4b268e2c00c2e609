use std::collections::BTreeMap;

use regex::Regex;
use std::sync::OnceLock;

use crate::classify::{classify, fit_to_range, note_for, DEFAULT_BORDERLINE_PCT};
use crate::dictionary::resolve::{normalize_label, resolve};
use crate::dictionary::tables::CBC_CORE_KEYS;
use crate::dictionary::units::unit_for;
use crate::dictionary::Dictionary;
use crate::extraction::values::extract;
use crate::extraction::OcrText;
use crate::types::{parse_raw_number, RangeStatus};

/// Main analyzer for OCR-extracted lab reports
///
/// Binds a [`Dictionary`] and a borderline-band percentage, and runs the
/// full pipeline: value extraction, decimal-shift correction, range
/// classification, unit and note lookup.
///
/// # Example
///
/// ```
/// use labscan_core::{LabReportAnalyzer, OcrText};
///
/// let analyzer = LabReportAnalyzer::new();
/// let text = OcrText::from_lines(["HGB 13.4 g/dL", "WBC 6.2"]);
/// let report = analyzer.analyze(&text);
///
/// assert_eq!(report.results.len(), 2);
/// let hgb = &report.results[0];
/// assert_eq!(hgb.key, "HGB");
/// assert_eq!(hgb.unit, "g/dL");
/// assert_eq!(hgb.status.simple_name(), "Normal");
/// ```
pub struct LabReportAnalyzer<'a> {
    dict: &'a Dictionary,
    borderline_pct: f64,
}

impl Default for LabReportAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl LabReportAnalyzer<'static> {
    /// Creates an analyzer over the standard dictionary
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::standard())
    }
}

impl<'a> LabReportAnalyzer<'a> {
    /// Creates an analyzer over an explicit dictionary
    pub fn with_dictionary(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            borderline_pct: DEFAULT_BORDERLINE_PCT,
        }
    }

    /// Sets the borderline band percentage (default 5)
    pub fn with_borderline_pct(mut self, borderline_pct: f64) -> Self {
        self.borderline_pct = borderline_pct;
        self
    }

    /// Analyzes prepared OCR text into a lab report
    ///
    /// Extracted raw values are parsed (tolerating comma decimals),
    /// magnitude-corrected against the reference range, rounded to two
    /// decimals, classified, and annotated. Results come out in dictionary
    /// declaration order.
    pub fn analyze(&self, text: &OcrText) -> LabReport {
        let extracted = extract(self.dict, text);
        let results: Vec<TestResult> = extracted
            .iter()
            .map(|v| self.build_result(v.key, &v.raw, true))
            .collect();

        let extracted_keys: BTreeMap<&str, ()> =
            extracted.iter().map(|v| (v.key, ())).collect();
        let suggestion = suggest_panel(self.dict, &extracted_keys, text.joined());

        LabReport {
            results,
            suggestion,
        }
    }

    /// Convenience wrapper: analyze a list of OCR lines
    pub fn analyze_lines<I, S>(&self, lines: I) -> LabReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.analyze(&OcrText::from_lines(lines))
    }

    /// Reclassifies a stored key/value map, re-resolving keys best-effort
    ///
    /// Stored records predate dictionary changes, so keys are resolved
    /// again on read; entries whose key no longer resolves surface with
    /// `Unknown` status instead of being dropped. Stored values are taken
    /// as-is - no magnitude correction, since the user may have edited
    /// them deliberately.
    pub fn reclassify_stored<'s, I>(&self, stored: I) -> Vec<TestResult>
    where
        I: IntoIterator<Item = (&'s str, &'s str)>,
    {
        stored
            .into_iter()
            .map(|(label, raw)| self.build_result(label, raw, false))
            .collect()
    }

    fn build_result(&self, label: &str, raw: &str, correct_magnitude: bool) -> TestResult {
        let resolved = resolve(self.dict, label);
        let key = resolved
            .map(str::to_string)
            .unwrap_or_else(|| normalize_label(label));

        let parsed = parse_raw_number(raw);
        let corrected = if correct_magnitude {
            fit_to_range(self.dict, &key, parsed)
        } else {
            parsed
        };
        let value = corrected.is_finite().then(|| round2(corrected));

        let status = classify(
            self.dict,
            &key,
            value.unwrap_or(f64::NAN),
            self.borderline_pct,
        );

        TestResult {
            name: resolved
                .and_then(|k| self.dict.display_name(k))
                .map(str::to_string)
                .unwrap_or_else(|| label.to_string()),
            unit: unit_for(self.dict, &key).to_string(),
            note: note_for(self.dict, &key, status).map(str::to_string),
            raw: raw.to_string(),
            key,
            value,
            status,
        }
    }
}

/// One normalized test result
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TestResult {
    /// Canonical key, or the normalized label when resolution failed
    pub key: String,

    /// Human-readable test name
    pub name: String,

    /// Raw value string as captured or stored
    pub raw: String,

    /// Corrected numeric value, rounded to two decimals; `None` when the
    /// raw string was not a number
    pub value: Option<f64>,

    /// Display unit; empty string means "omit unit in display"
    pub unit: String,

    /// Clinical range status
    pub status: RangeStatus,

    /// Advisory note; always absent for `Normal`
    pub note: Option<String>,
}

/// Analyzed lab report: normalized results plus a panel suggestion
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LabReport {
    pub results: Vec<TestResult>,
    pub suggestion: Option<PanelSuggestion>,
}

/// Suggested test-panel name for a scanned report
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PanelSuggestion {
    pub name: String,
    pub category: Option<String>,
}

/// Suggests a panel name from detected keys and the joined report text
///
/// An explicit whole-word "CBC" mention, or at least four extracted CBC
/// core values, suggests the CBC panel. Otherwise detected keys are scored
/// (+3 when a value was extracted, +1 per whole-word occurrence, +0.5 for
/// keys of length >= 4) and the best-scoring key is suggested; first wins
/// on ties.
pub fn suggest_panel(
    dict: &Dictionary,
    extracted: &BTreeMap<&str, ()>,
    joined: &str,
) -> Option<PanelSuggestion> {
    static CBC: OnceLock<Regex> = OnceLock::new();
    let cbc = CBC.get_or_init(|| Regex::new(r"\bCBC\b").expect("Failed to compile regex"));

    let core_hits = CBC_CORE_KEYS
        .iter()
        .filter(|k| extracted.contains_key(**k))
        .count();
    if cbc.is_match(joined) || core_hits >= 4 {
        return Some(PanelSuggestion {
            name: "CBC".to_string(),
            category: Some("Blood".to_string()),
        });
    }

    let mut best: Option<(&str, f64)> = None;
    for entry in dict.entries() {
        if !joined.contains(entry.key) {
            continue;
        }
        let mut score = 0.0;
        if extracted.contains_key(entry.key) {
            score += 3.0;
        }
        score += word_occurrences(joined, entry.key) as f64;
        if entry.key.len() >= 4 {
            score += 0.5;
        }
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((entry.key, score));
        }
    }

    best.map(|(key, _)| PanelSuggestion {
        name: key.to_string(),
        category: None,
    })
}

fn word_occurrences(text: &str, key: &str) -> usize {
    // Keys are uppercase alphanumeric, safe to embed in a pattern
    match Regex::new(&format!(r"\b{}\b", key)) {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_corrects_and_classifies() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(["HGB 134", "WBC 6.2"]);

        let hgb = report
            .results
            .iter()
            .find(|r| r.key == "HGB")
            .expect("HGB extracted");
        // 134 is a dropped decimal point: corrected to 13.4
        assert_eq!(hgb.value, Some(13.4));
        assert_eq!(hgb.raw, "134");
        assert_eq!(hgb.status, RangeStatus::Normal);
        assert_eq!(hgb.note, None);
        assert_eq!(hgb.name, "Hemoglobin");

        let wbc = report.results.iter().find(|r| r.key == "WBC").unwrap();
        assert_eq!(wbc.value, Some(6.2));
        assert_eq!(wbc.status, RangeStatus::Normal);
    }

    #[test]
    fn test_analyze_results_in_dictionary_order() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(["GLUCOSE 92", "HGB 13.4", "PLT 250"]);
        let keys: Vec<_> = report.results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["HGB", "PLT", "GLUCOSE"]);
    }

    #[test]
    fn test_analyze_flags_abnormal_with_note() {
        let analyzer = LabReportAnalyzer::new();
        // 12 survives magnitude correction (nearest the range) and is High
        let report = analyzer.analyze_lines(["WBC 12"]);
        let wbc = &report.results[0];
        assert_eq!(wbc.value, Some(12.0));
        assert_eq!(wbc.status, RangeStatus::High);
        assert!(wbc.note.as_deref().unwrap().contains("WBC"));
    }

    #[test]
    fn test_analyze_empty_input() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(Vec::<String>::new());
        assert!(report.results.is_empty());
        assert!(report.suggestion.is_none());
    }

    #[test]
    fn test_custom_borderline_pct() {
        let analyzer = LabReportAnalyzer::new().with_borderline_pct(0.0);
        let report = analyzer.analyze_lines(["WBC 4.2"]);
        // With a zero band, 4.2 is plain Normal instead of Borderline Low
        assert_eq!(report.results[0].status, RangeStatus::Normal);
    }

    #[test]
    fn test_cbc_suggested_from_core_hits() {
        let analyzer = LabReportAnalyzer::new();
        let report =
            analyzer.analyze_lines(["HGB 13.4", "HCT 41", "WBC 6.2", "PLT 250", "MCV 88"]);
        let suggestion = report.suggestion.unwrap();
        assert_eq!(suggestion.name, "CBC");
        assert_eq!(suggestion.category.as_deref(), Some("Blood"));
    }

    #[test]
    fn test_cbc_suggested_from_explicit_mention() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(["CBC REPORT", "HGB 13.4"]);
        assert_eq!(report.suggestion.unwrap().name, "CBC");
    }

    #[test]
    fn test_single_test_suggestion() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(["GLUCOSE 92"]);
        let suggestion = report.suggestion.unwrap();
        assert_eq!(suggestion.name, "GLUCOSE");
        assert_eq!(suggestion.category, None);
    }

    #[test]
    fn test_reclassify_stored_resolves_legacy_keys() {
        let analyzer = LabReportAnalyzer::new();
        let results =
            analyzer.reclassify_stored([("Hemoglobin", "13.4"), ("wbc count", "2")]);

        assert_eq!(results[0].key, "HGB");
        assert_eq!(results[0].status, RangeStatus::Normal);
        assert_eq!(results[1].key, "WBC");
        assert_eq!(results[1].status, RangeStatus::Low);
    }

    #[test]
    fn test_reclassify_stored_keeps_unresolvable_entries() {
        let analyzer = LabReportAnalyzer::new();
        let results = analyzer.reclassify_stored([("Ferritin", "88")]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "FERRITIN");
        assert_eq!(results[0].name, "Ferritin");
        assert_eq!(results[0].status, RangeStatus::Unknown);
        assert_eq!(results[0].unit, "");
        assert!(results[0].note.is_some());
    }

    #[test]
    fn test_reclassify_does_not_refit_magnitude() {
        let analyzer = LabReportAnalyzer::new();
        // 134 stored deliberately stays 134 and classifies High
        let results = analyzer.reclassify_stored([("HGB", "134")]);
        assert_eq!(results[0].value, Some(134.0));
        assert_eq!(results[0].status, RangeStatus::High);
    }

    #[test]
    fn test_unparseable_value_is_unknown() {
        let analyzer = LabReportAnalyzer::new();
        let results = analyzer.reclassify_stored([("HGB", "abc")]);
        assert_eq!(results[0].value, None);
        assert_eq!(results[0].status, RangeStatus::Unknown);
    }
}
