use std::collections::BTreeMap;

use super::ocr::OcrText;
use super::patterns::{scan_patterns, PatternKind};
use crate::dictionary::resolve::resolve;
use crate::dictionary::Dictionary;
use crate::types::ExtractedValue;

/// Scans OCR text for test-name/value pairs
///
/// Three passes, first-write-wins per key (a key already populated is
/// never overwritten):
///
/// 1. Domain patterns against the full joined text
/// 2. Domain patterns against each individual line (covers matches the
///    join obscures)
/// 3. Generic fallback pattern against the joined text
///
/// Every captured label goes through the key resolver; captures that do
/// not resolve to a canonical dictionary key are discarded. Values are the
/// first raw numeric string found for each key, unconverted - magnitude
/// correction happens downstream.
pub fn extract_values(dict: &Dictionary, text: &OcrText) -> BTreeMap<&'static str, String> {
    let mut out = BTreeMap::new();
    let patterns = scan_patterns();

    for pattern in patterns.iter().filter(|p| p.kind == PatternKind::Domain) {
        collect_pass(dict, pattern.captures(text.joined()), &mut out);
        for line in text.lines() {
            collect_pass(dict, pattern.captures(line), &mut out);
        }
    }

    for pattern in patterns.iter().filter(|p| p.kind == PatternKind::Generic) {
        collect_pass(dict, pattern.captures(text.joined()), &mut out);
    }

    out
}

/// [`extract_values`], returned in dictionary declaration order
pub fn extract(dict: &Dictionary, text: &OcrText) -> Vec<ExtractedValue> {
    let map = extract_values(dict, text);
    let mut values: Vec<ExtractedValue> = map
        .into_iter()
        .map(|(key, raw)| ExtractedValue::new(key, raw))
        .collect();
    values.sort_by_key(|v| dict.key_index(v.key));
    values
}

fn collect_pass<'t>(
    dict: &Dictionary,
    captures: impl Iterator<Item = (&'t str, &'t str)>,
    out: &mut BTreeMap<&'static str, String>,
) {
    for (label, value) in captures {
        let Some(key) = resolve(dict, label) else {
            continue;
        };
        out.entry(key).or_insert_with(|| value.to_string());
    }
}
