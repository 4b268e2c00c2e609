//! Unit resolution and normalization
//!
//! Two concerns live here: mapping a canonical key (or raw label) to the
//! unit we display for it, and canonicalizing the free-form unit spellings
//! seen on printed reports ("10^3/µL", "million/cmm", "g dl", ...).

use super::resolve::{normalize_label, resolve};
use super::Dictionary;

/// Raw unit spelling (normalized) to canonical unit string
///
/// The count scales are numerically identical: thousands/µL equals 10^9/L
/// and millions/µL equals 10^12/L, so canonicalization never rescales.
const UNIT_SPELLINGS: &[(&str, &str)] = &[
    ("%", "%"),
    ("PERCENT", "%"),
    ("G/DL", "g/dL"),
    ("GDL", "g/dL"),
    ("GPERDL", "g/dL"),
    ("GPDL", "g/dL"),
    ("FL", "fL"),
    ("PG", "pg"),
    ("X10^9/L", "x10^9/L"),
    ("10^9/L", "x10^9/L"),
    ("X10^3/UL", "x10^9/L"),
    ("10^3/UL", "x10^9/L"),
    ("K/UL", "x10^9/L"),
    ("MILLION/CMM", "x10^12/L"),
    ("M/UL", "x10^12/L"),
];

// Percent-family keys without a dedicated rule below
const PERCENT_KEYS: &[&str] = &[
    "NEUTROPHILS",
    "LYMPHOCYTES",
    "MONOCYTES",
    "EOSINOPHILS",
    "BASOPHILS",
    "HCT",
    "RDWCV",
    "PCT",
    "PDW",
    "A1C",
];

/// Returns the display unit for a label
///
/// The label is resolved to a canonical key first, falling back to the raw
/// normalized label when resolution fails. An empty string means "unit
/// unknown"; callers omit the unit in display rather than treating it as
/// an error.
pub fn unit_for(dict: &Dictionary, label: &str) -> &'static str {
    let normalized;
    let key = match resolve(dict, label) {
        Some(k) => k,
        None => {
            normalized = normalize_label(label);
            normalized.as_str()
        }
    };

    if PERCENT_KEYS.contains(&key) {
        return "%";
    }

    match key {
        "HGB" | "MCHC" => "g/dL",
        "MCV" | "RDWSD" | "MPV" => "fL",
        "MCH" => "pg",
        // Counts canonicalize to the standard concentration unit
        "WBC" | "PLT" => "x10^9/L",
        "RBC" => "x10^12/L",
        // Metabolic panel
        "GLUCOSE" | "CREATININE" | "HDL" | "LDL" => "mg/dL",
        "TSH" => "mIU/L",
        "CRP" => "mg/L",
        k if k.ends_with("ABS") => "x10^9/L",
        _ => "",
    }
}

/// Canonicalizes a raw unit spelling from a report
///
/// Returns `None` when the spelling is not recognized.
pub fn normalize_unit(raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return None;
    }
    let u: String = raw
        .chars()
        .filter_map(|c| {
            let up = c.to_ascii_uppercase();
            (up.is_ascii_uppercase()
                || up.is_ascii_digit()
                || up == '^'
                || up == '/'
                || up == '%')
                .then_some(up)
        })
        .collect();
    UNIT_SPELLINGS
        .iter()
        .find(|(spelling, _)| *spelling == u)
        .map(|(_, canonical)| *canonical)
}

/// Converts a reported value to the canonical display unit
///
/// Blood-counter scales in the wild are numerically equivalent (WBC/PLT in
/// 10^3/µL match 10^9/L; RBC in million/µL matches 10^12/L), so conversion
/// is a unit relabel, never a rescale. When the input unit is unrecognized
/// or the target is unknown, the value passes through with the best unit
/// string available.
pub fn convert_to_canonical(
    dict: &Dictionary,
    label: &str,
    value: f64,
    raw_unit: Option<&str>,
) -> (f64, String) {
    let key = resolve(dict, label)
        .map(str::to_string)
        .unwrap_or_else(|| normalize_label(label));
    let target = unit_for(dict, &key);
    let given = raw_unit.and_then(normalize_unit);

    if given.is_none() || target.is_empty() || !value.is_finite() {
        let unit = if !target.is_empty() {
            target.to_string()
        } else {
            raw_unit.unwrap_or("").to_string()
        };
        return (value, unit);
    }

    (value, target.to_string())
}
