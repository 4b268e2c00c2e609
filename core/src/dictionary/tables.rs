//! Static clinical configuration tables
//!
//! Canonical test keys, alias spellings, adult reference ranges, and
//! advisory note text. These are fixed configuration, not runtime state;
//! the [`Dictionary`](super::Dictionary) binds them once at construction so
//! tests can substitute alternate tables.

use crate::types::{RangeStatus, ReferenceRange};

/// A canonical test entry: key plus human-readable name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestEntry {
    pub key: &'static str,
    pub name: &'static str,
}

/// A known alternate spelling mapping to a canonical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry {
    pub alias: &'static str,
    pub key: &'static str,
}

const fn entry(key: &'static str, name: &'static str) -> TestEntry {
    TestEntry { key, name }
}

const fn alias(alias: &'static str, key: &'static str) -> AliasEntry {
    AliasEntry { alias, key }
}

// Canonical test names (UPPERCASE, alphanumeric only)
pub const TEST_ENTRIES: &[TestEntry] = &[
    // CBC core
    entry("HGB", "Hemoglobin"),
    entry("HCT", "Hematocrit (aka PCV)"),
    entry("RBC", "Red Blood Cell count"),
    entry("WBC", "White Blood Cell count"),
    entry("MCV", "Mean Corpuscular Volume"),
    entry("MCH", "Mean Corpuscular Hemoglobin"),
    entry("MCHC", "Mean Corpuscular Hemoglobin Concentration"),
    entry("RDWCV", "Red Cell Distribution Width (CV)"),
    entry("RDWSD", "Red Cell Distribution Width (SD)"),
    entry("PLT", "Platelet count"),
    entry("MPV", "Mean Platelet Volume"),
    entry("PDW", "Platelet Distribution Width"),
    entry("PCT", "Plateletcrit"),
    // Differential WBC, percentages
    entry("NEUTROPHILS", "Neutrophils (%)"),
    entry("LYMPHOCYTES", "Lymphocytes (%)"),
    entry("MONOCYTES", "Monocytes (%)"),
    entry("EOSINOPHILS", "Eosinophils (%)"),
    entry("BASOPHILS", "Basophils (%)"),
    // Differential WBC, absolute counts
    entry("NEUTROPHILSABS", "Neutrophils (Abs)"),
    entry("LYMPHOCYTESABS", "Lymphocytes (Abs)"),
    entry("MONOCYTESABS", "Monocytes (Abs)"),
    entry("EOSINOPHILSABS", "Eosinophils (Abs)"),
    entry("BASOPHILSABS", "Basophils (Abs)"),
    // Common metabolic panel
    entry("A1C", "HbA1c (3-month average glucose)"),
    entry("GLUCOSE", "Glucose (fasting)"),
    entry("TSH", "Thyroid Stimulating Hormone"),
    entry("CREATININE", "Serum Creatinine"),
    entry("CRP", "C-Reactive Protein"),
    entry("HDL", "HDL Cholesterol"),
    entry("LDL", "LDL Cholesterol"),
];

// Alias spellings, normalized (uppercase alphanumeric) to match resolver
// normalization. Targets must be canonical keys; no alias-to-alias chains.
pub const TEST_ALIASES: &[AliasEntry] = &[
    // Hemoglobin
    alias("HB", "HGB"),
    alias("HEMOGLOBIN", "HGB"),
    alias("HEMOGLOBINHB", "HGB"),
    alias("HGBH", "HGB"),
    // Hematocrit
    alias("HEMATOCRIT", "HCT"),
    alias("PCV", "HCT"),
    alias("PACKEDCELLVOLUME", "HCT"),
    // RBC
    alias("RBCCOUNT", "RBC"),
    alias("TOTALRBC", "RBC"),
    alias("RBCC", "RBC"),
    // WBC, including verbose lab phrasing
    alias("WBCCOUNT", "WBC"),
    alias("TOTALWBC", "WBC"),
    alias("TOTALCOUNTWBC", "WBC"),
    alias("TOTALCOUNTWBCEDTABLOOD", "WBC"),
    alias("TOTALCOUNT", "WBC"),
    // RDW
    alias("RDW", "RDWCV"),
    // Platelets
    alias("PLATELETCOUNT", "PLT"),
    alias("PLATELETS", "PLT"),
    alias("PLATELET", "PLT"),
    alias("PLTCOUNT", "PLT"),
    // Differential percentages
    alias("NEUT", "NEUTROPHILS"),
    alias("NEUTROPHIL", "NEUTROPHILS"),
    alias("LYMPH", "LYMPHOCYTES"),
    alias("LYMPHOCYTE", "LYMPHOCYTES"),
    alias("MONO", "MONOCYTES"),
    alias("MONOCYTE", "MONOCYTES"),
    alias("EOS", "EOSINOPHILS"),
    alias("EOSINOPHIL", "EOSINOPHILS"),
    alias("BASO", "BASOPHILS"),
    alias("BASOPHIL", "BASOPHILS"),
    // Differential absolute counts
    alias("NEUTROPHILSABSOLUTE", "NEUTROPHILSABS"),
    alias("NEUTABS", "NEUTROPHILSABS"),
    alias("ABSNEUTROPHILS", "NEUTROPHILSABS"),
    alias("LYMPHOCYTESABSOLUTE", "LYMPHOCYTESABS"),
    alias("LYMPHABS", "LYMPHOCYTESABS"),
    alias("ABSLYMPHOCYTES", "LYMPHOCYTESABS"),
    alias("MONOCYTESABSOLUTE", "MONOCYTESABS"),
    alias("MONOABS", "MONOCYTESABS"),
    alias("ABSMONOCYTES", "MONOCYTESABS"),
    alias("EOSINOPHILSABSOLUTE", "EOSINOPHILSABS"),
    alias("EOSABS", "EOSINOPHILSABS"),
    alias("ABSEOSINOPHILS", "EOSINOPHILSABS"),
    alias("BASOPHILSABSOLUTE", "BASOPHILSABS"),
    alias("BASOABS", "BASOPHILSABS"),
    alias("ABSBASOPHILS", "BASOPHILSABS"),
];

// Adult reference intervals. Invariant: min < max for every entry.
pub const TEST_RANGES: &[(&str, ReferenceRange)] = &[
    ("HGB", ReferenceRange::new(12.0, 17.5, "g/dL")),
    ("HCT", ReferenceRange::new(36.0, 50.0, "%")),
    ("RBC", ReferenceRange::new(4.2, 6.1, "x10^12/L")),
    ("WBC", ReferenceRange::new(4.0, 11.0, "x10^9/L")),
    ("MCV", ReferenceRange::new(80.0, 100.0, "fL")),
    ("MCH", ReferenceRange::new(27.0, 33.0, "pg")),
    ("MCHC", ReferenceRange::new(32.0, 36.0, "g/dL")),
    ("RDWCV", ReferenceRange::new(11.0, 16.0, "%")),
    ("RDWSD", ReferenceRange::new(35.0, 56.0, "fL")),
    ("PLT", ReferenceRange::new(150.0, 450.0, "x10^9/L")),
    ("MPV", ReferenceRange::new(6.5, 12.0, "fL")),
    ("PDW", ReferenceRange::new(25.0, 65.0, "%")),
    ("PCT", ReferenceRange::new(0.108, 0.282, "%")),
    ("NEUTROPHILS", ReferenceRange::new(38.0, 70.0, "%")),
    ("LYMPHOCYTES", ReferenceRange::new(20.0, 45.0, "%")),
    ("MONOCYTES", ReferenceRange::new(2.0, 8.0, "%")),
    ("EOSINOPHILS", ReferenceRange::new(1.0, 4.0, "%")),
    ("BASOPHILS", ReferenceRange::new(0.0, 1.0, "%")),
    ("NEUTROPHILSABS", ReferenceRange::new(1.5, 7.0, "x10^9/L")),
    ("LYMPHOCYTESABS", ReferenceRange::new(1.0, 3.0, "x10^9/L")),
    ("MONOCYTESABS", ReferenceRange::new(0.2, 0.8, "x10^9/L")),
    ("EOSINOPHILSABS", ReferenceRange::new(0.0, 0.5, "x10^9/L")),
    ("BASOPHILSABS", ReferenceRange::new(0.0, 0.1, "x10^9/L")),
    ("A1C", ReferenceRange::new(4.0, 5.6, "%")),
    ("GLUCOSE", ReferenceRange::new(70.0, 99.0, "mg/dL")),
    ("TSH", ReferenceRange::new(0.4, 4.0, "mIU/L")),
    ("CREATININE", ReferenceRange::new(0.59, 1.35, "mg/dL")),
    ("CRP", ReferenceRange::new(0.0, 10.0, "mg/L")),
    ("HDL", ReferenceRange::new(40.0, 59.0, "mg/dL")),
    ("LDL", ReferenceRange::new(0.0, 129.0, "mg/dL")),
];

// Per-key advisory notes, consulted before the generic per-status fallback
pub const SPECIFIC_NOTES: &[(&str, RangeStatus, &str)] = &[
    (
        "RDWCV",
        RangeStatus::High,
        "High RDW may indicate mixed anemia - check MCV and MCH.",
    ),
    (
        "RDWCV",
        RangeStatus::BorderlineHigh,
        "RDW near upper limit - review with MCV/MCH.",
    ),
    (
        "RDWSD",
        RangeStatus::High,
        "High RDW-SD may suggest anisocytosis - correlate clinically.",
    ),
    (
        "RDWSD",
        RangeStatus::BorderlineHigh,
        "RDW-SD near upper limit - correlate with RDW-CV.",
    ),
    (
        "WBC",
        RangeStatus::High,
        "High WBC may indicate infection/inflammation - evaluate clinically.",
    ),
    (
        "WBC",
        RangeStatus::Low,
        "Low WBC - repeat and review medications/symptoms if persistent.",
    ),
    (
        "RBC",
        RangeStatus::Low,
        "Low RBC - consider iron/B12 workup if symptoms are present.",
    ),
    (
        "RBC",
        RangeStatus::BorderlineLow,
        "RBC near lower limit - monitor and correlate with HGB/HCT.",
    ),
    (
        "A1C",
        RangeStatus::High,
        "A1C is high - discuss the plan with your doctor and repeat in ~3 months.",
    ),
    (
        "A1C",
        RangeStatus::BorderlineHigh,
        "A1C near upper limit - lifestyle review and follow-up.",
    ),
];

// Generic advisory notes keyed by status alone. Normal never yields a note.
pub const GENERIC_NOTES: &[(RangeStatus, &str)] = &[
    (
        RangeStatus::High,
        "The result is above the normal range - follow up with your doctor.",
    ),
    (
        RangeStatus::BorderlineHigh,
        "The result is close to the upper limit - consider retesting and monitoring.",
    ),
    (
        RangeStatus::Low,
        "The result is below the normal range - follow up with your doctor.",
    ),
    (
        RangeStatus::BorderlineLow,
        "The result is close to the lower limit - monitor symptoms and retest.",
    ),
    (
        RangeStatus::Unknown,
        "No reference range is currently available for this test.",
    ),
];

/// CBC core keys used for panel suggestion
pub const CBC_CORE_KEYS: &[&str] = &[
    "RBC", "WBC", "HGB", "HCT", "MCV", "MCH", "MCHC", "RDWCV", "PLT",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_targets_are_canonical() {
        for a in TEST_ALIASES {
            assert!(
                TEST_ENTRIES.iter().any(|e| e.key == a.key),
                "alias {} targets unknown key {}",
                a.alias,
                a.key
            );
        }
    }

    #[test]
    fn test_alias_spellings_are_normalized() {
        for a in TEST_ALIASES {
            assert!(
                a.alias.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "alias {} is not uppercase alphanumeric",
                a.alias
            );
        }
    }

    #[test]
    fn test_keys_are_normalized_and_unique() {
        for (i, e) in TEST_ENTRIES.iter().enumerate() {
            assert!(
                e.key.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "key {} is not uppercase alphanumeric",
                e.key
            );
            assert!(
                !TEST_ENTRIES[i + 1..].iter().any(|o| o.key == e.key),
                "duplicate key {}",
                e.key
            );
        }
    }

    #[test]
    fn test_ranges_are_well_formed() {
        for (key, r) in TEST_RANGES {
            assert!(r.min < r.max, "range for {} has min >= max", key);
            assert!(
                TEST_ENTRIES.iter().any(|e| e.key == *key),
                "range for unknown key {}",
                key
            );
        }
    }

    #[test]
    fn test_generic_notes_cover_non_normal_statuses() {
        for status in [
            RangeStatus::Low,
            RangeStatus::BorderlineLow,
            RangeStatus::BorderlineHigh,
            RangeStatus::High,
            RangeStatus::Unknown,
        ] {
            assert!(GENERIC_NOTES.iter().any(|(s, _)| *s == status));
        }
    }
}
