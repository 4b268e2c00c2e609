use regex::Regex;
use std::sync::OnceLock;

use super::Dictionary;

/// Normalizes a raw label for dictionary matching
///
/// Uppercases and strips every character that is not `A-Z0-9`.
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| {
            let u = c.to_ascii_uppercase();
            (u.is_ascii_uppercase() || u.is_ascii_digit()).then_some(u)
        })
        .collect()
}

/// Resolves an arbitrary raw label to a canonical test key
///
/// # Algorithm
///
/// In order, first match wins:
/// 1. Normalize input (uppercase, strip non-alphanumeric)
/// 2. Exact canonical key
/// 3. Exact alias
/// 4. Substring over canonical keys, longest key first
/// 5. Substring over aliases, longest alias first
/// 6. Whole-word "WBC" + "TOTAL" on the raw label (verbose phrasing like
///    "Total Count (WBC)")
///
/// Substring passes iterate longest-first with table declaration order as
/// tie-break, so short keys never shadow longer ones. There is no
/// edit-distance matching; only exact and containment. Blank input and
/// unmatched labels return `None`, never an error.
pub fn resolve(dict: &Dictionary, raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return None;
    }

    let normalized = normalize_label(raw);
    if normalized.is_empty() {
        return None;
    }

    // Direct hits
    if let Some(entry) = dict.entries().find(|e| e.key == normalized) {
        return Some(entry.key);
    }
    if let Some(key) = dict.alias_target(&normalized) {
        return Some(key);
    }

    // Containment fallback for verbose lab labels
    // (e.g. "TOTAL COUNT (WBC), EDTA blood")
    for key in dict.keys_longest_first() {
        if normalized.contains(key) {
            return Some(key);
        }
    }
    for (alias, key) in dict.aliases_longest_first() {
        if normalized.contains(alias) {
            return Some(key);
        }
    }

    // "TOTAL COUNT" phrasing next to "(WBC)"
    if is_total_wbc_phrase(raw) && dict.is_canonical("WBC") {
        return Some("WBC");
    }

    None
}

/// Matches whole-word "WBC" and whole-word "TOTAL" in the raw label
fn is_total_wbc_phrase(raw: &str) -> bool {
    static WBC: OnceLock<Regex> = OnceLock::new();
    static TOTAL: OnceLock<Regex> = OnceLock::new();
    let wbc = WBC.get_or_init(|| Regex::new(r"(?i)\bWBC\b").expect("Failed to compile regex"));
    let total =
        TOTAL.get_or_init(|| Regex::new(r"(?i)\bTOTAL\b").expect("Failed to compile regex"));
    wbc.is_match(raw) && total.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("rdw-cv"), "RDWCV");
        assert_eq!(normalize_label("Hemoglobin (Hb)"), "HEMOGLOBINHB");
        assert_eq!(normalize_label("  "), "");
        assert_eq!(normalize_label("%*#"), "");
    }

    #[test]
    fn test_resolve_canonical_identity() {
        let dict = Dictionary::standard();
        for entry in dict.entries() {
            assert_eq!(resolve(dict, entry.key), Some(entry.key));
        }
    }

    #[test]
    fn test_resolve_aliases() {
        let dict = Dictionary::standard();
        assert_eq!(resolve(dict, "HB"), Some("HGB"));
        assert_eq!(resolve(dict, "Hemoglobin"), Some("HGB"));
        assert_eq!(resolve(dict, "rdw-cv"), Some("RDWCV"));
        assert_eq!(resolve(dict, "RDW-SD"), Some("RDWSD"));
        assert_eq!(resolve(dict, "Packed Cell Volume"), Some("HCT"));
        assert_eq!(resolve(dict, "platelets"), Some("PLT"));
    }

    #[test]
    fn test_resolve_blank_input() {
        let dict = Dictionary::standard();
        assert_eq!(resolve(dict, ""), None);
        assert_eq!(resolve(dict, "   "), None);
        assert_eq!(resolve(dict, "()%"), None);
    }

    #[test]
    fn test_resolve_substring_containment() {
        let dict = Dictionary::standard();
        assert_eq!(
            resolve(dict, "TOTAL COUNT (WBC), EDTA blood"),
            Some("WBC")
        );
        assert_eq!(resolve(dict, "SEGMENTED NEUTROPHILS"), Some("NEUTROPHILS"));
        assert_eq!(resolve(dict, "Serum HDL level"), Some("HDL"));
    }

    #[test]
    fn test_resolve_longest_key_wins() {
        let dict = Dictionary::standard();
        // MCHC contains MCH; the longer key must win the substring pass
        assert_eq!(resolve(dict, "value MCHC here"), Some("MCHC"));
        // NEUTROPHILSABS contains NEUTROPHILS
        assert_eq!(
            resolve(dict, "xNEUTROPHILSABSx"),
            Some("NEUTROPHILSABS")
        );
    }

    #[test]
    fn test_resolve_total_wbc_special_case() {
        let dict = Dictionary::standard();
        // Whole words only; normalized forms like "TOTALCOUNT" are already
        // handled by the alias table, so force the word-boundary path
        assert_eq!(resolve(dict, "Total leucocyte (WBC)"), Some("WBC"));
        assert_eq!(resolve(dict, "total ... wbc"), Some("WBC"));
    }

    #[test]
    fn test_resolve_unknown() {
        let dict = Dictionary::standard();
        assert_eq!(resolve(dict, "FERRITIN"), None);
        assert_eq!(resolve(dict, "PATIENT NAME"), None);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let dict = Dictionary::standard();
        // One character off, no containment: must not resolve
        assert_eq!(resolve(dict, "HGX"), None);
    }
}
