use crate::dictionary::resolve::{normalize_label, resolve};
use crate::dictionary::Dictionary;
use crate::types::RangeStatus;

/// Returns the advisory note for a test and status
///
/// `Normal` never carries a note. Otherwise the per-key override table is
/// consulted first and returned verbatim when present; the generic
/// per-status message is the fallback. Returns `None` if neither table has
/// an entry (the generic table covers all five non-Normal statuses, but
/// callers must not rely on that).
pub fn note_for(dict: &Dictionary, label: &str, status: RangeStatus) -> Option<&'static str> {
    if status.is_normal() {
        return None;
    }

    let normalized;
    let key = match resolve(dict, label) {
        Some(k) => k,
        None => {
            normalized = normalize_label(label);
            normalized.as_str()
        }
    };

    dict.specific_note(key, status)
        .or_else(|| dict.generic_note(status))
}
