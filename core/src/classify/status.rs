use crate::dictionary::resolve::{normalize_label, resolve};
use crate::dictionary::Dictionary;
use crate::types::RangeStatus;

/// Default borderline band width, as a percentage of the reference interval
pub const DEFAULT_BORDERLINE_PCT: f64 = 5.0;

/// Classifies a value against its reference range
///
/// # Algorithm
///
/// - Non-finite value or no reference range for the key: `Unknown`
/// - `value < min`: `Low`; `value > max`: `High` (hard out-of-range always
///   wins; a value outside the interval is never "borderline")
/// - Inside the interval, with `band = (max - min) * pct / 100` (pct
///   floored at 0): `value <= min + band` is `Borderline Low`,
///   `value >= max - band` is `Borderline High`, otherwise `Normal`
///
/// When the band is wide enough that both borderline conditions hold
/// (narrow range, large percentage), Borderline Low is checked first and
/// wins. That ordering is part of the contract.
pub fn classify(
    dict: &Dictionary,
    label: &str,
    value: f64,
    borderline_pct: f64,
) -> RangeStatus {
    if !value.is_finite() {
        return RangeStatus::Unknown;
    }

    let normalized;
    let key = match resolve(dict, label) {
        Some(k) => k,
        None => {
            normalized = normalize_label(label);
            normalized.as_str()
        }
    };
    let Some(range) = dict.range_for(key) else {
        return RangeStatus::Unknown;
    };

    if value < range.min {
        return RangeStatus::Low;
    }
    if value > range.max {
        return RangeStatus::High;
    }

    let band = range.band(borderline_pct);
    if value <= range.min + band {
        return RangeStatus::BorderlineLow;
    }
    if value >= range.max - band {
        return RangeStatus::BorderlineHigh;
    }
    RangeStatus::Normal
}

/// [`classify`] with the default 5% borderline band
pub fn classify_default(dict: &Dictionary, label: &str, value: f64) -> RangeStatus {
    classify(dict, label, value, DEFAULT_BORDERLINE_PCT)
}
