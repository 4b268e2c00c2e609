use crate::dictionary::resolve::resolve;
use crate::dictionary::Dictionary;

/// Corrects an OCR-induced decimal-shift error using the reference range
///
/// OCR frequently drops decimal points (reading "13.4" as "134"). Given a
/// raw numeric reading and the key's reference range:
///
/// 1. Generate candidate rescalings `{raw, raw/10, raw/100, raw/1000, raw*10}`
/// 2. Among candidates inside `[min, max]`, pick the one closest to the
///    range midpoint (resolving ties toward the clinically expected value)
/// 3. If none lands in range, pick the candidate least outside it
/// 4. If the label is unresolvable, the key has no range, or the value is
///    non-finite, return the raw value unchanged
///
/// Ties prefer the earlier candidate, so the literal reading wins over an
/// equally-distant rescaling. This function never fails; it degrades to
/// identity.
pub fn fit_to_range(dict: &Dictionary, label: &str, raw_value: f64) -> f64 {
    if !raw_value.is_finite() {
        return raw_value;
    }
    let Some(key) = resolve(dict, label) else {
        return raw_value;
    };
    let Some(range) = dict.range_for(key) else {
        return raw_value;
    };

    // Decimal shifts OCR plausibly introduces: a dropped point inflates
    // the reading by 10x-1000x, a lost trailing digit deflates it by 10x
    let candidates = [
        raw_value,
        raw_value / 10.0,
        raw_value / 100.0,
        raw_value / 1000.0,
        raw_value * 10.0,
    ];
    let mid = range.midpoint();

    // Strict less-than keeps the earliest candidate on ties
    let mut best_in_range: Option<f64> = None;
    for v in candidates {
        if !v.is_finite() || !range.contains(v) {
            continue;
        }
        let closer = match best_in_range {
            Some(b) => (v - mid).abs() < (b - mid).abs(),
            None => true,
        };
        if closer {
            best_in_range = Some(v);
        }
    }
    if let Some(v) = best_in_range {
        return v;
    }

    let mut best = raw_value;
    let mut best_distance = f64::INFINITY;
    for v in candidates {
        if !v.is_finite() {
            continue;
        }
        let d = range.distance_outside(v);
        if d < best_distance {
            best = v;
            best_distance = d;
        }
    }
    best
}
