use std::fmt;

/// Clinical range status for a test value
///
/// Statuses are always recomputed from the stored value and the current
/// reference table; they are never persisted as the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RangeStatus {
    Unknown,
    Low,
    #[serde(rename = "Borderline Low")]
    BorderlineLow,
    Normal,
    #[serde(rename = "Borderline High")]
    BorderlineHigh,
    High,
}

impl RangeStatus {
    /// Returns whether this status is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, RangeStatus::Unknown)
    }

    /// Returns whether this status is normal
    pub fn is_normal(&self) -> bool {
        matches!(self, RangeStatus::Normal)
    }

    /// Returns whether this is one of the borderline bands
    pub fn is_borderline(&self) -> bool {
        matches!(
            self,
            RangeStatus::BorderlineLow | RangeStatus::BorderlineHigh
        )
    }

    /// Returns whether the value was hard out-of-range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, RangeStatus::Low | RangeStatus::High)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            RangeStatus::Unknown => "Unknown",
            RangeStatus::Low => "Low",
            RangeStatus::BorderlineLow => "Borderline Low",
            RangeStatus::Normal => "Normal",
            RangeStatus::BorderlineHigh => "Borderline High",
            RangeStatus::High => "High",
        }
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
