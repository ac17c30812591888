pub mod donation;
pub mod engagement;

/// Every prediction starts from this base before rule contributions.
pub const BASE_SCORE: f64 = 0.1;

/// Cap a base-plus-contributions total at 1.0. Contributions are
/// non-negative, so no lower clamp is needed.
#[inline]
pub(crate) fn clamp_probability(total: f64) -> f64 {
    total.min(1.0)
}

/// Contribution of the first tier whose threshold the value strictly
/// exceeds; tiers are ordered highest first. 0.0 when no tier matches.
pub(crate) fn tier_above<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, add)| *add)
        .unwrap_or(0.0)
}

/// Like `tier_above`, but the threshold itself qualifies (>=).
pub(crate) fn tier_at_least<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, add)| *add)
        .unwrap_or(0.0)
}
