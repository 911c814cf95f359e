pub type Points = u32;

/// Upper bound of the published score.
pub const MAX_SCORE: Points = 100;

/// Raw point total that maps to a full score. The checks can reach 85 raw
/// points, so anything above this is clamped to [`MAX_SCORE`].
pub const SCORE_CEILING: Points = 75;

/// Minimum normalized score for a document to pass.
pub const PASS_THRESHOLD: Points = 70;

/// Rescales a raw point sum onto `0..=MAX_SCORE`. Truncates before clamping.
pub fn normalize(raw: Points) -> Points {
    let scaled = u64::from(raw) * u64::from(MAX_SCORE) / u64::from(SCORE_CEILING);
    scaled.min(u64::from(MAX_SCORE)) as Points
}

pub fn is_passing(score: Points) -> bool {
    score >= PASS_THRESHOLD
}
