use crate::models::ScoringWeights;

/// Skill counts of one side of a pair, after de-duplication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillCounts {
    pub teach: usize,
    pub learn: usize,
}

impl SkillCounts {
    pub fn new(teach: usize, learn: usize) -> Self {
        Self { teach, learn }
    }

    #[inline]
    fn total(self) -> usize {
        self.teach + self.learn
    }
}

/// Calculate a compatibility score (0-100) for a pair
///
/// Scoring formula (default weights):
/// score = round(
///     exact * 25 +
///     related * 10 +
///     (balance(requester) + balance(candidate)) * 10 +
///     diversity * 5
/// ) clamped to [0, 100]
///
/// The score is a heuristic, not a probability.
pub fn calculate_compatibility_score(
    exact_count: usize,
    related_count: usize,
    requester: SkillCounts,
    candidate: SkillCounts,
    weights: &ScoringWeights,
) -> u8 {
    let total_score = exact_count as f64 * weights.exact
        + related_count as f64 * weights.related
        + (calculate_balance(requester) + calculate_balance(candidate)) * weights.balance
        + calculate_diversity(requester, candidate, weights.diversity_divisor) * weights.diversity;

    total_score.round().clamp(0.0, 100.0) as u8
}

/// Balance (0-1): 1 when a profile teaches as much as it learns, 0 when one-sided
#[inline]
fn calculate_balance(counts: SkillCounts) -> f64 {
    let low = counts.teach.min(counts.learn) as f64;
    let high = counts.teach.max(counts.learn).max(1) as f64;

    low / high
}

/// Diversity units, bounded by the smaller of the two profiles
#[inline]
fn calculate_diversity(requester: SkillCounts, candidate: SkillCounts, divisor: f64) -> f64 {
    if divisor <= 0.0 {
        return 0.0;
    }

    requester.total().min(candidate.total()) as f64 / divisor
}

/// Secondary ranking key: exact matches count fully, related ones half
#[inline]
pub fn calculate_match_score(exact_count: usize, related_count: usize) -> f64 {
    exact_count as f64 + related_count as f64 * 0.5
}
