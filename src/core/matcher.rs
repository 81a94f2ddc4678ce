use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use crate::core::{
    explain::{generate_explanation, generate_recommendations},
    finders::{find_exact, find_related_both},
    normalize::ProfileSkills,
    scoring::{calculate_compatibility_score, calculate_match_score, SkillCounts},
    taxonomy::Taxonomy,
};
use crate::models::{CompatibilityTier, MatchResult, Profile, ScoringWeights};

/// Candidate count at which ranking switches to parallel evaluation
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Skill normalization
/// 2. Exact and related match detection
/// 3. Compatibility scoring
/// 4. Explanation and recommendations
/// 5. Ranking
///
/// The matcher holds only immutable configuration; every call is independent.
#[derive(Debug, Clone)]
pub struct Matcher {
    taxonomy: Arc<Taxonomy>,
    weights: ScoringWeights,
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(taxonomy: Arc<Taxonomy>, weights: ScoringWeights) -> Self {
        Self {
            taxonomy,
            weights,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Arc::new(Taxonomy::builtin()), ScoringWeights::default())
    }

    /// Set the candidate count at which `rank` evaluates in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Run the full per-pair pipeline
    ///
    /// Unlike `rank`, pairs without any match are returned too.
    pub fn analyze<'a>(&self, requester: &Profile, candidate: &'a Profile) -> MatchResult<'a> {
        let requester_skills = ProfileSkills::of(requester);
        self.analyze_with(&requester_skills, candidate)
    }

    fn analyze_with<'a>(&self, requester: &ProfileSkills<'_>, candidate_profile: &'a Profile) -> MatchResult<'a> {
        let candidate = ProfileSkills::of(candidate_profile);

        let exact_matches = find_exact(requester, &candidate);
        let related_matches = find_related_both(requester, &candidate, &self.taxonomy);

        let compatibility_score = calculate_compatibility_score(
            exact_matches.len(),
            related_matches.len(),
            SkillCounts::new(requester.teach.len(), requester.learn.len()),
            SkillCounts::new(candidate.teach.len(), candidate.learn.len()),
            &self.weights,
        );
        let match_score = calculate_match_score(exact_matches.len(), related_matches.len());

        let explanation = generate_explanation(&exact_matches, &related_matches, compatibility_score);
        let recommendations =
            generate_recommendations(requester, &candidate, &exact_matches, &related_matches);

        tracing::trace!(
            "Scored candidate {}: {} exact, {} related, score {}",
            candidate_profile.id,
            exact_matches.len(),
            related_matches.len(),
            compatibility_score
        );

        let tier = CompatibilityTier::from_score(compatibility_score);

        MatchResult {
            candidate: candidate_profile,
            exact_matches,
            related_matches,
            compatibility_score,
            tier,
            label: tier.label(),
            match_score,
            explanation,
            recommendations,
        }
    }

    /// Rank candidates for a requester
    ///
    /// Candidates with no exact or related match are dropped. Results are
    /// sorted by compatibility score, then match score, both descending; the
    /// sort is stable so remaining ties keep input order. The caller must
    /// remove the requester from `candidates`.
    pub fn rank<'a>(&self, requester: &Profile, candidates: &'a [Profile]) -> Vec<MatchResult<'a>> {
        let requester_skills = ProfileSkills::of(requester);

        // Both paths collect in input order, so the sort sees identical input
        let mut results: Vec<MatchResult<'a>> = if candidates.len() >= self.parallel_threshold {
            candidates
                .par_iter()
                .map(|candidate| self.analyze_with(&requester_skills, candidate))
                .filter(MatchResult::has_matches)
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| self.analyze_with(&requester_skills, candidate))
                .filter(MatchResult::has_matches)
                .collect()
        };

        results.sort_by(|a, b| {
            b.compatibility_score
                .cmp(&a.compatibility_score)
                .then_with(|| {
                    b.match_score
                        .partial_cmp(&a.match_score)
                        .unwrap_or(Ordering::Equal)
                })
        });

        tracing::debug!(
            "Ranked {} of {} candidates for {}",
            results.len(),
            candidates.len(),
            requester.id
        );

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
