use crate::core::normalize::ProfileSkills;
use crate::models::{CompatibilityTier, MatchRecord};

/// Maximum skills listed in one recommendation
const MAX_SUGGESTED_SKILLS: usize = 3;

const ADD_SKILLS: &str = "Consider adding more skills to your profile to find better matches.";
const REACH_OUT: &str = "Great match! Consider reaching out to start your skill exchange journey.";

fn count_noun(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Build the human-readable rationale for a match
///
/// Sentences are emitted in a fixed order: exact count, related count, tier.
pub fn generate_explanation(exact: &[MatchRecord], related: &[MatchRecord], score: u8) -> String {
    let mut sentences = Vec::with_capacity(3);

    if !exact.is_empty() {
        sentences.push(format!(
            "Perfect skill alignment! {} found.",
            count_noun(exact.len(), "exact match", "exact matches")
        ));
    }

    if !related.is_empty() {
        sentences.push(format!(
            "Detected {} that could lead to great exchanges.",
            count_noun(related.len(), "complementary skill", "complementary skills")
        ));
    }

    sentences.push(CompatibilityTier::from_score(score).sentence().to_string());

    sentences.join(" ")
}

/// Suggest next steps for the requester
///
/// Skill suggestions keep the candidate's list order and are capped at three
/// entries each.
pub fn generate_recommendations(
    requester: &ProfileSkills<'_>,
    candidate: &ProfileSkills<'_>,
    exact: &[MatchRecord],
    related: &[MatchRecord],
) -> Vec<String> {
    if exact.is_empty() && related.is_empty() {
        return vec![ADD_SKILLS.to_string()];
    }

    let mut recommendations = Vec::new();

    let to_learn: Vec<&str> = candidate
        .teach
        .iter()
        .filter(|skill| !requester.learn.contains_key(&skill.key))
        .take(MAX_SUGGESTED_SKILLS)
        .map(|skill| skill.display)
        .collect();

    if !to_learn.is_empty() {
        recommendations.push(format!("Consider learning: {}", to_learn.join(", ")));
    }

    let to_teach: Vec<&str> = candidate
        .learn
        .iter()
        .filter(|skill| !requester.teach.contains_key(&skill.key))
        .take(MAX_SUGGESTED_SKILLS)
        .map(|skill| skill.display)
        .collect();

    if !to_teach.is_empty() {
        recommendations.push(format!("You could teach: {}", to_teach.join(", ")));
    }

    if recommendations.is_empty() {
        recommendations.push(REACH_OUT.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Profile};

    fn exact(n: usize) -> Vec<MatchRecord> {
        (0..n)
            .map(|i| MatchRecord::exact(format!("skill {}", i), Direction::RequesterTeaches))
            .collect()
    }

    fn related(n: usize) -> Vec<MatchRecord> {
        (0..n)
            .map(|i| MatchRecord::related("a", &format!("b{}", i), "music", Direction::CandidateTeaches))
            .collect()
    }

    #[test]
    fn test_explanation_exact_and_tier() {
        let text = generate_explanation(&exact(2), &[], 71);

        assert_eq!(
            text,
            "Perfect skill alignment! 2 exact matches found. Good match with solid potential for skill exchange."
        );
    }

    #[test]
    fn test_explanation_singular_forms() {
        let text = generate_explanation(&exact(1), &related(1), 85);

        assert_eq!(
            text,
            "Perfect skill alignment! 1 exact match found. \
             Detected 1 complementary skill that could lead to great exchanges. \
             This is an excellent match with high compatibility potential!"
        );
    }

    #[test]
    fn test_explanation_tiers() {
        assert!(generate_explanation(&[], &related(3), 40).ends_with("Moderate match with some complementary skills."));
        assert!(generate_explanation(&[], &related(3), 39).ends_with("Potential match with room for growth."));
        assert!(generate_explanation(&exact(3), &[], 60).ends_with("Good match with solid potential for skill exchange."));
        assert!(generate_explanation(&exact(3), &[], 80).contains("excellent match"));
    }

    #[test]
    fn test_explanation_without_matches_is_tier_only() {
        assert_eq!(generate_explanation(&[], &[], 0), "Potential match with room for growth.");
    }

    #[test]
    fn test_recommendations_no_matches() {
        let requester = Profile::new("r", ["Python"], ["Guitar"]);
        let candidate = Profile::new("c", ["Baking"], ["Spanish"]);

        let recs = generate_recommendations(
            &ProfileSkills::of(&requester),
            &ProfileSkills::of(&candidate),
            &[],
            &[],
        );

        assert_eq!(recs, vec![ADD_SKILLS.to_string()]);
    }

    #[test]
    fn test_recommendations_fall_back_to_reach_out() {
        let requester = Profile::new("r", ["Python"], ["Guitar"]);
        let candidate = Profile::new("c", ["guitar"], ["PYTHON"]);

        let recs = generate_recommendations(
            &ProfileSkills::of(&requester),
            &ProfileSkills::of(&candidate),
            &exact(2),
            &[],
        );

        assert_eq!(recs, vec![REACH_OUT.to_string()]);
    }

    #[test]
    fn test_recommendations_capped_and_ordered() {
        let requester = Profile::new("r", ["Python"], ["Piano"]);
        let candidate = Profile::new(
            "c",
            ["Piano", "Drums", "Violin", "Singing", "Baking"],
            ["Python", "Yoga", "French", "Finance", "Cooking"],
        );

        let recs = generate_recommendations(
            &ProfileSkills::of(&requester),
            &ProfileSkills::of(&candidate),
            &exact(2),
            &[],
        );

        assert_eq!(
            recs,
            vec![
                "Consider learning: Drums, Violin, Singing".to_string(),
                "You could teach: Yoga, French, Finance".to_string(),
            ]
        );
    }
}
