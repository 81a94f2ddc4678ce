use std::collections::HashSet;
use crate::core::normalize::{ProfileSkills, SkillSet};
use crate::core::taxonomy::Taxonomy;
use crate::models::{Direction, MatchRecord};

/// Find direct skill-for-skill exchanges
///
/// Requester-teaches records come first in the requester's teach order, then
/// candidate-teaches records in the candidate's teach order.
pub fn find_exact(requester: &ProfileSkills<'_>, candidate: &ProfileSkills<'_>) -> Vec<MatchRecord> {
    let you_teach = requester
        .teach
        .iter()
        .filter(|skill| candidate.learn.contains_key(&skill.key))
        .map(|skill| MatchRecord::exact(skill.display, Direction::RequesterTeaches));

    let they_teach = candidate
        .teach
        .iter()
        .filter(|skill| requester.learn.contains_key(&skill.key))
        .map(|skill| MatchRecord::exact(skill.display, Direction::CandidateTeaches));

    you_teach.chain(they_teach).collect()
}

/// Unordered key for a (teach, learn) pair
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Find complementary skills that share a taxonomy category
///
/// Pairs already present in `seen` are skipped and every reported pair is
/// added to it, so calling this for both directions with the same set never
/// reports an unordered pair twice.
pub fn find_related(
    teach: &SkillSet<'_>,
    learn: &SkillSet<'_>,
    direction: Direction,
    taxonomy: &Taxonomy,
    seen: &mut HashSet<(String, String)>,
) -> Vec<MatchRecord> {
    let mut related = Vec::new();

    for teach_skill in teach.iter() {
        for learn_skill in learn.iter() {
            // Identical skills are exact matches
            if teach_skill.key == learn_skill.key {
                continue;
            }

            let Some(category) = taxonomy.shared_category(&teach_skill.key, &learn_skill.key) else {
                continue;
            };

            if !seen.insert(pair_key(&teach_skill.key, &learn_skill.key)) {
                continue;
            }

            related.push(MatchRecord::related(
                teach_skill.display,
                learn_skill.display,
                category.name.as_str(),
                direction,
            ));
        }
    }

    related
}

/// Related matches in both directions, requester-teaches first
pub fn find_related_both(
    requester: &ProfileSkills<'_>,
    candidate: &ProfileSkills<'_>,
    taxonomy: &Taxonomy,
) -> Vec<MatchRecord> {
    let mut seen = HashSet::new();
    let mut related = find_related(
        &requester.teach,
        &candidate.learn,
        Direction::RequesterTeaches,
        taxonomy,
        &mut seen,
    );
    related.extend(find_related(
        &candidate.teach,
        &requester.learn,
        Direction::CandidateTeaches,
        taxonomy,
        &mut seen,
    ));
    related
}
