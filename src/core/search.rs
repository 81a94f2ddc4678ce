use crate::core::normalize::normalize;
use crate::models::{Profile, SkillFilter};

/// Check if a profile matches a free-text search term
///
/// The term is compared case-insensitively against name, location and every
/// skill. An empty term matches every profile.
#[inline]
pub fn matches_term(profile: &Profile, term: &str) -> bool {
    let term = normalize(term);
    if term.is_empty() {
        return true;
    }

    let field_matches = |value: &Option<String>| {
        value
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(&term))
    };

    field_matches(&profile.name)
        || field_matches(&profile.location)
        || profile
            .skills_to_teach
            .iter()
            .chain(profile.skills_to_learn.iter())
            .any(|skill| skill.to_lowercase().contains(&term))
}

/// Check if a profile offers the requested side of the exchange
#[inline]
pub fn matches_filter(profile: &Profile, filter: SkillFilter) -> bool {
    match filter {
        SkillFilter::All => true,
        SkillFilter::Teaching => !profile.skills_to_teach.is_empty(),
        SkillFilter::Learning => !profile.skills_to_learn.is_empty(),
    }
}

/// Search a directory listing, preserving input order
pub fn search_directory<'a>(profiles: &'a [Profile], term: &str, filter: SkillFilter) -> Vec<&'a Profile> {
    profiles
        .iter()
        .filter(|profile| matches_filter(profile, filter))
        .filter(|profile| matches_term(profile, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Profile> {
        vec![
            Profile::new("1", ["Python"], ["Guitar"]).with_name("Ada").with_location("London"),
            Profile::new("2", Vec::<String>::new(), ["Baking"]).with_name("Ben"),
            Profile::new("3", ["Yoga"], Vec::<String>::new()).with_location("Lisbon"),
        ]
    }

    #[test]
    fn test_empty_term_matches_all() {
        let profiles = directory();

        assert_eq!(search_directory(&profiles, "  ", SkillFilter::All).len(), 3);
    }

    #[test]
    fn test_term_matches_skill_case_insensitive() {
        let profiles = directory();
        let found = search_directory(&profiles, "PYTH", SkillFilter::All);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_term_matches_name_and_location() {
        let profiles = directory();

        let ids: Vec<_> = search_directory(&profiles, "l", SkillFilter::All)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // Ada/London, Lisbon
        assert_eq!(ids, vec!["1", "3"]);

        assert_eq!(search_directory(&profiles, "ben", SkillFilter::All)[0].id, "2");
    }

    #[test]
    fn test_filter_by_side() {
        let profiles = directory();

        let teaching: Vec<_> = search_directory(&profiles, "", SkillFilter::Teaching)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let learning: Vec<_> = search_directory(&profiles, "", SkillFilter::Learning)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(teaching, vec!["1", "3"]);
        assert_eq!(learning, vec!["1", "2"]);
    }
}
