use std::collections::HashSet;
use crate::models::Profile;

/// Canonical comparison form of a skill: trimmed and lower-cased
///
/// Only used for comparisons. Display output always keeps the original string.
#[inline]
pub fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// One normalized skill with its original display string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill<'a> {
    pub display: &'a str,
    pub key: String,
}

/// De-duplicated view over a profile's skill list
///
/// Keeps the first display string for each normalized key, in list order.
/// Entries that are blank after trimming are dropped.
#[derive(Debug, Clone, Default)]
pub struct SkillSet<'a> {
    skills: Vec<Skill<'a>>,
    keys: HashSet<String>,
}

impl<'a> SkillSet<'a> {
    pub fn new(raw: &'a [String]) -> Self {
        let mut set = Self {
            skills: Vec::with_capacity(raw.len()),
            keys: HashSet::with_capacity(raw.len()),
        };

        for display in raw {
            let key = normalize(display);
            if key.is_empty() || set.keys.contains(&key) {
                continue;
            }
            set.keys.insert(key.clone());
            set.skills.push(Skill { display: display.as_str(), key });
        }

        set
    }

    /// Membership by normalized key
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill<'a>> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Teach and learn skill sets of one profile
#[derive(Debug, Clone, Default)]
pub struct ProfileSkills<'a> {
    pub teach: SkillSet<'a>,
    pub learn: SkillSet<'a>,
}

impl<'a> ProfileSkills<'a> {
    pub fn of(profile: &'a Profile) -> Self {
        Self {
            teach: SkillSet::new(&profile.skills_to_teach),
            learn: SkillSet::new(&profile.skills_to_learn),
        }
    }

    /// Distinct skills across both lists, as counted by the diversity term
    pub fn total(&self) -> usize {
        self.teach.len() + self.learn.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Advanced Python  "), "advanced python");
        assert_eq!(normalize("GUITAR"), "guitar");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_skill_set_deduplicates_by_key() {
        let raw = owned(&["Python", "python ", "Guitar", "PYTHON"]);
        let set = SkillSet::new(&raw);

        assert_eq!(set.len(), 2);
        let displays: Vec<_> = set.iter().map(|s| s.display).collect();
        assert_eq!(displays, vec!["Python", "Guitar"]);
    }

    #[test]
    fn test_skill_set_drops_blank_entries() {
        let raw = owned(&["", "  ", "Yoga"]);
        let set = SkillSet::new(&raw);

        assert_eq!(set.len(), 1);
        assert!(set.contains_key("yoga"));
        assert!(!set.contains_key(""));
    }

    #[test]
    fn test_empty_skill_set() {
        let raw: Vec<String> = vec![];
        let set = SkillSet::new(&raw);

        assert!(set.is_empty());
    }
}
