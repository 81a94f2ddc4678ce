use serde::{Deserialize, Serialize};

/// Directory profile as supplied by the profile store
///
/// The engine only reads profiles. Missing skill lists deserialize to empty
/// lists so a sparse record never fails matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "skillsToTeach", default)]
    pub skills_to_teach: Vec<String>,
    #[serde(rename = "skillsToLearn", default)]
    pub skills_to_learn: Vec<String>,
}

impl Profile {
    /// Build a bare profile with only an id and skill lists
    pub fn new<T, L>(id: impl Into<String>, teach: T, learn: L) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            id: id.into(),
            name: None,
            location: None,
            bio: None,
            skills_to_teach: teach.into_iter().map(Into::into).collect(),
            skills_to_learn: learn.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Which side of the pair does the teaching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    RequesterTeaches,
    CandidateTeaches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Related,
}

/// One exchange opportunity between requester and candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub skill: String,
    pub direction: Direction,
    pub kind: MatchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MatchRecord {
    pub fn exact(skill: impl Into<String>, direction: Direction) -> Self {
        Self {
            skill: skill.into(),
            direction,
            kind: MatchKind::Exact,
            category: None,
        }
    }

    /// Related record, rendered as `"{teach} → {learn}"`
    pub fn related(teach: &str, learn: &str, category: impl Into<String>, direction: Direction) -> Self {
        Self {
            skill: format!("{} → {}", teach, learn),
            direction,
            kind: MatchKind::Related,
            category: Some(category.into()),
        }
    }
}

/// Score band used for explanation text and the result badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Potential,
    Moderate,
    Good,
    Excellent,
}

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Moderate
        } else {
            Self::Potential
        }
    }

    /// Closing sentence of the match explanation
    pub fn sentence(self) -> &'static str {
        match self {
            Self::Excellent => "This is an excellent match with high compatibility potential!",
            Self::Good => "Good match with solid potential for skill exchange.",
            Self::Moderate => "Moderate match with some complementary skills.",
            Self::Potential => "Potential match with room for growth.",
        }
    }

    /// Short label shown next to the score badge
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Great",
            Self::Moderate => "Good",
            Self::Potential => "Fair",
        }
    }
}

/// Engine output for one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub candidate: &'a Profile,
    #[serde(rename = "exactMatches")]
    pub exact_matches: Vec<MatchRecord>,
    #[serde(rename = "relatedMatches")]
    pub related_matches: Vec<MatchRecord>,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    pub tier: CompatibilityTier,
    #[serde(rename = "compatibilityLabel")]
    pub label: &'static str,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub explanation: String,
    pub recommendations: Vec<String>,
}

impl<'a> MatchResult<'a> {
    /// Exact records followed by related records
    pub fn all_matches(&self) -> impl Iterator<Item = &MatchRecord> {
        self.exact_matches.iter().chain(self.related_matches.iter())
    }

    pub fn total_matches(&self) -> usize {
        self.exact_matches.len() + self.related_matches.len()
    }

    pub fn has_matches(&self) -> bool {
        self.total_matches() > 0
    }
}

/// Additive scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub exact: f64,
    pub related: f64,
    pub balance: f64,
    pub diversity: f64,
    /// Skill count that yields one full diversity unit
    pub diversity_divisor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: 25.0,
            related: 10.0,
            balance: 10.0,
            diversity: 5.0,
            diversity_divisor: 10.0,
        }
    }
}

/// Restricts a directory search to one side of the exchange
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillFilter {
    #[default]
    All,
    Teaching,
    Learning,
}
