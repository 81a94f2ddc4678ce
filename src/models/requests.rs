use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{Profile, SkillFilter};

/// Request to rank a candidate population for one requester
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[validate(custom(function = "validate_profile_id"))]
    pub requester: Profile,
    #[serde(default)]
    pub candidates: Vec<Profile>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to analyze a single requester/candidate pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzePairRequest {
    #[validate(custom(function = "validate_profile_id"))]
    pub requester: Profile,
    #[validate(custom(function = "validate_profile_id"))]
    pub candidate: Profile,
}

/// Request to search a directory listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DirectorySearchRequest {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub term: Option<String>,
    #[serde(default)]
    pub filter: SkillFilter,
}

fn validate_profile_id(profile: &Profile) -> Result<(), ValidationError> {
    if profile.id.trim().is_empty() {
        return Err(ValidationError::new("empty_profile_id"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_request_defaults() {
        let req: RankMatchesRequest = serde_json::from_str(r#"{"requester": {"id": "u1"}}"#).unwrap();

        assert!(req.candidates.is_empty());
        assert!(req.limit.is_none());
        assert!(req.requester.skills_to_teach.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rank_request_rejects_blank_requester_id() {
        let req: RankMatchesRequest = serde_json::from_str(r#"{"requester": {"id": "  "}}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rank_request_rejects_zero_limit() {
        let req: RankMatchesRequest =
            serde_json::from_str(r#"{"requester": {"id": "u1"}, "limit": 0}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_filter_parses_lowercase() {
        let req: DirectorySearchRequest =
            serde_json::from_str(r#"{"profiles": [], "filter": "teaching"}"#).unwrap();

        assert_eq!(req.filter, SkillFilter::Teaching);
    }
}
