use serde::{Deserialize, Serialize};
use crate::core::taxonomy::Category;
use crate::models::domain::{MatchResult, Profile};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RankMatchesResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Response for the directory search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DirectorySearchResponse<'a> {
    pub profiles: Vec<&'a Profile>,
    pub total: usize,
}

/// Active taxonomy, in tie-break order
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyResponse<'a> {
    pub categories: &'a [Category],
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
