// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Direction, MatchKind, MatchRecord, MatchResult, CompatibilityTier, ScoringWeights, SkillFilter};
pub use requests::{RankMatchesRequest, AnalyzePairRequest, DirectorySearchRequest};
pub use responses::{RankMatchesResponse, DirectorySearchResponse, TaxonomyResponse, HealthResponse, ErrorResponse};
