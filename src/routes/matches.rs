use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{search_directory, Matcher};
use crate::models::{
    AnalyzePairRequest, DirectorySearchRequest, DirectorySearchResponse, ErrorResponse,
    HealthResponse, Profile, RankMatchesRequest, RankMatchesResponse, TaxonomyResponse,
};

/// Request-size limits applied at the HTTP boundary
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: u16,
    pub max_limit: u16,
    pub max_candidates: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            max_candidates: 5000,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub limits: MatchLimits,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/analyze", web::post().to(analyze_pair))
        .route("/taxonomy", web::get().to(get_taxonomy))
        .route("/directory/search", web::post().to(search_profiles));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank matches endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "requester": { "id": "string", "skillsToTeach": [], "skillsToLearn": [] },
///   "candidates": [ { "id": "string", ... } ],
///   "limit": 20
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if req.candidates.len() > state.limits.max_candidates {
        return bad_request(
            "Too many candidates",
            format!(
                "At most {} candidates may be ranked per request, got {}",
                state.limits.max_candidates,
                req.candidates.len()
            ),
        );
    }

    let requester = &req.requester;
    let limit = req
        .limit
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit) as usize;

    tracing::info!(
        "Ranking {} candidates for user: {}, limit: {}",
        req.candidates.len(),
        requester.id,
        limit
    );

    // Self-matches are removed here; the engine expects a pre-filtered population
    let candidates: Vec<Profile> = req
        .candidates
        .iter()
        .filter(|candidate| candidate.id != requester.id)
        .cloned()
        .collect();

    let mut matches = state.matcher.rank(requester, &candidates);
    let total_matches = matches.len();
    matches.truncate(limit);

    let response = RankMatchesResponse {
        matches,
        total_candidates: candidates.len(),
        total_matches,
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        requester.id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Analyze a single pair
///
/// POST /api/v1/matches/analyze
async fn analyze_pair(
    state: web::Data<AppState>,
    req: web::Json<AnalyzePairRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    if req.requester.id == req.candidate.id {
        return bad_request(
            "Invalid pair",
            "A profile cannot be matched against itself".to_string(),
        );
    }

    let result = state.matcher.analyze(&req.requester, &req.candidate);

    tracing::debug!(
        "Analyzed {} -> {}: score {}",
        req.requester.id,
        req.candidate.id,
        result.compatibility_score
    );

    HttpResponse::Ok().json(result)
}

/// Active taxonomy
///
/// GET /api/v1/taxonomy
async fn get_taxonomy(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(TaxonomyResponse {
        categories: state.matcher.taxonomy().categories(),
    })
}

/// Directory search
///
/// POST /api/v1/directory/search
async fn search_profiles(req: web::Json<DirectorySearchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let term = req.term.as_deref().unwrap_or_default();
    let profiles = search_directory(&req.profiles, term, req.filter);

    tracing::debug!("Directory search '{}' matched {} of {}", term, profiles.len(), req.profiles.len());

    HttpResponse::Ok().json(DirectorySearchResponse {
        total: profiles.len(),
        profiles,
    })
}
