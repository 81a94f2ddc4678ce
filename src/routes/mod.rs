// Route exports
pub mod matches;

use actix_web::web;

/// Version prefix for every public endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Mount the matching, taxonomy and directory endpoints under `API_PREFIX`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PREFIX).configure(matches::configure));
}
