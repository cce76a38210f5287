use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::models::{
    CompatibilityQuery, ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    QuickRecommendationsRequest, QuickRecommendationsResponse,
};
use crate::services::{MentorMatchingService, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MentorMatchingService,
    pub limits: MatchingSettings,
}

impl AppState {
    /// Requested limit, falling back to `default` and capped at the configured maximum
    fn resolve_limit(&self, requested: Option<u16>, default: u16) -> usize {
        requested.unwrap_or(default).min(self.limits.max_limit) as usize
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/quick", web::post().to(quick_recommendations))
        .route("/matches/compatibility", web::get().to(check_compatibility));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn store_error(context: &str, err: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: err.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = match state.service.store().health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Profile store health check failed: {}", e);
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "candidateId": "string",
///   "limit": 10
/// }
/// ```
///
/// An unknown candidate returns an empty list; a store failure returns 500.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return validation_error(errors);
    }

    let limit = state.resolve_limit(req.limit, state.limits.default_limit);

    tracing::info!("Finding mentor matches for candidate: {}, limit: {}", req.candidate_id, limit);

    match state.service.find_mentor_matches(&req.candidate_id, limit).await {
        Ok(matches) => HttpResponse::Ok().json(FindMatchesResponse {
            total_results: matches.len(),
            matches,
        }),
        Err(e) => store_error("Failed to find mentor matches", e),
    }
}

/// Quick recommendations endpoint
///
/// POST /api/v1/matches/quick
///
/// Request body:
/// ```json
/// {
///   "skills": ["react", "node.js"],
///   "limit": 5
/// }
/// ```
async fn quick_recommendations(
    state: web::Data<AppState>,
    req: web::Json<QuickRecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let limit = state.resolve_limit(req.limit, state.limits.quick_limit);

    match state.service.quick_recommendations(&req.skills, limit).await {
        Ok(mentors) => HttpResponse::Ok().json(QuickRecommendationsResponse {
            total_results: mentors.len(),
            mentors,
        }),
        Err(e) => store_error("Failed to fetch recommendations", e),
    }
}

/// Compatibility endpoint
///
/// GET /api/v1/matches/compatibility?candidateId={candidateId}&mentorId={mentorId}
///
/// Returns 404 when the candidate has no profile or the mentor is not open to new mentees.
async fn check_compatibility(
    state: web::Data<AppState>,
    query: web::Query<CompatibilityQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    match state
        .service
        .check_compatibility(&query.candidate_id, &query.mentor_id)
        .await
    {
        Ok(Some(found)) => HttpResponse::Ok().json(found),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Match not found".to_string(),
            message: format!(
                "No compatible pairing for candidate {} and mentor {}",
                query.candidate_id, query.mentor_id
            ),
            status_code: 404,
        }),
        Err(e) => store_error("Failed to check compatibility", e),
    }
}
