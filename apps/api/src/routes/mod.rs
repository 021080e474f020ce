pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidate::handlers as candidate;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::outreach::handlers as email;
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Jobs API
        .route("/api/jobs/analyze", post(jobs::handle_analyze))
        .route("/api/jobs/match", post(jobs::handle_match))
        .route("/api/jobs/sample", get(jobs::handle_sample))
        .route("/api/jobs/list", get(jobs::handle_list))
        .route("/api/jobs/departments", get(jobs::handle_departments))
        // Candidate API
        .route(
            "/api/candidate/profile",
            get(candidate::handle_get_default_profile).post(candidate::handle_save_profile),
        )
        .route("/api/candidate/profile/:id", get(candidate::handle_get_profile))
        .route(
            "/api/candidate/profile/analyze",
            post(candidate::handle_analyze_profile),
        )
        .route(
            "/api/candidate/skills/suggestions",
            get(candidate::handle_skill_suggestions),
        )
        .route(
            "/api/candidate/achievements/templates",
            get(candidate::handle_achievement_templates),
        )
        // Email API
        .route("/api/email/generate", post(email::handle_generate))
        .route("/api/email/templates", get(email::handle_templates))
        .route("/api/email/analyze", post(email::handle_analyze))
        .fallback(route_not_found)
        .with_state(state)
}
