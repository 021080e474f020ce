//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::jobs::catalog::DEPARTMENTS;
use crate::jobs::match_scoring::{score_match, MatchResult};
use crate::jobs::posting_parser::parse_job_posting;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    pub job_text: Option<String>,
    pub job_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobResponse {
    pub success: bool,
    pub job_data: JobPosting,
    pub extracted_at: DateTime<Utc>,
}

/// Both fields are kept as raw JSON so a wrong shape is reported as invalid input
/// instead of a generic extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub candidate_profile: Option<Value>,
    pub job_data: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub success: bool,
    pub match_analysis: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job: JobPosting,
}

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/jobs/analyze
///
/// Parses pasted posting text into a structured `JobPosting`.
/// A URL alone is accepted but not fetched, so it yields an empty posting.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<AnalyzeJobResponse>, AppError> {
    let job_text = non_blank(request.job_text);
    let job_url = non_blank(request.job_url);

    if job_text.is_none() && job_url.is_none() {
        return Err(AppError::Validation(
            "Either jobText or jobUrl is required".to_string(),
        ));
    }

    let job_data = parse_job_posting(job_text.as_deref().unwrap_or_default());
    info!(
        "Analyzed job posting: title={:?} seniority={} skills={}",
        job_data.title,
        job_data.seniority,
        job_data.key_skills.len()
    );

    Ok(Json(AnalyzeJobResponse {
        success: true,
        job_data,
        extracted_at: Utc::now(),
    }))
}

/// POST /api/jobs/match
///
/// Scores a candidate profile against a structured job posting.
pub async fn handle_match(
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let (Some(profile), Some(job)) = (request.candidate_profile, request.job_data) else {
        return Err(AppError::Validation(
            "Both candidateProfile and jobData are required".to_string(),
        ));
    };

    let profile: CandidateProfile = record_from_value(profile, "candidateProfile")?;
    let job: JobPosting = record_from_value(job, "jobData")?;

    let match_analysis = score_match(&profile, &job);
    debug!(
        "Match scored: overall={} rating={:?}",
        match_analysis.overall_score, match_analysis.rating_label
    );

    Ok(Json(MatchResponse {
        success: true,
        match_analysis,
    }))
}

/// GET /api/jobs/sample
pub async fn handle_sample(State(state): State<AppState>) -> Result<Json<JobResponse>, AppError> {
    let job = state
        .jobs
        .sample()
        .await
        .ok_or_else(|| AppError::NotFound("No sample job available".to_string()))?;
    Ok(Json(JobResponse { job }))
}

/// GET /api/jobs/list?limit=N
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Json<JobListResponse> {
    let jobs = state.jobs.list(params.limit).await;
    Json(JobListResponse { jobs })
}

/// GET /api/jobs/departments
pub async fn handle_departments() -> Json<DepartmentsResponse> {
    Json(DepartmentsResponse {
        departments: DEPARTMENTS.to_vec(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Converts a raw JSON value into a record, rejecting anything that is not an object.
pub(crate) fn record_from_value<T: DeserializeOwned>(value: Value, field: &str) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::InvalidInput(format!("{field} must be an object")));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::InvalidInput(format!("{field} is malformed: {e}")))
}
