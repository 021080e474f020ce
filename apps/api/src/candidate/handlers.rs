use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::candidate::completeness::{analyze_profile, ProfileAnalysis};
use crate::candidate::repository::UpsertOutcome;
use crate::candidate::suggestions::{
    achievement_templates, search_skills, AchievementTemplate, SkillCatalog,
};
use crate::errors::AppError;
use crate::jobs::handlers::record_from_value;
use crate::models::candidate::CandidateProfile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: CandidateProfile,
}

#[derive(Serialize)]
pub struct SaveProfileResponse {
    pub success: bool,
    pub profile: CandidateProfile,
    pub message: String,
}

#[derive(Deserialize)]
pub struct SkillQuery {
    pub query: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum SkillSuggestions {
    ByCategory(SkillCatalog),
    Matches(Vec<&'static str>),
}

#[derive(Serialize)]
pub struct SkillSuggestionsResponse {
    pub suggestions: SkillSuggestions,
}

#[derive(Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<AchievementTemplate>,
}

#[derive(Deserialize)]
pub struct AnalyzeProfileRequest {
    pub profile: Option<Value>,
}

#[derive(Serialize)]
pub struct AnalyzeProfileResponse {
    pub analysis: ProfileAnalysis,
}

/// GET /api/candidate/profile
pub async fn handle_get_default_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state
        .profiles
        .first()
        .await
        .ok_or_else(|| AppError::NotFound("Candidate profile not found".to_string()))?;
    Ok(Json(ProfileResponse { profile }))
}

/// GET /api/candidate/profile/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state
        .profiles
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Candidate profile not found".to_string()))?;
    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/candidate/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let missing = profile.missing_required_fields();
    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }

    let (profile, outcome) = state.profiles.upsert(profile).await;
    let message = match outcome {
        UpsertOutcome::Created => "Profile created",
        UpsertOutcome::Updated => "Profile updated",
    };

    Ok(Json(SaveProfileResponse {
        success: true,
        profile,
        message: message.to_string(),
    }))
}

/// GET /api/candidate/skills/suggestions?query=
pub async fn handle_skill_suggestions(
    Query(params): Query<SkillQuery>,
) -> Json<SkillSuggestionsResponse> {
    let suggestions = match params.query.filter(|q| !q.is_empty()) {
        Some(query) => SkillSuggestions::Matches(search_skills(&query)),
        None => SkillSuggestions::ByCategory(SkillCatalog),
    };
    Json(SkillSuggestionsResponse { suggestions })
}

/// GET /api/candidate/achievements/templates
pub async fn handle_achievement_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: achievement_templates(),
    })
}

/// POST /api/candidate/profile/analyze
pub async fn handle_analyze_profile(
    Json(req): Json<AnalyzeProfileRequest>,
) -> Result<Json<AnalyzeProfileResponse>, AppError> {
    let profile = req
        .profile
        .ok_or_else(|| AppError::Validation("Profile data required".to_string()))?;
    let profile: CandidateProfile = record_from_value(profile, "profile")?;
    Ok(Json(AnalyzeProfileResponse {
        analysis: analyze_profile(&profile),
    }))
}
