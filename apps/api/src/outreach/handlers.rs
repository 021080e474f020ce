//! Axum route handlers for the Email API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::handlers::record_from_value;
use crate::models::lenient_default;
use crate::outreach::analysis::{analyze_email, email_templates, EmailAnalysis, EmailTemplateInfo};
use crate::outreach::writer::{draft_email, EmailRequest, EmailTone, EmailType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailRequest {
    pub candidate_profile: Option<Value>,
    pub job_details: Option<Value>,
    /// Unknown or `null` values fall back to the hiring-manager professional email.
    #[serde(default, deserialize_with = "lenient_default")]
    pub email_type: EmailType,
    #[serde(default, deserialize_with = "lenient_default")]
    pub tone: EmailTone,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEmail {
    pub subject: String,
    pub body: String,
    pub generated_at: DateTime<Utc>,
    pub email_type: EmailType,
    pub tone: EmailTone,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub success: bool,
    pub email: GeneratedEmail,
}

#[derive(Debug, Serialize)]
pub struct EmailTemplatesResponse {
    pub templates: Vec<EmailTemplateInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEmailRequest {
    pub email_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeEmailResponse {
    pub analysis: EmailAnalysis,
}

/// POST /api/email/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmailRequest>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    let (Some(profile), Some(job)) = (request.candidate_profile, request.job_details) else {
        return Err(AppError::Validation(
            "Missing required fields: candidateProfile and jobDetails".to_string(),
        ));
    };

    let email_request = EmailRequest {
        profile: record_from_value(profile, "candidateProfile")?,
        job: record_from_value(job, "jobDetails")?,
        email_type: request.email_type,
        tone: request.tone,
    };

    let draft = draft_email(state.email_writer.as_ref(), &email_request).await?;
    info!(
        "Drafted {} email via {} writer",
        email_request.email_type.as_str(),
        state.email_writer.backend()
    );

    Ok(Json(GenerateEmailResponse {
        success: true,
        email: GeneratedEmail {
            subject: draft.subject,
            body: draft.body,
            generated_at: Utc::now(),
            email_type: email_request.email_type,
            tone: email_request.tone,
        },
    }))
}

/// GET /api/email/templates
pub async fn handle_templates() -> Json<EmailTemplatesResponse> {
    Json(EmailTemplatesResponse {
        templates: email_templates(),
    })
}

/// POST /api/email/analyze
pub async fn handle_analyze(
    Json(request): Json<AnalyzeEmailRequest>,
) -> Result<Json<AnalyzeEmailResponse>, AppError> {
    let content = request
        .email_content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("Email content required".to_string()))?;

    Ok(Json(AnalyzeEmailResponse {
        analysis: analyze_email(&content),
    }))
}
