//! Email writers — pluggable, trait-based drafting of outreach emails.
//!
//! Default: `TemplateEmailWriter` (deterministic, no network).
//! With `OPENAI_API_KEY` set: `LlmEmailWriter`.
//!
//! `AppState` holds an `Arc<dyn EmailWriter>`, chosen at startup via config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::outreach::prompts::{build_outreach_prompt, OUTREACH_SYSTEM};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    #[default]
    HiringManager,
    Recruiter,
    TeamMember,
}

impl EmailType {
    pub fn as_str(self) -> &'static str {
        match self {
            EmailType::HiringManager => "hiring_manager",
            EmailType::Recruiter => "recruiter",
            EmailType::TeamMember => "team_member",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTone {
    #[default]
    Professional,
    Friendly,
    Formal,
    Casual,
}

impl EmailTone {
    pub fn as_str(self) -> &'static str {
        match self {
            EmailTone::Professional => "professional",
            EmailTone::Friendly => "friendly",
            EmailTone::Formal => "formal",
            EmailTone::Casual => "casual",
        }
    }
}

/// Everything a writer needs to draft one email.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub profile: CandidateProfile,
    pub job: JobPosting,
    pub email_type: EmailType,
    pub tone: EmailTone,
}

/// A drafted email split into subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// The email writer trait. Implement this to swap drafting backends without
/// touching the handler.
#[async_trait]
pub trait EmailWriter: Send + Sync {
    /// Raw email text, expected to start with a `Subject:` line.
    async fn write(&self, request: &EmailRequest) -> Result<String, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Drafts an email with `writer` and splits it into subject and body.
pub async fn draft_email(
    writer: &dyn EmailWriter,
    request: &EmailRequest,
) -> Result<EmailDraft, AppError> {
    let text = writer.write(request).await?;
    Ok(split_subject_and_body(&text, &request.job.title))
}

/// Subject comes from the first `Subject:` line; the body is everything after it.
/// Without a subject line the whole text is the body and a default subject is used.
pub fn split_subject_and_body(text: &str, job_title: &str) -> EmailDraft {
    let lines: Vec<&str> = text.split('\n').collect();
    let subject_index = lines
        .iter()
        .position(|line| line.to_lowercase().starts_with("subject:"));

    let subject = subject_index
        .and_then(|i| lines[i].get("subject:".len()..))
        .map(|rest| rest.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("Interest in {job_title} Position"));

    let body_start = subject_index.map(|i| i + 1).unwrap_or(0);
    let body = lines[body_start..].join("\n").trim().to_string();

    EmailDraft { subject, body }
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateEmailWriter
// ────────────────────────────────────────────────────────────────────────────

/// Fills fixed templates from the profile and job. `team_member` uses the
/// hiring-manager template.
pub struct TemplateEmailWriter;

#[async_trait]
impl EmailWriter for TemplateEmailWriter {
    async fn write(&self, request: &EmailRequest) -> Result<String, AppError> {
        Ok(render_template(request))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn render_template(request: &EmailRequest) -> String {
    let EmailRequest { profile, job, .. } = request;

    match request.email_type {
        EmailType::Recruiter => {
            let achievements = if profile.key_achievements.is_empty() {
                "• Strong performance in current role\n• Collaborative team player\n• Commitment to continuous learning".to_string()
            } else {
                profile
                    .key_achievements
                    .iter()
                    .map(|a| format!("• {a}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            format!(
                "Subject: Internal Application for {title} - {name}

Hello {recruiter},

I am reaching out regarding the {title} position posted internally. As a current {role} in {department}, I am excited about the opportunity to grow within our organization.

My experience includes:
{achievements}

I have attached my updated resume and would appreciate any guidance on the application process. Please let me know if you need any additional information.

Looking forward to hearing from you.

Best regards,
{name}",
                title = job.title,
                name = profile.name,
                recruiter = or_default(&job.recruiter, "Recruiter"),
                role = or_default(&profile.current_role, "employee"),
                department = profile.department,
            )
        }
        EmailType::HiringManager | EmailType::TeamMember => {
            let top_skills = profile
                .skills
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");

            format!(
                "Subject: Interest in {title} Position - Internal Application

Dear {manager},

I hope this message finds you well. I am writing to express my strong interest in the {title} position that was recently posted on our internal Talent Marketplace.

With my {experience} years of experience in {department}, I believe I would be a valuable addition to your team. My background in {skills} aligns well with the requirements outlined in the job posting.

I would welcome the opportunity to discuss how my experience and passion for {interests} could contribute to your team's success. Would you be available for a brief conversation about this role?

Thank you for your time and consideration.

Best regards,
{name}",
                title = job.title,
                manager = or_default(&job.hiring_manager, "Hiring Manager"),
                experience = profile.experience,
                department = profile.department,
                skills = or_default(&top_skills, "relevant technologies"),
                interests = or_default(&profile.interests, "innovation"),
                name = profile.name,
            )
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEmailWriter
// ────────────────────────────────────────────────────────────────────────────

/// Drafts via the chat-completion collaborator.
pub struct LlmEmailWriter(pub LlmClient);

#[async_trait]
impl EmailWriter for LlmEmailWriter {
    async fn write(&self, request: &EmailRequest) -> Result<String, AppError> {
        let prompt =
            build_outreach_prompt(&request.profile, &request.job, request.email_type, request.tone);
        self.0
            .complete(&prompt, OUTREACH_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Email generation failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
