//! Match scoring — explainable compatibility between a candidate profile and a job posting.
//!
//! The score is four weighted factors (Skills 40, Experience 25, Department 20,
//! Career Goals 15) computed by a fixed, ordered list of factor functions and
//! folded into a single `MatchResult`. Pure and deterministic.

use serde::Serialize;

use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Skills,
    Experience,
    Department,
    CareerGoals,
}

/// One weighted sub-score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFactor {
    pub kind: FactorKind,
    pub name: String,
    /// 0.0 – weight
    pub earned_score: f64,
    /// `earned_score` rounded for display.
    pub score: u32,
    pub weight: u32,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    SkillDevelopment,
    ExperiencePositioning,
    Networking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

/// Full match report returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub overall_score: u32, // 0 – 100
    pub rating_label: String,
    /// Always Skills, Experience, Department, Career Goals, in that order.
    pub factors: Vec<MatchFactor>,
    pub recommendations: Vec<Recommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Factor table
// ────────────────────────────────────────────────────────────────────────────

pub const SKILLS_WEIGHT: u32 = 40;
pub const EXPERIENCE_WEIGHT: u32 = 25;
pub const DEPARTMENT_WEIGHT: u32 = 20;
pub const CAREER_GOALS_WEIGHT: u32 = 15;

type FactorFn = fn(&CandidateProfile, &JobPosting) -> MatchFactor;

const FACTORS: [FactorFn; 4] = [
    skills_factor,
    experience_factor,
    department_factor,
    career_goals_factor,
];

/// Scores `profile` against `job`.
pub fn score_match(profile: &CandidateProfile, job: &JobPosting) -> MatchResult {
    let factors: Vec<MatchFactor> = FACTORS.iter().map(|factor| factor(profile, job)).collect();

    let (earned, possible) = factors.iter().fold((0.0_f64, 0_u32), |(earned, possible), f| {
        (earned + f.earned_score, possible + f.weight)
    });

    let overall_score = if possible > 0 {
        (earned * 100.0 / possible as f64).round() as u32
    } else {
        0
    };

    let recommendations = build_recommendations(&factors);

    MatchResult {
        overall_score,
        rating_label: rating_label(overall_score).to_string(),
        factors,
        recommendations,
    }
}

fn factor(
    kind: FactorKind,
    name: &str,
    weight: u32,
    earned_score: f64,
    detail: String,
) -> MatchFactor {
    let earned_score = earned_score.clamp(0.0, weight as f64);
    MatchFactor {
        kind,
        name: name.to_string(),
        earned_score,
        score: earned_score.round() as u32,
        weight,
        detail,
        matching_items: None,
    }
}

/// A job skill is covered when a candidate skill contains it or is contained by it.
/// Blank skills never overlap, since the empty string is contained in everything.
fn skills_overlap(candidate_skill: &str, job_skill: &str) -> bool {
    let candidate_skill = candidate_skill.trim().to_lowercase();
    let job_skill = job_skill.trim().to_lowercase();
    if candidate_skill.is_empty() || job_skill.is_empty() {
        return false;
    }
    candidate_skill.contains(&job_skill) || job_skill.contains(&candidate_skill)
}

fn skills_factor(profile: &CandidateProfile, job: &JobPosting) -> MatchFactor {
    let job_skills = &job.key_skills;

    let matching_skills: Vec<String> = profile
        .skills
        .iter()
        .filter(|skill| job_skills.iter().any(|js| skills_overlap(skill, js)))
        .cloned()
        .collect();

    let covered = job_skills
        .iter()
        .filter(|js| profile.skills.iter().any(|skill| skills_overlap(skill, js)))
        .count();

    let earned = if job_skills.is_empty() {
        0.0
    } else {
        covered as f64 / job_skills.len() as f64 * SKILLS_WEIGHT as f64
    };

    let mut f = factor(
        FactorKind::Skills,
        "Skills",
        SKILLS_WEIGHT,
        earned,
        format!("{covered}/{} skills match", job_skills.len()),
    );
    f.matching_items = Some(matching_skills);
    f
}

/// 1.0 inside the expected range, partial credit below it, a mild penalty
/// (floored at 0.8) above it.
fn experience_multiplier(years: u32, (min, max): (u32, u32)) -> f64 {
    if years >= min && years <= max {
        1.0
    } else if years < min {
        // min > 0 here: a zero minimum is always satisfied.
        (years as f64 / min as f64 * 0.7).max(0.0)
    } else {
        (1.0 - (years - max) as f64 / 10.0).max(0.8)
    }
}

fn experience_factor(profile: &CandidateProfile, job: &JobPosting) -> MatchFactor {
    let multiplier = experience_multiplier(profile.experience, job.seniority.experience_range());
    factor(
        FactorKind::Experience,
        "Experience",
        EXPERIENCE_WEIGHT,
        multiplier * EXPERIENCE_WEIGHT as f64,
        format!(
            "{} years experience for {} level role",
            profile.experience, job.seniority
        ),
    )
}

/// One-directional: the candidate's department must contain the job's.
fn department_factor(profile: &CandidateProfile, job: &JobPosting) -> MatchFactor {
    let aligned = !profile.department.is_empty()
        && !job.department.is_empty()
        && profile
            .department
            .to_lowercase()
            .contains(&job.department.to_lowercase());

    let (earned, detail) = if aligned {
        (DEPARTMENT_WEIGHT as f64, "Same department")
    } else {
        (0.0, "Different department")
    };
    factor(
        FactorKind::Department,
        "Department",
        DEPARTMENT_WEIGHT,
        earned,
        detail.to_string(),
    )
}

/// Weak heuristic: full credit when the career goals mention the first word of
/// the job title, half credit otherwise.
fn career_goals_factor(profile: &CandidateProfile, job: &JobPosting) -> MatchFactor {
    let goals = profile.career_goals.to_lowercase();
    let title = job.title.to_lowercase();

    let aligned = !goals.is_empty()
        && title
            .split_whitespace()
            .next()
            .is_some_and(|token| goals.contains(token));

    let earned = if aligned {
        CAREER_GOALS_WEIGHT as f64
    } else {
        CAREER_GOALS_WEIGHT as f64 * 0.5
    };
    factor(
        FactorKind::CareerGoals,
        "Career Goals",
        CAREER_GOALS_WEIGHT,
        earned,
        "Alignment with stated career objectives".to_string(),
    )
}

fn rating_label(overall_score: u32) -> &'static str {
    match overall_score {
        s if s >= 80 => "Excellent Match",
        s if s >= 60 => "Good Match",
        s if s >= 40 => "Fair Match",
        _ => "Weak Match",
    }
}

/// Conditional recommendations for weak factors, then the unconditional networking one.
fn build_recommendations(factors: &[MatchFactor]) -> Vec<Recommendation> {
    let below = |kind: FactorKind, fraction: f64| {
        factors
            .iter()
            .find(|f| f.kind == kind)
            .is_some_and(|f| f.earned_score < f.weight as f64 * fraction)
    };

    let mut recommendations = Vec::new();

    if below(FactorKind::Skills, 0.7) {
        recommendations.push(Recommendation {
            kind: RecommendationType::SkillDevelopment,
            priority: Priority::High,
            message: "Consider highlighting transferable skills or pursuing training in the required technologies".to_string(),
            action: "Review job requirements and identify skill gaps to address".to_string(),
        });
    }

    if below(FactorKind::Experience, 0.6) {
        recommendations.push(Recommendation {
            kind: RecommendationType::ExperiencePositioning,
            priority: Priority::Medium,
            message: "Emphasize relevant project experience and achievements to demonstrate readiness".to_string(),
            action: "Highlight complex projects and leadership experiences".to_string(),
        });
    }

    recommendations.push(Recommendation {
        kind: RecommendationType::Networking,
        priority: Priority::Medium,
        message: "Connect with current team members to learn more about team culture and expectations".to_string(),
        action: "Reach out to 1-2 people on the team for informational interviews".to_string(),
    });

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
