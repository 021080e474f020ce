use serde::Serialize;

use crate::models::candidate::CandidateProfile;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessStatus {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub completeness_percentage: u32,
    pub score: u32,
    pub max_score: u32,
    /// Required fields that are empty.
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
    pub status: CompletenessStatus,
}

struct FieldCheck {
    field: &'static str,
    weight: u32,
    required: bool,
    min_items: Option<usize>,
}

const fn field_check(field: &'static str, weight: u32, required: bool, min_items: Option<usize>) -> FieldCheck {
    FieldCheck {
        field,
        weight,
        required,
        min_items,
    }
}

const FIELD_CHECKS: &[FieldCheck] = &[
    field_check("name", 10, true, None),
    field_check("currentRole", 10, true, None),
    field_check("department", 10, true, None),
    field_check("experience", 8, false, None),
    field_check("skills", 15, false, Some(3)),
    field_check("keyAchievements", 20, false, Some(2)),
    field_check("interests", 10, false, None),
    field_check("careerGoals", 12, false, None),
    field_check("email", 5, false, None),
];

/// What a profile holds for a checked field.
enum FieldValue {
    Scalar { present: bool },
    List { len: usize },
}

fn field_value(profile: &CandidateProfile, field: &str) -> FieldValue {
    let text = |s: &String| FieldValue::Scalar {
        present: !s.trim().is_empty(),
    };
    match field {
        "name" => text(&profile.name),
        "currentRole" => text(&profile.current_role),
        "department" => text(&profile.department),
        // Zero years reads as "not filled in".
        "experience" => FieldValue::Scalar {
            present: profile.experience > 0,
        },
        "skills" => FieldValue::List {
            len: profile.skills.len(),
        },
        "keyAchievements" => FieldValue::List {
            len: profile.key_achievements.len(),
        },
        "interests" => text(&profile.interests),
        "careerGoals" => text(&profile.career_goals),
        "email" => text(&profile.email),
        _ => FieldValue::Scalar { present: false },
    }
}

/// Weighted completeness of a profile. Short lists earn proportional credit.
pub fn analyze_profile(profile: &CandidateProfile) -> ProfileAnalysis {
    let mut score = 0.0_f64;
    let mut missing = Vec::new();
    let mut suggestions = Vec::new();

    for check in FIELD_CHECKS {
        let weight = check.weight as f64;
        let value = field_value(profile, check.field);
        let present = match value {
            FieldValue::Scalar { present } => present,
            FieldValue::List { len } => len > 0,
        };

        if !present {
            if check.required {
                missing.push(check.field.to_string());
            } else {
                suggestions.push(format!("Add {} to improve your profile", check.field));
            }
            continue;
        }

        match (value, check.min_items) {
            (FieldValue::List { len }, Some(min)) if len < min => {
                suggestions.push(format!(
                    "Add more {} (at least {min} recommended)",
                    check.field
                ));
                score += len as f64 / min as f64 * weight;
            }
            _ => score += weight,
        }
    }

    let max_score: u32 = FIELD_CHECKS.iter().map(|c| c.weight).sum();
    let completeness_percentage = (score * 100.0 / max_score as f64).round() as u32;

    let status = match completeness_percentage {
        p if p >= 80 => CompletenessStatus::Excellent,
        p if p >= 60 => CompletenessStatus::Good,
        p if p >= 40 => CompletenessStatus::Fair,
        _ => CompletenessStatus::NeedsImprovement,
    };

    ProfileAnalysis {
        completeness_percentage,
        score: score.round() as u32,
        max_score,
        missing,
        suggestions,
        status,
    }
}
