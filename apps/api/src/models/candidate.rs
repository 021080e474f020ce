use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::lenient_default;

/// An employee's self-described profile. Read-only input to match scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "lenient_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub current_role: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub department: String,
    /// Whole years of experience.
    #[serde(default, deserialize_with = "lenient_default")]
    pub experience: u32,
    #[serde(default, deserialize_with = "lenient_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub key_achievements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub interests: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub career_goals: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub phone: String,
    #[serde(default, rename = "linkedIn", deserialize_with = "lenient_default")]
    pub linked_in: String,
    #[serde(default, deserialize_with = "lenient_default", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_default", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CandidateProfile {
    /// Names of the fields a profile must carry before it can be saved.
    pub fn missing_required_fields(&self) -> Vec<String> {
        [
            ("name", &self.name),
            ("currentRole", &self.current_role),
            ("department", &self.department),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserializes_camel_case() {
        let json = r#"{
            "name": "Alex Johnson",
            "currentRole": "Software Engineer II",
            "department": "Engineering",
            "experience": 4,
            "skills": ["React", "AWS"],
            "keyAchievements": ["Led migration"],
            "careerGoals": "senior engineering",
            "linkedIn": "linkedin.com/in/alex"
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.current_role, "Software Engineer II");
        assert_eq!(profile.experience, 4);
        assert_eq!(profile.key_achievements.len(), 1);
        assert_eq!(profile.linked_in, "linkedin.com/in/alex");
    }

    #[test]
    fn test_nulls_and_missing_fields_default() {
        let json = r#"{"name": "Sam", "skills": null, "experience": null}"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience, 0);
        assert_eq!(profile.career_goals, "");
    }

    #[test]
    fn test_wrong_typed_fields_default() {
        for experience in [json!("5"), json!(4.5), json!(-1)] {
            let profile: CandidateProfile =
                serde_json::from_value(json!({"name": "Sam", "experience": experience})).unwrap();
            assert_eq!(profile.experience, 0);
            assert_eq!(profile.name, "Sam");
        }

        let profile: CandidateProfile = serde_json::from_value(json!({
            "skills": "React",
            "department": 42,
            "createdAt": "yesterday",
        }))
        .unwrap();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.department, "");
        assert!(profile.created_at.is_none());
    }

    #[test]
    fn test_missing_required_fields_in_order() {
        let profile = CandidateProfile {
            current_role: "Analyst".to_string(),
            department: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            profile.missing_required_fields(),
            vec!["name".to_string(), "department".to_string()]
        );
    }
}
