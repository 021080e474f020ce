use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::lenient_default;

/// Seniority tier of a posting. Unknown or empty values read as `Mid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
    Principal,
}

impl Seniority {
    /// Expected years of experience, inclusive on both ends.
    pub fn experience_range(self) -> (u32, u32) {
        match self {
            Seniority::Junior => (0, 2),
            Seniority::Mid => (2, 5),
            Seniority::Senior => (5, 10),
            Seniority::Principal => (8, 15),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Principal => "principal",
        }
    }
}

impl From<String> for Seniority {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "junior" => Seniority::Junior,
            "senior" => Seniority::Senior,
            "principal" => Seniority::Principal,
            _ => Seniority::Mid,
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured job posting, either parsed from free text or from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, deserialize_with = "lenient_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub hiring_manager: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub recruiter: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub requirements: String,
    #[serde(default, deserialize_with = "lenient_default")]
    pub key_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub seniority: Seniority,
    #[serde(default, deserialize_with = "lenient_default")]
    pub remote_option: bool,
    #[serde(default, deserialize_with = "lenient_default", skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_default", skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_serializes_lowercase() {
        let json = serde_json::to_string(&Seniority::Principal).unwrap();
        assert_eq!(json, r#""principal""#);
    }

    #[test]
    fn test_unknown_seniority_reads_as_mid() {
        let tier: Seniority = serde_json::from_str(r#""lead""#).unwrap();
        assert_eq!(tier, Seniority::Mid);
        let tier: Seniority = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(tier, Seniority::Mid);
    }

    #[test]
    fn test_seniority_parse_is_case_insensitive() {
        assert_eq!(Seniority::from("Senior".to_string()), Seniority::Senior);
        assert_eq!(Seniority::from(" JUNIOR ".to_string()), Seniority::Junior);
    }

    #[test]
    fn test_experience_ranges() {
        assert_eq!(Seniority::Junior.experience_range(), (0, 2));
        assert_eq!(Seniority::Mid.experience_range(), (2, 5));
        assert_eq!(Seniority::Senior.experience_range(), (5, 10));
        assert_eq!(Seniority::Principal.experience_range(), (8, 15));
    }

    #[test]
    fn test_job_posting_defaults_and_camel_case() {
        let json = r#"{
            "title": "Senior Engineer",
            "keySkills": ["React"],
            "seniority": "senior",
            "remoteOption": true,
            "postedDate": "2024-01-15"
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.key_skills, vec!["React".to_string()]);
        assert_eq!(job.seniority, Seniority::Senior);
        assert!(job.remote_option);
        assert_eq!(job.department, "");
        assert_eq!(job.posted_date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_null_seniority_reads_as_mid() {
        let job: JobPosting = serde_json::from_str(r#"{"seniority": null}"#).unwrap();
        assert_eq!(job.seniority, Seniority::Mid);
    }

    #[test]
    fn test_wrong_typed_fields_default() {
        let job: JobPosting = serde_json::from_str(
            r#"{"title": "Engineer", "seniority": 3, "keySkills": "React", "remoteOption": "yes", "postedDate": "soon"}"#,
        )
        .unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.seniority, Seniority::Mid);
        assert!(job.key_skills.is_empty());
        assert!(!job.remote_option);
        assert!(job.posted_date.is_none());
    }
}
