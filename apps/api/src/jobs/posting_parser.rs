//! Posting parser — heuristic extraction of a structured `JobPosting` from pasted text.
//!
//! Every field is extracted independently and degrades to its default, so parsing
//! never fails. Label lookups use an ordered rule table: for each field the first
//! pattern that matches anywhere in the text wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::job::{JobPosting, Seniority};

/// Fields filled from `label: value` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabeledField {
    Title,
    HiringManager,
    Department,
    Location,
}

/// Ordered (field, pattern) rules. Order within a field is priority order.
/// Titles take the rest of the line; the other fields stop at a comma.
const LABEL_RULES: &[(LabeledField, &str)] = &[
    (LabeledField::Title, r"(?i)title:\s*(.+)"),
    (LabeledField::Title, r"(?i)position:\s*(.+)"),
    (LabeledField::Title, r"(?i)role:\s*(.+)"),
    (LabeledField::Title, r"(?i)job title:\s*(.+)"),
    (LabeledField::HiringManager, r"(?i)hiring manager:\s*([^,\n]+)"),
    (LabeledField::HiringManager, r"(?i)reports to:\s*([^,\n]+)"),
    (LabeledField::HiringManager, r"(?i)manager:\s*([^,\n]+)"),
    (LabeledField::Department, r"(?i)department:\s*([^,\n]+)"),
    (LabeledField::Department, r"(?i)team:\s*([^,\n]+)"),
    (LabeledField::Department, r"(?i)division:\s*([^,\n]+)"),
    (LabeledField::Location, r"(?i)location:\s*([^,\n]+)"),
    (LabeledField::Location, r"(?i)based in:\s*([^,\n]+)"),
    (LabeledField::Location, r"(?i)office:\s*([^,\n]+)"),
];

/// Seniority rules, checked in order. `Senior` is checked before `Principal`,
/// so "Senior Staff Engineer" classifies as senior.
const SENIORITY_RULES: &[(Seniority, &str)] = &[
    (Seniority::Senior, r"(?i)senior|sr\.|lead"),
    (Seniority::Junior, r"(?i)junior|jr\.|entry|graduate"),
    (Seniority::Principal, r"(?i)principal|staff|architect"),
];

/// Reference skill vocabulary. Each term is matched as a case-insensitive pattern,
/// and extracted skills keep this order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "Kubernetes",
    "MongoDB",
    "PostgreSQL",
    "TypeScript",
    "Angular",
    "Vue",
    "Spring",
    "Django",
    "Flask",
    "Git",
    "CI/CD",
    "Agile",
    "Scrum",
    "Machine Learning",
    "AI",
    "DevOps",
    "Microservices",
    "REST",
    "GraphQL",
];

const DESCRIPTION_FALLBACK_CHARS: usize = 500;
const TRUNCATION_MARKER: &str = "...";

static LABEL_PATTERNS: LazyLock<Vec<(LabeledField, Regex)>> = LazyLock::new(|| {
    LABEL_RULES
        .iter()
        .map(|(field, pattern)| (*field, compile(pattern)))
        .collect()
});

static SENIORITY_PATTERNS: LazyLock<Vec<(Seniority, Regex)>> = LazyLock::new(|| {
    SENIORITY_RULES
        .iter()
        .map(|(tier, pattern)| (*tier, compile(pattern)))
        .collect()
});

static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|skill| (*skill, compile(&format!("(?i){skill}"))))
        .collect()
});

static REMOTE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)remote|work from home|wfh|hybrid"));

static REQUIREMENTS_START: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)requirements?:?\s*"));
static REQUIREMENTS_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)benefits?:"));
static DESCRIPTION_START: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)description:?\s*"));
static DESCRIPTION_END: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)requirements?:|qualifications?:"));

/// Patterns are compile-time constants; a failure here is a programming error.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid parser pattern {pattern:?}: {e}"))
}

/// Parses free-form posting text into a best-effort `JobPosting`.
pub fn parse_job_posting(text: &str) -> JobPosting {
    JobPosting {
        title: extract_labeled(text, LabeledField::Title),
        department: extract_labeled(text, LabeledField::Department),
        hiring_manager: extract_labeled(text, LabeledField::HiringManager),
        location: extract_labeled(text, LabeledField::Location),
        remote_option: REMOTE.is_match(text),
        seniority: classify_seniority(text),
        key_skills: extract_skills(text),
        requirements: extract_requirements(text),
        description: extract_description(text),
        ..Default::default()
    }
}

/// First matching rule for `field` wins; empty string when none match.
fn extract_labeled(text: &str, field: LabeledField) -> String {
    LABEL_PATTERNS
        .iter()
        .filter(|(f, _)| *f == field)
        .find_map(|(_, re)| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn classify_seniority(text: &str) -> Seniority {
    SENIORITY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(tier, _)| *tier)
        .unwrap_or_default()
}

fn extract_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

fn extract_requirements(text: &str) -> String {
    extract_section(text, &REQUIREMENTS_START, &REQUIREMENTS_END).unwrap_or_default()
}

fn extract_description(text: &str) -> String {
    extract_section(text, &DESCRIPTION_START, &DESCRIPTION_END).unwrap_or_else(|| {
        let head: String = text.chars().take(DESCRIPTION_FALLBACK_CHARS).collect();
        format!("{head}{TRUNCATION_MARKER}")
    })
}

/// Text between the first `start` label and the next `end` label (or end of text), trimmed.
fn extract_section(text: &str, start: &Regex, end: &Regex) -> Option<String> {
    let body = &text[start.find(text)?.end()..];
    let stop = end.find(body).map(|m| m.start()).unwrap_or(body.len());
    Some(body[..stop].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_POSTING: &str = "\
Job Title: Senior Backend Engineer, Payments
Department: Engineering, Platform Group
Hiring Manager: Sarah Chen
Location: Austin, TX
This role is hybrid.

Description: Build and operate payment microservices on AWS with Docker.

Requirements:
- 5+ years of Python
- Experience with PostgreSQL

Benefits: Flexible PTO";

    #[test]
    fn test_full_posting_extracts_labeled_fields() {
        let job = parse_job_posting(FULL_POSTING);
        assert_eq!(job.title, "Senior Backend Engineer, Payments");
        assert_eq!(job.department, "Engineering");
        assert_eq!(job.hiring_manager, "Sarah Chen");
        assert_eq!(job.location, "Austin");
        assert!(job.remote_option);
        assert_eq!(job.seniority, Seniority::Senior);
    }

    #[test]
    fn test_full_posting_sections() {
        let job = parse_job_posting(FULL_POSTING);
        assert_eq!(
            job.description,
            "Build and operate payment microservices on AWS with Docker."
        );
        assert_eq!(
            job.requirements,
            "- 5+ years of Python\n- Experience with PostgreSQL"
        );
    }

    #[test]
    fn test_first_title_pattern_wins() {
        let job = parse_job_posting("Role: Data Analyst\nPosition: Data Scientist");
        // `position:` is tried before `role:`, regardless of text order.
        assert_eq!(job.title, "Data Scientist");
    }

    #[test]
    fn test_manager_falls_through_to_later_pattern() {
        let job = parse_job_posting("Reports to: Jordan Lee, VP");
        assert_eq!(job.hiring_manager, "Jordan Lee");
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let job = parse_job_posting("");
        assert_eq!(job.title, "");
        assert_eq!(job.department, "");
        assert_eq!(job.hiring_manager, "");
        assert_eq!(job.location, "");
        assert_eq!(job.requirements, "");
        assert!(job.key_skills.is_empty());
        assert!(!job.remote_option);
        assert_eq!(job.seniority, Seniority::Mid);
        assert_eq!(job.description, "...");
    }

    #[test]
    fn test_senior_staff_engineer_is_senior() {
        let job = parse_job_posting("Senior Staff Engineer");
        assert_eq!(job.seniority, Seniority::Senior);
    }

    #[test]
    fn test_seniority_tiers() {
        assert_eq!(parse_job_posting("Jr. Designer").seniority, Seniority::Junior);
        assert_eq!(
            parse_job_posting("Graduate programme").seniority,
            Seniority::Junior
        );
        assert_eq!(
            parse_job_posting("Principal Architect").seniority,
            Seniority::Principal
        );
        assert_eq!(parse_job_posting("Tech Lead").seniority, Seniority::Senior);
        assert_eq!(parse_job_posting("Data Analyst").seniority, Seniority::Mid);
    }

    #[test]
    fn test_skill_extraction_in_vocabulary_order() {
        let job =
            parse_job_posting("We use React and AWS heavily, with Kubernetes in production");
        assert_eq!(
            job.key_skills,
            vec![
                "React".to_string(),
                "AWS".to_string(),
                "Kubernetes".to_string()
            ]
        );
    }

    #[test]
    fn test_skill_order_ignores_text_order() {
        let job = parse_job_posting("graphql first, then docker");
        assert_eq!(
            job.key_skills,
            vec!["Docker".to_string(), "GraphQL".to_string()]
        );
    }

    #[test]
    fn test_remote_detection_without_location() {
        assert!(parse_job_posting("Happy to support WFH days").remote_option);
        assert!(parse_job_posting("Work From Home allowed").remote_option);
        assert!(!parse_job_posting("On-site in Denver").remote_option);
    }

    #[test]
    fn test_description_fallback_truncates_to_500_chars() {
        let text = "x".repeat(800);
        let job = parse_job_posting(&text);
        assert_eq!(job.description.len(), 503);
        assert!(job.description.ends_with("..."));
    }

    #[test]
    fn test_description_stops_at_qualifications() {
        let job = parse_job_posting("Description: Own the roadmap.\nQualifications: MBA");
        assert_eq!(job.description, "Own the roadmap.");
    }

    #[test]
    fn test_requirements_run_to_end_without_benefits() {
        let job = parse_job_posting("Requirements: Java and Spring\nstrong communication");
        assert_eq!(job.requirements, "Java and Spring\nstrong communication");
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse_job_posting(FULL_POSTING), parse_job_posting(FULL_POSTING));
    }
}
