//! Job catalog — the postings the service knows about, behind an injected repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::job::{JobPosting, Seniority};

/// Departments offered as suggestions in the job and profile forms.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Data Science",
    "DevOps",
    "Marketing",
    "Sales",
    "Customer Success",
    "Operations",
    "Finance",
    "Human Resources",
    "Legal",
    "Security",
    "QA",
    "Research",
];

/// Read access to catalog postings. Carried in `AppState` as `Arc<dyn JobRepository>`.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// All postings in insertion order, truncated to `limit` when given.
    async fn list(&self, limit: Option<usize>) -> Vec<JobPosting>;

    /// The posting used for demos; `None` when the catalog is empty.
    async fn sample(&self) -> Option<JobPosting>;
}

/// Process-memory catalog.
pub struct InMemoryJobRepository {
    jobs: RwLock<Vec<JobPosting>>,
}

impl InMemoryJobRepository {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }

    /// Catalog seeded with the demo posting.
    pub fn seeded() -> Self {
        Self::new(vec![sample_posting()])
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self, limit: Option<usize>) -> Vec<JobPosting> {
        let jobs = self.jobs.read().await;
        let take = limit.unwrap_or(jobs.len());
        jobs.iter().take(take).cloned().collect()
    }

    async fn sample(&self) -> Option<JobPosting> {
        self.jobs.read().await.first().cloned()
    }
}

fn sample_posting() -> JobPosting {
    JobPosting {
        id: Some("job-001".to_string()),
        title: "Senior Software Engineer".to_string(),
        department: "Engineering".to_string(),
        hiring_manager: "Sarah Chen".to_string(),
        recruiter: "Mike Rodriguez".to_string(),
        location: "San Francisco, CA / Remote".to_string(),
        description: "We are looking for a Senior Software Engineer to join our platform team. \
You will be responsible for designing and implementing scalable microservices, mentoring junior \
developers, and contributing to our technical architecture decisions.

Key Responsibilities:
- Design and develop high-performance, scalable web applications
- Lead technical discussions and code reviews
- Mentor junior and mid-level engineers
- Collaborate with product managers and designers
- Contribute to architectural decisions"
            .to_string(),
        requirements: "Required Qualifications:
- 5+ years of software development experience
- Strong proficiency in JavaScript, Python, or Java
- Experience with cloud platforms (AWS, Azure, GCP)
- Knowledge of microservices architecture
- Experience with containerization (Docker, Kubernetes)

Preferred Qualifications:
- Experience with React and Node.js
- Knowledge of CI/CD pipelines
- Previous mentoring experience
- Familiarity with agile development methodologies"
            .to_string(),
        key_skills: [
            "JavaScript",
            "Python",
            "Java",
            "React",
            "Node.js",
            "AWS",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Agile",
            "Microservices",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        benefits: [
            "Competitive salary and equity",
            "Health, dental, and vision insurance",
            "Flexible PTO",
            "Remote work options",
            "Professional development budget",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        seniority: Seniority::Senior,
        remote_option: true,
        posted_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        application_deadline: NaiveDate::from_ymd_opt(2024, 2, 15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_seeded_catalog_has_sample() {
        let repo = InMemoryJobRepository::seeded();
        let sample = repo.sample().await.unwrap();
        assert_eq!(sample.id.as_deref(), Some("job-001"));
        assert_eq!(sample.seniority, Seniority::Senior);
        assert!(sample.remote_option);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let repo = InMemoryJobRepository::new(vec![titled("A"), titled("B"), titled("C")]);
        assert_eq!(repo.list(None).await.len(), 3);
        let two = repo.list(Some(2)).await;
        assert_eq!(two.len(), 2);
        assert_eq!(two[1].title, "B");
        assert_eq!(repo.list(Some(10)).await.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_catalog_has_no_sample() {
        let repo = InMemoryJobRepository::new(vec![]);
        assert!(repo.sample().await.is_none());
    }

    #[test]
    fn test_departments_fixed_list() {
        assert_eq!(DEPARTMENTS.len(), 15);
        assert_eq!(DEPARTMENTS[0], "Engineering");
    }
}
