//! Profile storage behind an injected repository. Process memory only.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::candidate::CandidateProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Carried in `AppState` as `Arc<dyn ProfileRepository>`.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, id: &str) -> Option<CandidateProfile>;

    /// The first stored profile, served when no id is requested.
    async fn first(&self) -> Option<CandidateProfile>;

    /// Inserts or replaces by id, assigning an id and timestamps as needed.
    async fn upsert(&self, profile: CandidateProfile) -> (CandidateProfile, UpsertOutcome);
}

pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<CandidateProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new(profiles: Vec<CandidateProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Repository seeded with the demo profile.
    pub fn seeded() -> Self {
        Self::new(vec![demo_profile()])
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, id: &str) -> Option<CandidateProfile> {
        self.profiles
            .read()
            .await
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned()
    }

    async fn first(&self) -> Option<CandidateProfile> {
        self.profiles.read().await.first().cloned()
    }

    async fn upsert(&self, mut profile: CandidateProfile) -> (CandidateProfile, UpsertOutcome) {
        let now = Utc::now();
        let id = profile
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("candidate-{}", now.timestamp_millis()));

        profile.id = Some(id.clone());
        profile.updated_at = Some(now);
        profile.created_at = profile.created_at.or(Some(now));

        let mut profiles = self.profiles.write().await;
        let outcome = match profiles.iter_mut().find(|p| p.id.as_deref() == Some(id.as_str())) {
            Some(existing) => {
                *existing = profile.clone();
                UpsertOutcome::Updated
            }
            None => {
                profiles.push(profile.clone());
                UpsertOutcome::Created
            }
        };

        info!("Profile {id} {outcome:?}");
        (profile, outcome)
    }
}

fn demo_profile() -> CandidateProfile {
    CandidateProfile {
        id: Some("demo-candidate".to_string()),
        name: "Alex Johnson".to_string(),
        current_role: "Software Engineer II".to_string(),
        department: "Engineering".to_string(),
        experience: 4,
        skills: ["JavaScript", "React", "Node.js", "Python", "AWS", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        key_achievements: vec![
            "Led migration to microservices architecture, reducing system downtime by 40%"
                .to_string(),
            "Mentored 3 junior developers and improved team productivity".to_string(),
            "Implemented automated testing pipeline, increasing code coverage to 90%".to_string(),
        ],
        interests: "machine learning and scalable system design".to_string(),
        career_goals: "Transition into a senior engineering role with focus on AI/ML applications"
            .to_string(),
        email: "alex.johnson@company.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        linked_in: "linkedin.com/in/alexjohnson".to_string(),
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CandidateProfile {
        CandidateProfile {
            name: name.to_string(),
            current_role: "Analyst".to_string(),
            department: "Finance".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_seeded_first_is_demo_profile() {
        let repo = InMemoryProfileRepository::seeded();
        let profile = repo.first().await.unwrap();
        assert_eq!(profile.id.as_deref(), Some("demo-candidate"));
        assert_eq!(repo.get("demo-candidate").await.unwrap().name, "Alex Johnson");
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let repo = InMemoryProfileRepository::seeded();
        assert!(repo.get("candidate-404").await.is_none());
    }

    #[tokio::test]
    async fn test_upsert_without_id_creates_with_generated_id() {
        let repo = InMemoryProfileRepository::new(vec![]);
        let (saved, outcome) = repo.upsert(named("Jordan")).await;
        assert_eq!(outcome, UpsertOutcome::Created);
        let id = saved.id.clone().unwrap();
        assert!(id.starts_with("candidate-"));
        assert!(saved.created_at.is_some());
        assert!(saved.updated_at.is_some());
        assert_eq!(repo.get(&id).await.unwrap().name, "Jordan");
    }

    #[tokio::test]
    async fn test_upsert_existing_id_updates_in_place() {
        let repo = InMemoryProfileRepository::seeded();
        let mut profile = named("Alex J.");
        profile.id = Some("demo-candidate".to_string());

        let (_, outcome) = repo.upsert(profile).await;
        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(repo.get("demo-candidate").await.unwrap().name, "Alex J.");
        assert_eq!(repo.first().await.unwrap().name, "Alex J.");
    }

    #[tokio::test]
    async fn test_upsert_keeps_supplied_created_at() {
        let repo = InMemoryProfileRepository::new(vec![]);
        let created = Utc::now() - chrono::Duration::days(3);
        let mut profile = named("Riley");
        profile.created_at = Some(created);
        let (saved, _) = repo.upsert(profile).await;
        assert_eq!(saved.created_at, Some(created));
    }
}
