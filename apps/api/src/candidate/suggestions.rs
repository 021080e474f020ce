//! Static catalogs that help users fill in their profile.

use serde::{ser::SerializeMap, Serialize, Serializer};

/// Skill suggestions grouped by category, in display order.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "JavaScript", "Python", "Java", "TypeScript", "C++", "Go", "Rust", "PHP", "C#",
            "Swift", "Kotlin", "Ruby", "Scala",
        ],
    ),
    (
        "frontend",
        &[
            "React", "Vue.js", "Angular", "HTML/CSS", "Sass/SCSS", "Webpack", "Next.js",
            "Nuxt.js", "Tailwind CSS", "Bootstrap",
        ],
    ),
    (
        "backend",
        &[
            "Node.js", "Express.js", "Django", "Flask", "Spring Boot", "Laravel",
            "Ruby on Rails", "FastAPI", "ASP.NET",
        ],
    ),
    (
        "cloud",
        &[
            "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform",
            "CloudFormation", "Serverless",
        ],
    ),
    (
        "database",
        &[
            "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "DynamoDB", "Cassandra",
            "Neo4j",
        ],
    ),
    (
        "tools",
        &[
            "Git", "Jenkins", "GitLab CI", "Jira", "Confluence", "Slack", "Figma", "Postman",
            "Datadog",
        ],
    ),
];

/// The full catalog as a category map that keeps `SKILL_CATEGORIES` order.
#[derive(Debug, Clone, Copy)]
pub struct SkillCatalog;

impl Serialize for SkillCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SKILL_CATEGORIES.len()))?;
        for (category, skills) in SKILL_CATEGORIES {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

/// Skills whose name contains `query` (case-insensitive), flattened in category order.
pub fn search_skills(query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
        .filter(|skill| skill.to_lowercase().contains(&query))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementTemplate {
    pub category: &'static str,
    pub examples: Vec<&'static str>,
}

pub fn achievement_templates() -> Vec<AchievementTemplate> {
    vec![
        AchievementTemplate {
            category: "Leadership",
            examples: vec![
                "Led a team of X developers to deliver Y project on time",
                "Mentored X junior team members, improving their performance by Y%",
                "Coordinated cross-functional initiatives involving X teams",
            ],
        },
        AchievementTemplate {
            category: "Technical Impact",
            examples: vec![
                "Improved system performance by X% through optimization",
                "Reduced deployment time from X to Y minutes",
                "Implemented solution that saved X hours per week",
            ],
        },
        AchievementTemplate {
            category: "Process Improvement",
            examples: vec![
                "Introduced new workflow that increased team productivity by X%",
                "Automated manual process, reducing errors by X%",
                "Established best practices adopted across X teams",
            ],
        },
        AchievementTemplate {
            category: "Innovation",
            examples: vec![
                "Developed new feature that increased user engagement by X%",
                "Created internal tool used by X% of the organization",
                "Pioneered use of X technology, becoming team expert",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive_across_categories() {
        assert_eq!(
            search_skills("JS"),
            vec!["Vue.js", "Next.js", "Nuxt.js", "Node.js", "Express.js"]
        );
    }

    #[test]
    fn test_search_without_hits_is_empty() {
        assert!(search_skills("cobol").is_empty());
    }

    #[test]
    fn test_six_skill_categories() {
        let names: Vec<&str> = SKILL_CATEGORIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["programming", "frontend", "backend", "cloud", "database", "tools"]
        );
    }

    #[test]
    fn test_catalog_serializes_in_display_order() {
        let json = serde_json::to_string(&SkillCatalog).unwrap();
        assert!(json.starts_with(r#"{"programming":["JavaScript","Python","#));
        let positions: Vec<usize> = SKILL_CATEGORIES
            .iter()
            .map(|(name, _)| json.find(&format!("\"{name}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_achievement_templates_have_examples() {
        let templates = achievement_templates();
        assert_eq!(templates.len(), 4);
        assert!(templates.iter().all(|t| t.examples.len() == 3));
    }
}
