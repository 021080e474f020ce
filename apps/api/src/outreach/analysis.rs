use serde::Serialize;

/// Emails longer than this read as "detailed".
const DETAILED_THRESHOLD_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct EmailAnalysis {
    pub tone: &'static str,
    pub readability: &'static str,
    pub professionalism: &'static str,
    pub suggestions: Vec<&'static str>,
}

/// Surface-level feedback on a drafted email. No language model involved.
pub fn analyze_email(content: &str) -> EmailAnalysis {
    let tone = if content.chars().count() > DETAILED_THRESHOLD_CHARS {
        "detailed"
    } else {
        "concise"
    };
    let professionalism = if content.contains("Dear") || content.contains("Hello") {
        "high"
    } else {
        "medium"
    };

    EmailAnalysis {
        tone,
        readability: "good",
        professionalism,
        suggestions: vec![
            "Consider adding specific examples of your achievements",
            "Include a clear call to action",
            "Personalize the greeting if possible",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
}

/// The outreach styles offered to the user.
pub fn email_templates() -> Vec<EmailTemplateInfo> {
    vec![
        EmailTemplateInfo {
            id: "hiring_manager",
            name: "Hiring Manager Outreach",
            description: "Direct outreach to the hiring manager",
            use_case: "When you want to connect directly with the person who will make hiring decisions",
        },
        EmailTemplateInfo {
            id: "recruiter",
            name: "Recruiter Introduction",
            description: "Professional introduction to the recruiter",
            use_case: "When you want guidance on the application process and requirements",
        },
        EmailTemplateInfo {
            id: "team_member",
            name: "Team Member Network",
            description: "Networking with current team members",
            use_case: "When you want insights about team culture and role expectations",
        },
    ]
}
