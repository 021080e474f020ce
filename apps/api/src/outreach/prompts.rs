// Prompt constants for outreach drafting.

use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::outreach::writer::{EmailTone, EmailType};

pub const OUTREACH_SYSTEM: &str = "You are an expert career coach specializing in internal job \
    applications and professional networking. Generate thoughtful, personalized outreach emails \
    that help candidates stand out positively.";

/// Builds the user prompt for an outreach email.
pub fn build_outreach_prompt(
    profile: &CandidateProfile,
    job: &JobPosting,
    email_type: EmailType,
    tone: EmailTone,
) -> String {
    let skills = or_placeholder(profile.skills.join(", "), "Various skills");
    let achievements = or_placeholder(profile.key_achievements.join(", "), "Strong performance");

    format!(
        "Generate a personalized outreach email for an internal job application with the following details:

Candidate Profile:
- Name: {name}
- Current Role: {role}
- Department: {department}
- Experience: {experience} years
- Key Skills: {skills}
- Key Achievements: {achievements}
- Interests: {interests}

Job Details:
- Title: {title}
- Department: {job_department}
- Hiring Manager: {manager}
- Job Description: {description}
- Requirements: {requirements}

Email Type: {email_type}
Tone: {tone}

Create a {tone} email that:
1. Shows genuine interest in the role
2. Highlights relevant experience and skills
3. Demonstrates knowledge of the company/team
4. Includes a clear call to action
5. Is concise but personalized
6. Maintains internal networking etiquette

Format the response with a subject line and body.",
        name = profile.name,
        role = profile.current_role,
        department = profile.department,
        experience = profile.experience,
        interests = profile.interests,
        title = job.title,
        job_department = job.department,
        manager = job.hiring_manager,
        description = job.description,
        requirements = job.requirements,
        email_type = email_type.as_str(),
        tone = tone.as_str(),
    )
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_candidate_and_job() {
        let profile = CandidateProfile {
            name: "Alex Johnson".to_string(),
            skills: vec!["React".to_string(), "AWS".to_string()],
            ..Default::default()
        };
        let job = JobPosting {
            title: "Senior Software Engineer".to_string(),
            ..Default::default()
        };
        let prompt = build_outreach_prompt(&profile, &job, EmailType::Recruiter, EmailTone::Friendly);
        assert!(prompt.contains("- Name: Alex Johnson"));
        assert!(prompt.contains("- Key Skills: React, AWS"));
        assert!(prompt.contains("- Title: Senior Software Engineer"));
        assert!(prompt.contains("Email Type: recruiter"));
        assert!(prompt.contains("Create a friendly email"));
    }

    #[test]
    fn test_prompt_placeholders_for_empty_lists() {
        let prompt = build_outreach_prompt(
            &CandidateProfile::default(),
            &JobPosting::default(),
            EmailType::HiringManager,
            EmailTone::Professional,
        );
        assert!(prompt.contains("- Key Skills: Various skills"));
        assert!(prompt.contains("- Key Achievements: Strong performance"));
    }
}
