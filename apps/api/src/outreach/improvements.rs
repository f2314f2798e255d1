//! Résumé improvement suggestions: templated advice for a profile/job pair.
//!
//! Deterministic and total: missing inputs give empty buckets, missing fields
//! give neutral placeholders.

use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;
use crate::models::profile::UserProfile;
use crate::outreach::skills::{missing_skills, present_skills};

const TECH_PLACEHOLDER: &str = "relevant technologies";

/// Suggestions grouped by résumé section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedImprovements {
    pub summary: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub general: Vec<String>,
}

impl DetailedImprovements {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.education.is_empty()
            && self.general.is_empty()
    }
}

/// Builds every bucket for the pair. Either input missing → all buckets empty.
pub fn generate_improvements(
    profile: Option<&UserProfile>,
    job: Option<&JobRecord>,
) -> DetailedImprovements {
    let (Some(profile), Some(job)) = (profile, job) else {
        return DetailedImprovements::default();
    };

    let ctx = JobContext::new(job);
    let level = profile.experience_level.phrase();

    DetailedImprovements {
        summary: summary_suggestions(&ctx, &level),
        experience: experience_suggestions(&ctx, &level),
        skills: skills_suggestions(job, profile),
        education: education_suggestions(profile),
        general: general_suggestions(&ctx),
    }
}

/// Job fields with placeholders already applied.
struct JobContext<'a> {
    title: &'a str,
    company: &'a str,
    job_type: &'a str,
    skills: Vec<&'a str>,
}

impl<'a> JobContext<'a> {
    fn new(job: &'a JobRecord) -> Self {
        JobContext {
            title: non_empty_or(&job.title, "this"),
            company: non_empty_or(&job.company, "the company"),
            job_type: non_empty_or(&job.job_type, "similar"),
            skills: present_skills(&job.skills),
        }
    }
}

pub(crate) fn non_empty_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn join_or<S: AsRef<str>>(items: &[S], separator: &str, placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(separator)
    }
}

fn summary_suggestions(ctx: &JobContext<'_>, level: &str) -> Vec<String> {
    let top_skills = &ctx.skills[..ctx.skills.len().min(3)];
    vec![
        format!(
            "Tailor your professional summary to highlight experience relevant to {} position",
            ctx.title
        ),
        "Include specific metrics and achievements that demonstrate your impact in previous roles"
            .to_string(),
        format!(
            "Mention your passion for {}'s industry and mission",
            ctx.company
        ),
        format!(
            "Highlight your most relevant skills for this role: {}",
            join_or(top_skills, ", ", TECH_PLACEHOLDER)
        ),
        format!("Emphasize your {level} background and how it applies to this role"),
    ]
}

fn experience_suggestions(ctx: &JobContext<'_>, level: &str) -> Vec<String> {
    vec![
        "Quantify your achievements with specific numbers, percentages, or dollar amounts"
            .to_string(),
        "Use action verbs that align with the job requirements (e.g., \"developed,\" \"implemented,\" \"optimized\")"
            .to_string(),
        format!(
            "Highlight any experience with technologies mentioned in the job: {}",
            join_or(ctx.skills.as_slice(), ", ", TECH_PLACEHOLDER)
        ),
        format!(
            "Include any experience working in {} environments or similar company sizes",
            ctx.job_type
        ),
        format!(
            "Emphasize problem-solving examples that relate to challenges {} might face",
            ctx.company
        ),
        format!("Show progression in your {level} career path"),
    ]
}

fn skills_suggestions(job: &JobRecord, profile: &UserProfile) -> Vec<String> {
    let missing = missing_skills(&job.skills, &profile.skills);
    let missing = &missing[..missing.len().min(5)];
    let strongest = present_skills(&profile.skills);
    let strongest = &strongest[..strongest.len().min(3)];

    vec![
        format!(
            "Consider adding experience with: {}",
            join_or(missing, ", ", TECH_PLACEHOLDER)
        ),
        "Create a dedicated \"Technical Skills\" section with proficiency levels".to_string(),
        "Include both hard and soft skills relevant to the role".to_string(),
        "Group skills by category (e.g., Programming Languages, Frameworks, Tools)".to_string(),
        "Add any certifications or courses related to the required technologies".to_string(),
        format!(
            "Highlight your strongest skills: {}",
            join_or(strongest, ", ", "your core competencies")
        ),
    ]
}

fn education_suggestions(profile: &UserProfile) -> Vec<String> {
    let first = profile
        .education
        .iter()
        .map(|e| e.trim())
        .find(|e| !e.is_empty());
    let closing = match first {
        Some(first) => format!("Leverage your education: {first} to show foundational knowledge"),
        None => "Consider adding relevant certifications to strengthen your profile".to_string(),
    };

    vec![
        "Include relevant coursework that aligns with the job requirements".to_string(),
        "Add any online courses, bootcamps, or certifications you've completed".to_string(),
        "Mention academic projects that demonstrate skills needed for this role".to_string(),
        "Include your GPA if it's above 3.5 and you're a recent graduate".to_string(),
        "Add any honors, awards, or relevant extracurricular activities".to_string(),
        closing,
    ]
}

fn general_suggestions(ctx: &JobContext<'_>) -> Vec<String> {
    vec![
        "Customize your resume for each application to match the job description".to_string(),
        "Use keywords from the job posting throughout your resume".to_string(),
        "Ensure your contact information includes a professional email and LinkedIn profile"
            .to_string(),
        "Keep your resume to 1-2 pages and use a clean, professional format".to_string(),
        "Include a portfolio link or GitHub profile if relevant to the role".to_string(),
        "Proofread carefully for grammar and spelling errors".to_string(),
        "Use consistent formatting for dates, bullet points, and section headers".to_string(),
        format!(
            "Tailor your application to show why you're specifically interested in {}",
            ctx.company
        ),
    ]
}
