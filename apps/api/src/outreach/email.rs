//! Cold email synthesizer.
//!
//! Renders a fixed template from a profile, a job and the company directory.
//! The two accomplishment lines are picked by a seedable PRNG owned by
//! `OutreachService`, so a fixed seed reproduces the same email.

use std::fmt::Write;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::ingestion::extract::DEFAULT_TITLE;
use crate::models::job::{JobRecord, DEFAULT_LOCATION};
use crate::models::profile::UserProfile;
use crate::outreach::company::CompanyDirectory;
use crate::outreach::improvements::{generate_improvements, non_empty_or, DetailedImprovements};
use crate::outreach::skills::{present_skills, relevant_skills};

pub const FAILED_EMAIL: &str = "Failed to generate email. Please try again.";

const RELEVANT_ACCOMPLISHMENT_COUNT: usize = 6;
const SKILL_ACCOMPLISHMENT_COUNT: usize = 5;
const SOFTWARE_DEVELOPMENT: &str = "software development";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No user profile supplied")]
    MissingProfile,

    #[error("No job supplied")]
    MissingJob,

    #[error("Failed to render email template: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Accomplishment picker lock was poisoned")]
    PickerPoisoned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailResult {
    pub email: String,
    pub detailed_improvements: DetailedImprovements,
}

impl EmailResult {
    pub fn failed() -> Self {
        Self {
            email: FAILED_EMAIL.to_string(),
            detailed_improvements: DetailedImprovements::default(),
        }
    }
}

/// Indices into the two accomplishment tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picks {
    pub accomplishment: usize,
    pub skill_accomplishment: usize,
}

impl Picks {
    fn draw(rng: &mut fastrand::Rng) -> Self {
        Self {
            accomplishment: rng.usize(..RELEVANT_ACCOMPLISHMENT_COUNT),
            skill_accomplishment: rng.usize(..SKILL_ACCOMPLISHMENT_COUNT),
        }
    }
}

#[derive(Debug)]
pub struct OutreachService {
    companies: Arc<CompanyDirectory>,
    rng: Mutex<fastrand::Rng>,
}

impl OutreachService {
    /// `seed: None` seeds from the OS; `Some` makes output reproducible.
    pub fn new(companies: Arc<CompanyDirectory>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Email picker seeded with {}", seed);
                fastrand::Rng::with_seed(seed)
            }
            None => fastrand::Rng::new(),
        };
        Self {
            companies,
            rng: Mutex::new(rng),
        }
    }

    /// Email plus improvements. Never fails: errors degrade to `EmailResult::failed()`.
    pub fn generate_cold_email(
        &self,
        profile: Option<&UserProfile>,
        job: Option<&JobRecord>,
    ) -> EmailResult {
        match self.try_generate(profile, job) {
            Ok(result) => result,
            Err(e) => {
                error!("Email generation failed: {}", e);
                EmailResult::failed()
            }
        }
    }

    fn try_generate(
        &self,
        profile: Option<&UserProfile>,
        job: Option<&JobRecord>,
    ) -> Result<EmailResult, GenerationError> {
        let profile = profile.ok_or(GenerationError::MissingProfile)?;
        let job = job.ok_or(GenerationError::MissingJob)?;

        let detailed_improvements = generate_improvements(Some(profile), Some(job));
        let picks = self.draw_picks()?;
        let email = compose_email(profile, job, &self.companies, picks)?;

        Ok(EmailResult {
            email,
            detailed_improvements,
        })
    }

    fn draw_picks(&self) -> Result<Picks, GenerationError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| GenerationError::PickerPoisoned)?;
        Ok(Picks::draw(&mut rng))
    }
}

/// Renders the email text for a fixed pair of picks.
pub fn compose_email(
    profile: &UserProfile,
    job: &JobRecord,
    companies: &CompanyDirectory,
    picks: Picks,
) -> Result<String, GenerationError> {
    let name = non_empty_or(&profile.name, "Applicant");
    let email = non_empty_or(&profile.email, "my email address");
    let level = profile.experience_level.phrase();
    let title = non_empty_or(&job.title, DEFAULT_TITLE);
    let company = non_empty_or(&job.company, "your company");
    let location = non_empty_or(&job.location, DEFAULT_LOCATION);

    let job_skills = present_skills(&job.skills);
    let relevant = relevant_skills(&profile.skills, &job.skills, 3);
    let first_job_skill = job_skills.first().copied();
    let first_relevant = relevant.first().copied();

    let background = if relevant.is_empty() {
        SOFTWARE_DEVELOPMENT.to_string()
    } else {
        relevant.join(", ")
    };
    let expertise = joined_pair(&job_skills);
    let profile_pair = joined_pair(&present_skills(&profile.skills));

    let mut out = String::new();

    writeln!(out, "Subject: {title} Position at {company} - {name}")?;
    writeln!(out)?;
    writeln!(out, "Dear Hiring Manager,")?;
    writeln!(out)?;
    writeln!(
        out,
        "I hope this email finds you well. My name is {name}, and I am writing to express my strong interest in the {title} position at {company}. Having researched your company's innovative work in {}, I am excited about the opportunity to contribute to your team's continued success.",
        companies.industry_focus(company)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "With my {level} background in {background}, I believe I would be a valuable addition to your team. I was particularly drawn to this role because it aligns perfectly with my expertise in {expertise}."
    )?;
    writeln!(out)?;
    writeln!(out, "Key highlights of my background include:")?;
    writeln!(
        out,
        "• {}",
        relevant_accomplishment(picks.accomplishment, profile, company)
    )?;
    writeln!(
        out,
        "• Strong experience with {}, which I see is crucial for this role",
        first_relevant.or(first_job_skill).unwrap_or(SOFTWARE_DEVELOPMENT)
    )?;
    writeln!(out, "• {}", education_highlight(profile))?;
    writeln!(
        out,
        "• Proven ability to {}",
        skill_accomplishment(picks.skill_accomplishment, first_job_skill)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "I am particularly excited about {company}'s commitment to {} and would love to contribute to projects that {}. Your job posting mentioned {}, which aligns perfectly with my recent experience in {}.",
        companies.value(company),
        project_type(&job_skills),
        first_job_skill.unwrap_or(SOFTWARE_DEVELOPMENT),
        first_relevant.unwrap_or("related technologies")
    )?;
    writeln!(out)?;
    if let Some(education) = first_education(profile) {
        writeln!(
            out,
            "My educational background in {education} has provided me with a strong foundation in the principles underlying this role."
        )?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "I have attached my resume for your review and would welcome the opportunity to discuss how my background in {profile_pair} can contribute to {company}'s objectives. I am available for a conversation at your convenience and am excited about the possibility of joining your team in {location}."
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "You can reach me at {email} or through LinkedIn. I look forward to the opportunity to discuss how my {level} experience can benefit your team."
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Thank you for considering my application. I look forward to hearing from you soon."
    )?;
    writeln!(out)?;
    writeln!(out, "Best regards,")?;
    writeln!(out, "{name}")?;
    writeln!(out)?;
    write!(
        out,
        "P.S. I noticed that {company} is {}. I would love to be part of such an innovative and forward-thinking organization.",
        companies.news(company)
    )?;

    Ok(out)
}

/// First two entries joined with " and ".
fn joined_pair(skills: &[&str]) -> String {
    if skills.is_empty() {
        return SOFTWARE_DEVELOPMENT.to_string();
    }
    skills[..skills.len().min(2)].join(" and ")
}

fn relevant_accomplishment(index: usize, profile: &UserProfile, company: &str) -> String {
    match index % RELEVANT_ACCOMPLISHMENT_COUNT {
        0 => format!(
            "Successfully delivered projects using {} that improved system performance",
            present_skills(&profile.skills)
                .first()
                .copied()
                .unwrap_or("modern technologies")
        ),
        1 => format!("Led cross-functional teams to implement solutions similar to what {company} develops"),
        2 => format!(
            "Developed scalable applications that handled high user loads, relevant to {company}'s scale"
        ),
        3 => "Optimized existing systems resulting in significant performance improvements".to_string(),
        4 => "Collaborated with diverse teams to deliver complex technical solutions".to_string(),
        _ => format!(
            "Applied my {} expertise to solve challenging technical problems",
            profile.experience_level.phrase()
        ),
    }
}

fn skill_accomplishment(index: usize, first_job_skill: Option<&str>) -> String {
    let skill = first_job_skill.unwrap_or(SOFTWARE_DEVELOPMENT);
    match index % SKILL_ACCOMPLISHMENT_COUNT {
        0 => format!("work effectively in {skill} environments"),
        1 => format!("deliver high-quality solutions using {skill}"),
        2 => format!("collaborate with teams on {skill} projects"),
        3 => format!("solve complex problems using {skill}"),
        _ => format!("mentor others in {skill} best practices"),
    }
}

fn first_education(profile: &UserProfile) -> Option<&str> {
    profile
        .education
        .iter()
        .map(|e| e.trim())
        .find(|e| !e.is_empty())
}

fn education_highlight(profile: &UserProfile) -> String {
    match first_education(profile) {
        Some(first) => {
            format!("{first} with relevant coursework in computer science and software engineering")
        }
        None => "Continuous learning mindset with focus on staying current with industry trends"
            .to_string(),
    }
}

/// First matching category wins.
fn project_type(skills: &[&str]) -> &'static str {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    if mentions(&lowered, &["frontend", "react"]) {
        "enhance user experiences and interface design"
    } else if mentions(&lowered, &["backend", "api"]) {
        "build robust backend systems and APIs"
    } else if mentions(&lowered, &["data", "ml"]) {
        "leverage data science and machine learning"
    } else if mentions(&lowered, &["mobile"]) {
        "create innovative mobile experiences"
    } else {
        "drive technological innovation and excellence"
    }
}

fn mentions(lowered: &[String], needles: &[&str]) -> bool {
    lowered
        .iter()
        .any(|skill| needles.iter().any(|n| skill.contains(n)))
}
