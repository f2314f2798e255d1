//! Loose skill matching shared by the improvement engine and the email synthesizer.
//!
//! Blank skills never match and are never reported.

/// Case-insensitive containment in either direction ("React" ~ "React Native").
pub fn skills_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Non-blank skills, trimmed, in input order.
pub fn present_skills(skills: &[String]) -> Vec<&str> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Job skills the profile does not cover, in job order.
pub fn missing_skills<'a>(job_skills: &'a [String], profile_skills: &[String]) -> Vec<&'a str> {
    present_skills(job_skills)
        .into_iter()
        .filter(|job_skill| !profile_skills.iter().any(|p| skills_match(p, job_skill)))
        .collect()
}

/// Profile skills that cover some job skill, in profile order, at most `limit`.
pub fn relevant_skills<'a>(
    profile_skills: &'a [String],
    job_skills: &[String],
    limit: usize,
) -> Vec<&'a str> {
    present_skills(profile_skills)
        .into_iter()
        .filter(|skill| job_skills.iter().any(|j| skills_match(skill, j)))
        .take(limit)
        .collect()
}
