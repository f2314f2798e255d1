//! Decomposes the sheet's composite "<Company> hiring <Title> in <Location>"
//! cell and tags recognized skills.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::job::{DEFAULT_JOB_TYPE, DEFAULT_LOCATION};

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const DEFAULT_TITLE: &str = "Software Engineer";

const HIRING_SEPARATOR: &str = " hiring ";

/// Recognized skill keywords, in the order they are reported.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Java",
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "Angular",
    "Vue",
    "TypeScript",
    "PHP",
    "C++",
    "C#",
    ".NET",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "DevOps",
    "Machine Learning",
    "AI",
    "Data Science",
    "Full Stack",
    "Frontend",
    "Backend",
    "Mobile",
    "Android",
    "iOS",
    "Flutter",
];

static RE_LOCATION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" in (.+)$").unwrap());
static RE_SPACED_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s*|\s*-\s+").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub company: String,
    pub title: String,
    pub location: String,
}

impl Default for Headline {
    fn default() -> Self {
        Headline {
            company: UNKNOWN_COMPANY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTags {
    pub skills: Vec<String>,
    pub job_type: String,
}

/// Splits a composite headline into company, title and location.
/// Text without " hiring " yields the defaults.
pub fn parse_headline(composite: &str) -> Headline {
    let Some((company, remaining)) = composite.split_once(HIRING_SEPARATOR) else {
        return Headline::default();
    };

    let mut headline = Headline {
        company: company.trim().to_string(),
        ..Headline::default()
    };

    let title = match RE_LOCATION_SUFFIX.captures(remaining) {
        Some(caps) => {
            headline.location = caps[1].trim().to_string();
            let suffix_start = caps.get(0).map_or(remaining.len(), |m| m.start());
            &remaining[..suffix_start]
        }
        None => remaining,
    };

    headline.title = normalize_title(title);
    headline
}

/// Spaces out standalone hyphens ("Engineer -Platform" → "Engineer - Platform")
/// and collapses whitespace. Hyphenated words like "Full-stack" are kept.
fn normalize_title(title: &str) -> String {
    let spaced = RE_SPACED_HYPHEN.replace_all(title.trim(), " - ");
    RE_WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

/// Tags vocabulary skills mentioned anywhere in the headline.
/// Employment type is not inferred.
pub fn tag_job(composite: &str) -> JobTags {
    let haystack = composite.to_lowercase();
    let skills = SKILL_VOCABULARY
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    JobTags {
        skills,
        job_type: DEFAULT_JOB_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_headline() {
        let h = parse_headline("Google hiring Software Engineer III in Hyderabad, Telangana, India");
        assert_eq!(h.company, "Google");
        assert_eq!(h.title, "Software Engineer III");
        assert_eq!(h.location, "Hyderabad, Telangana, India");
    }

    #[test]
    fn test_headline_without_location_keeps_default() {
        let h = parse_headline("Stripe hiring Backend Engineer");
        assert_eq!(h.company, "Stripe");
        assert_eq!(h.title, "Backend Engineer");
        assert_eq!(h.location, DEFAULT_LOCATION);
    }

    #[test]
    fn test_headline_without_separator_uses_defaults() {
        let h = parse_headline("Senior Rust Developer, Berlin");
        assert_eq!(h, Headline::default());
        assert_eq!(h.company, "Unknown Company");
        assert_eq!(h.title, "Software Engineer");
        assert_eq!(h.location, "Remote");
    }

    #[test]
    fn test_separator_is_case_sensitive() {
        assert_eq!(parse_headline("Acme Hiring SRE in Oslo"), Headline::default());
    }

    #[test]
    fn test_leftmost_in_starts_location() {
        let h = parse_headline("Acme hiring Engineer in Data Platform in Berlin");
        assert_eq!(h.title, "Engineer");
        assert_eq!(h.location, "Data Platform in Berlin");
    }

    #[test]
    fn test_title_hyphens_are_spaced_and_whitespace_collapsed() {
        let h = parse_headline("Vercel hiring Frontend Engineer -React   (Next.js) in Remote");
        assert_eq!(h.title, "Frontend Engineer - React (Next.js)");
    }

    #[test]
    fn test_hyphenated_words_survive() {
        let h = parse_headline("Qualcomm hiring Java Full-stack Developer in Hyderabad");
        assert_eq!(h.title, "Java Full-stack Developer");
    }

    #[test]
    fn test_tags_follow_vocabulary_order() {
        let tags = tag_job("Acme hiring React and Python Developer (AWS) in Pune");
        assert_eq!(tags.skills, vec!["Python", "React", "AWS"]);
        assert_eq!(tags.job_type, "Full-time");
    }

    #[test]
    fn test_tags_are_case_insensitive_substrings() {
        let tags = tag_job("acme hiring javascript engineer");
        // "java" is a substring of "javascript".
        assert_eq!(tags.skills, vec!["Java", "JavaScript"]);
    }

    #[test]
    fn test_no_vocabulary_hits_yields_empty_skills() {
        assert!(tag_job("Bakery hiring Pastry Chef in Lyon").skills.is_empty());
    }

    #[test]
    fn test_default_path_still_tags_skills() {
        let h = parse_headline("Kubernetes wizard wanted");
        assert_eq!(h, Headline::default());
        assert_eq!(tag_job("Kubernetes wizard wanted").skills, vec!["Kubernetes"]);
    }
}
