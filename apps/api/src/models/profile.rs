use std::fmt;

use serde::{Deserialize, Serialize};

/// Career stage selected on the profile form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    Entry,
    #[default]
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior Level")]
    Senior,
    #[serde(rename = "Lead/Principal")]
    LeadPrincipal,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
            ExperienceLevel::LeadPrincipal => "Lead/Principal",
        }
    }

    /// Lower-cased label, as interpolated mid-sentence ("your mid level background").
    pub fn phrase(&self) -> String {
        self.label().to_lowercase()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

impl UserProfile {
    /// Stand-in profile used when a caller asks for an email without one.
    pub fn sample() -> Self {
        UserProfile {
            name: "Professional".to_string(),
            email: "professional@example.com".to_string(),
            experience_level: ExperienceLevel::Mid,
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
            education: vec!["Bachelor's Degree in Computer Science".to_string()],
        }
    }

    /// Returns the first missing required field, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else {
            None
        }
    }
}
