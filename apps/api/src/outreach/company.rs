//! Company phrase directory: per-company wording used by the cold email.
//!
//! Keyed by exact company name. Each phrase falls back independently to the
//! directory default, so an entry may override only some of them.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

const EMBEDDED_COMPANY_PROFILES: &str = include_str!("../../data/company_profiles.json");

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultPhrases {
    pub industry_focus: String,
    pub value: String,
    pub news: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyPhrases {
    #[serde(default)]
    pub industry_focus: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub news: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyDirectory {
    default: DefaultPhrases,
    #[serde(default)]
    companies: HashMap<String, CompanyPhrases>,
}

impl CompanyDirectory {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Company profiles JSON is malformed")
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_COMPANY_PROFILES)
    }

    /// Loads the directory from `path` when given, otherwise the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let directory = Self::from_json(&json)?;
                info!(
                    "Loaded {} company profiles from {}",
                    directory.companies.len(),
                    path.display()
                );
                Ok(directory)
            }
            None => Self::embedded(),
        }
    }

    fn entry(&self, company: &str) -> Option<&CompanyPhrases> {
        self.companies.get(company)
    }

    /// "Having researched your company's innovative work in {industry_focus}".
    pub fn industry_focus(&self, company: &str) -> &str {
        self.entry(company)
            .and_then(|p| p.industry_focus.as_deref())
            .unwrap_or(&self.default.industry_focus)
    }

    /// "{company}'s commitment to {value}".
    pub fn value(&self, company: &str) -> &str {
        self.entry(company)
            .and_then(|p| p.value.as_deref())
            .unwrap_or(&self.default.value)
    }

    /// "I noticed that {company} is {news}".
    pub fn news(&self, company: &str) -> &str {
        self.entry(company)
            .and_then(|p| p.news.as_deref())
            .unwrap_or(&self.default.news)
    }
}
