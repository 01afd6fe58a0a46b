//! Portfolio content rendered by the pages.
//!
//! The content ships embedded in the binary and can be replaced with a TOML
//! file of the same shape (`site.content_path`).

use config::{Config as ConfigBuilder, File, FileFormat};
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Owner {
    pub name: String,
    pub first_name: String,
    pub brand: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default)]
    pub values: Vec<CoreValue>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency in percent
    pub level: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Social {
    pub label: String,
    pub url: String,
}

impl Portfolio {
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let builder = match path {
            Some(path) => {
                ConfigBuilder::builder().add_source(File::with_name(path).format(FileFormat::Toml))
            }
            None => ConfigBuilder::builder().add_source(File::from_str(EMBEDDED, FileFormat::Toml)),
        };

        let portfolio: Portfolio = builder.build()?.try_deserialize()?;

        portfolio.validate().map_err(|e| anyhow::anyhow!(e))?;

        Ok(portfolio)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::load(None)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.owner.name.trim().is_empty() {
            return Err("Portfolio owner name must be set".to_string());
        }

        for category in &self.skills {
            if let Some(skill) = category.skills.iter().find(|s| s.level > 100) {
                return Err(format!(
                    "Skill {} in {} has level {} above 100",
                    skill.name, category.title, skill.level
                ));
            }
        }

        Ok(())
    }
}
