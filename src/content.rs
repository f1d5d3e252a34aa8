use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::contact::ContactLink;
use crate::proficiency::{ProficiencyRating, RatingError};

pub const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<PortfolioContent, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid rating for skill {skill}: {source}")]
    InvalidRating {
        skill: String,
        #[source]
        source: RatingError,
    },
    #[error("section {0} has no entries")]
    Empty(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<Skill>,
    pub ai_tools: Vec<AiTool>,
    pub about: About,
    pub contacts: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub hero_image: String,
    pub resume_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub logo: String,
    pub verification_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Zap,
    Cloud,
    Shield,
    Network,
    Headphones,
    Users,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Zap => "⚡",
            Self::Cloud => "☁️",
            Self::Shield => "🛡️",
            Self::Network => "🌐",
            Self::Headphones => "🎧",
            Self::Users => "👥",
        }
    }
}

/// Raw skill entry as written in the content file. Ratings are checked in
/// [`validate`] so a bad entry names the skill it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSkill {
    name: String,
    description: String,
    icon: SkillIcon,
    proficiency: u32,
    max_proficiency: u32,
    #[serde(default)]
    grade: Option<String>,
    #[serde(default)]
    mastered_label: Option<String>,
    #[serde(default)]
    tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSkill")]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub icon: SkillIcon,
    pub rating: ProficiencyRating,
    pub grade: Option<String>,
    pub mastered_label: Option<String>,
    pub tools: Vec<String>,
}

/// Carries the skill name along with the rating failure so it survives
/// serde's error wrapping.
#[derive(Error, Debug)]
#[error("{skill}: {source}")]
struct SkillRatingError {
    skill: String,
    source: RatingError,
}

impl TryFrom<RawSkill> for Skill {
    type Error = SkillRatingError;

    fn try_from(raw: RawSkill) -> Result<Self, Self::Error> {
        let rating = ProficiencyRating::new(raw.proficiency, raw.max_proficiency).map_err(
            |source| SkillRatingError {
                skill: raw.name.clone(),
                source,
            },
        )?;
        Ok(Self {
            name: raw.name,
            description: raw.description,
            icon: raw.icon,
            rating,
            grade: raw.grade,
            mastered_label: raw.mastered_label,
            tools: raw.tools,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTool {
    pub name: String,
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub badges: Vec<String>,
    pub portrait: String,
}

/// Reads and validates a content file from the embedded assets.
pub fn load(path: &str) -> Result<PortfolioContent, ContentError> {
    let file = Assets::get(path).ok_or_else(|| ContentError::Missing(path.to_string()))?;
    parse(path, &file.data)
}

pub fn parse(path: &str, data: &[u8]) -> Result<PortfolioContent, ContentError> {
    // Skills are deserialized loosely first so rating failures keep their own error variant
    let value: serde_json::Value =
        serde_json::from_slice(data).map_err(|source| ContentError::Parse {
            path: path.to_string(),
            source,
        })?;
    validate_ratings(&value)?;
    let content: PortfolioContent =
        serde_json::from_value(value).map_err(|source| ContentError::Parse {
            path: path.to_string(),
            source,
        })?;
    validate(&content)?;
    Ok(content)
}

fn validate_ratings(value: &serde_json::Value) -> Result<(), ContentError> {
    let Some(skills) = value.get("skills").and_then(|s| s.as_array()) else {
        return Ok(());
    };
    for skill in skills {
        if let Ok(raw) = serde_json::from_value::<RawSkill>(skill.clone()) {
            if let Err(e) = Skill::try_from(raw) {
                return Err(ContentError::InvalidRating {
                    skill: e.skill,
                    source: e.source,
                });
            }
        }
    }
    Ok(())
}

fn validate(content: &PortfolioContent) -> Result<(), ContentError> {
    if content.projects.is_empty() {
        return Err(ContentError::Empty("projects"));
    }
    if content.skills.is_empty() {
        return Err(ContentError::Empty("skills"));
    }
    if content.contacts.is_empty() {
        return Err(ContentError::Empty("contacts"));
    }
    Ok(())
}

/// The embedded portfolio, parsed once per process.
pub fn portfolio() -> Result<&'static PortfolioContent, &'static ContentError> {
    PORTFOLIO.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proficiency::Tier;

    #[test]
    fn test_embedded_content_loads() {
        let content = portfolio().expect("embedded content should be valid");
        assert!(!content.profile.name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.certifications.is_empty());
        assert!(!content.ai_tools.is_empty());
        assert!(!content.contacts.is_empty());
        for skill in &content.skills {
            assert!(!skill.tools.is_empty(), "{} has no tools", skill.name);
        }
    }

    #[test]
    fn test_generative_ai_skill() {
        let content = portfolio().unwrap();
        let skill = content
            .skills
            .iter()
            .find(|s| s.name == "Generative AI")
            .expect("Generative AI skill should exist");
        assert_eq!(skill.rating.current(), 93);
        assert_eq!(skill.rating.max(), 100);
        assert_eq!(skill.rating.tier(), Tier::Mastered);
        assert_eq!(skill.icon, SkillIcon::Zap);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load("nope.json"),
            Err(ContentError::Missing(path)) if path == "nope.json"
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = parse("broken.json", b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert!(err.to_string().starts_with("couldn't parse broken.json"));
    }

    fn minimal(skill: &str) -> String {
        format!(
            r#"{{
                "profile": {{"name": "N", "tagline": "T", "hero_image": "/h.jpg", "resume_path": "/r.pdf"}},
                "projects": [{{"title": "P", "description": "D", "technologies": ["Rust"]}}],
                "experience": [],
                "certifications": [],
                "skills": [{skill}],
                "ai_tools": [],
                "about": {{"paragraphs": [], "badges": [], "portrait": "/p.png"}},
                "contacts": [{{"kind": "email", "value": "a@b.c", "href": "mailto:a@b.c"}}]
            }}"#
        )
    }

    #[test]
    fn test_invalid_rating_names_skill() {
        let json = minimal(
            r#"{"name": "Juggling", "description": "d", "icon": "zap", "proficiency": 5, "max_proficiency": 0}"#,
        );
        let err = parse("test.json", json.as_bytes()).unwrap_err();
        assert!(matches!(
            &err,
            ContentError::InvalidRating { skill, source: RatingError::ZeroMax } if skill == "Juggling"
        ));

        let json = minimal(
            r#"{"name": "Juggling", "description": "d", "icon": "zap", "proficiency": 120, "max_proficiency": 100}"#,
        );
        assert!(matches!(
            parse("test.json", json.as_bytes()),
            Err(ContentError::InvalidRating {
                source: RatingError::ExceedsMax { current: 120, max: 100 },
                ..
            })
        ));
    }

    #[test]
    fn test_minimal_content_defaults() {
        let json = minimal(
            r#"{"name": "Rust", "description": "d", "icon": "shield", "proficiency": 40, "max_proficiency": 100}"#,
        );
        let content = parse("test.json", json.as_bytes()).unwrap();
        let skill = &content.skills[0];
        assert_eq!(skill.rating.tier(), Tier::Low);
        assert!(skill.grade.is_none());
        assert!(skill.tools.is_empty());
        assert!(content.projects[0].github_url.is_none());
    }

    #[test]
    fn test_empty_section_rejected() {
        let json = minimal("").replace(
            r#"[{"title": "P", "description": "D", "technologies": ["Rust"]}]"#,
            "[]",
        );
        assert!(matches!(
            parse("test.json", json.as_bytes()),
            Err(ContentError::Empty("projects"))
        ));
    }
}
