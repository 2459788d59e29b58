//! Page content
//!
//! Everything the page shows lives in one JSON document compiled into the
//! binary. It is parsed and checked once, on first use.

use folio_ui::{Course, EventEntry, FooterInfo, Job, Profile, Project, TechCategory};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{error, info};

/// Embedded content document
const PORTFOLIO_JSON: &str = include_str!("../fixtures/portfolio.json");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate {section} entry {key:?}")]
    DuplicateEntry { section: &'static str, key: String },
    #[error("Gallery image {index} of event {event:?} has no URL")]
    MissingImage { event: String, index: usize },
}

/// Head metadata: title, description, OpenGraph and Twitter cards
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub author_url: String,
    pub locale: String,
    pub og_description: String,
    pub twitter_description: String,
    pub robots: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub meta: SiteMeta,
    pub profile: Profile,
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tech: Vec<TechCategory>,
    pub projects: Vec<Project>,
    pub jobs: Vec<Job>,
    pub contributions_image: String,
    pub education: Vec<Course>,
    pub events: Vec<EventEntry>,
    pub footer: FooterInfo,
}

fn ensure_unique(
    section: &'static str,
    keys: impl IntoIterator<Item = String>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.clone()) {
            return Err(ContentError::DuplicateEntry { section, key });
        }
    }
    Ok(())
}

impl Portfolio {
    /// Check what serde cannot: list keys are unique and gallery images
    /// point somewhere. Aspect ratios are already checked while parsing.
    pub fn validate(&self) -> Result<(), ContentError> {
        ensure_unique("hard skill", self.hard_skills.iter().cloned())?;
        ensure_unique("soft skill", self.soft_skills.iter().cloned())?;
        ensure_unique("tech", self.tech.iter().map(|c| c.title.clone()))?;
        ensure_unique("project", self.projects.iter().map(|p| p.title.clone()))?;
        ensure_unique(
            "job",
            self.jobs
                .iter()
                .map(|j| format!("{}-{}", j.company, j.period)),
        )?;
        ensure_unique("course", self.education.iter().map(|c| c.title.clone()))?;
        ensure_unique("event", self.events.iter().map(|e| e.title.clone()))?;

        for event in &self.events {
            for (index, image) in event.gallery.images().iter().enumerate() {
                if image.src.trim().is_empty() {
                    return Err(ContentError::MissingImage {
                        event: event.title.clone(),
                        index,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn gallery_image_count(&self) -> usize {
        self.events.iter().map(|e| e.gallery.len()).sum()
    }
}

pub fn parse(json: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_str(json)?;
    portfolio.validate()?;
    Ok(portfolio)
}

static PORTFOLIO: OnceLock<Result<Portfolio, ContentError>> = OnceLock::new();

/// The embedded portfolio, parsed on first call
pub fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    PORTFOLIO
        .get_or_init(|| {
            let result = parse(PORTFOLIO_JSON);
            match &result {
                Ok(p) => info!(
                    "Loaded portfolio content: {} projects, {} events, {} gallery images",
                    p.projects.len(),
                    p.events.len(),
                    p.gallery_image_count()
                ),
                Err(e) => error!("Invalid portfolio content: {}", e),
            }
            result
        })
        .as_ref()
}
