//! Display types for UI components
//!
//! Plain data for each section of the page. They deserialize straight from
//! the embedded content document, so components stay props-only and can be
//! rendered with any fixture.

use folio_common::Gallery;
use serde::Deserialize;

/// Inline run of paragraph text, either plain or emphasized
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextSpan {
    Plain(String),
    Strong { strong: String },
}

pub type Paragraph = Vec<TextSpan>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Phone,
    Email,
    Github,
    Linkedin,
}

impl ContactKind {
    /// Profiles on other sites open in a new tab
    pub fn is_external(&self) -> bool {
        matches!(self, ContactKind::Github | ContactKind::Linkedin)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
}

/// Header block: photo, name and how to reach out
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub photo_url: String,
    pub location: String,
    pub contacts: Vec<ContactLink>,
    pub summary: Vec<Paragraph>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Logo {
    pub name: String,
    pub url: String,
}

/// Group of related technologies with their logos
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TechCategory {
    pub title: String,
    pub text: String,
    pub logos: Vec<Logo>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VideoEmbed {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoverImage {
    pub src: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub logo: String,
    pub alt: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: String,
    #[serde(default)]
    pub cover: Option<CoverImage>,
    #[serde(default)]
    pub video: Option<VideoEmbed>,
    /// WhatsApp number (digits only) shown as a licensing badge
    #[serde(default)]
    pub licensing_whatsapp: Option<String>,
    /// Extra classes for logos that need a backdrop
    #[serde(default)]
    pub logo_class: Option<String>,
}

impl Project {
    pub fn licensing_href(&self) -> Option<String> {
        self.licensing_whatsapp
            .as_ref()
            .map(|number| format!("https://wa.me/{number}"))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Job {
    pub logo: String,
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Course {
    pub logo: String,
    pub title: String,
    pub institution: String,
    pub period: String,
    pub hours: String,
    pub skills: Vec<String>,
}

/// Event, hackathon or program, optionally with a photo gallery
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EventEntry {
    pub logo: String,
    pub title: String,
    pub org: String,
    pub description: String,
    #[serde(default)]
    pub gallery: Gallery,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterInfo {
    pub logo_url: String,
    pub logo_alt: String,
    pub message: String,
    pub credit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_spans() {
        let paragraph: Paragraph =
            serde_json::from_str(r#"["com visão de negócio (", {"strong": "Business-oriented Developer"}, ")"]"#)
                .unwrap();
        assert_eq!(paragraph.len(), 3);
        assert_eq!(
            paragraph[1],
            TextSpan::Strong {
                strong: "Business-oriented Developer".into()
            }
        );
    }

    #[test]
    fn test_event_without_gallery() {
        let event: EventEntry = serde_json::from_str(
            r#"{"logo": "l.png", "title": "WeLab", "org": "Heineken", "description": "..."}"#,
        )
        .unwrap();
        assert!(event.gallery.is_empty());
    }

    #[test]
    fn test_licensing_href() {
        let project: Project = serde_json::from_str(
            r#"{"logo": "l", "alt": "a", "title": "t", "description": "d", "features": [], "tech": "x", "licensing_whatsapp": "5511940546526"}"#,
        )
        .unwrap();
        assert_eq!(
            project.licensing_href().as_deref(),
            Some("https://wa.me/5511940546526")
        );
        assert!(project.cover.is_none());
    }

    #[test]
    fn test_external_contacts() {
        assert!(ContactKind::Github.is_external());
        assert!(ContactKind::Linkedin.is_external());
        assert!(!ContactKind::Email.is_external());
        assert!(!ContactKind::Phone.is_external());
    }
}
