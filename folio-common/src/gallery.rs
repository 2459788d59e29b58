//! Event photo galleries
//!
//! Thumbnails sit in a wrapping row of fixed height; each one is as wide as
//! its aspect ratio requires.

use crate::error::GalleryError;
use crate::lightbox::LightboxGroup;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Height in pixels of a gallery thumbnail row
pub const THUMBNAIL_ROW_HEIGHT: u32 = 160;

/// Image aspect ratio written as `"W:H"`, e.g. `"4:3"` or `"1.91:1"`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    pub const LANDSCAPE: Self = Self {
        width: 4.0,
        height: 3.0,
    };

    pub fn new(width: f64, height: f64) -> Result<Self, GalleryError> {
        let text = format!("{width}:{height}");
        if !width.is_finite() || !height.is_finite() {
            return Err(GalleryError::Malformed(text));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GalleryError::NonPositive(text));
        }
        Ok(Self { width, height })
    }

    /// Width that keeps this ratio at the given height, rounded to the nearest pixel
    pub fn width_for_height(&self, height: u32) -> u32 {
        (f64::from(height) * self.width / self.height).round() as u32
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GalleryError::Malformed(s.to_string());
        let (w, h) = s.trim().split_once(':').ok_or_else(malformed)?;
        let width: f64 = w.trim().parse().map_err(|_| malformed())?;
        let height: f64 = h.trim().parse().map_err(|_| malformed())?;
        if !width.is_finite() || !height.is_finite() {
            return Err(malformed());
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GalleryError::NonPositive(s.to_string()));
        }
        Ok(Self { width, height })
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = GalleryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Gallery entries may be a bare URL or `{ "src": ..., "ratio": "W:H" }`.
///
/// The ratio stays raw here so a bad value is reported by `TryFrom` with its
/// own message instead of failing the untagged match.
#[derive(Deserialize)]
#[serde(untagged)]
enum GalleryEntry {
    Url(String),
    Image {
        src: String,
        #[serde(default)]
        ratio: Option<String>,
    },
}

/// One photo in an event gallery
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "GalleryEntry")]
pub struct GalleryImage {
    pub src: String,
    pub ratio: AspectRatio,
}

impl TryFrom<GalleryEntry> for GalleryImage {
    type Error = GalleryError;

    fn try_from(entry: GalleryEntry) -> Result<Self, Self::Error> {
        match entry {
            GalleryEntry::Url(src) => Ok(Self {
                src,
                ratio: AspectRatio::default(),
            }),
            GalleryEntry::Image { src, ratio } => {
                let ratio = match ratio {
                    Some(ratio) => ratio.parse()?,
                    None => AspectRatio::default(),
                };
                Ok(Self { src, ratio })
            }
        }
    }
}

impl GalleryImage {
    pub fn thumbnail_width(&self) -> u32 {
        self.ratio.width_for_height(THUMBNAIL_ROW_HEIGHT)
    }
}

/// Ordered photos belonging to one event
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Gallery(Vec<GalleryImage>);

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self(images)
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn urls(&self) -> Vec<String> {
        self.0.iter().map(|image| image.src.clone()).collect()
    }

    /// Lightbox input for a click on thumbnail `index`
    pub fn group(
        &self,
        index: usize,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> LightboxGroup {
        LightboxGroup {
            urls: self.urls(),
            start_index: index,
            label: label.into(),
            icon: icon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratio() {
        let ratio: AspectRatio = "3:4".parse().unwrap();
        assert_eq!(ratio, AspectRatio::new(3.0, 4.0).unwrap());
        assert_eq!(ratio.to_string(), "3:4");
        assert_eq!(" 16 : 9 ".parse::<AspectRatio>().unwrap().to_string(), "16:9");
    }

    #[test]
    fn test_parse_ratio_rejects_malformed() {
        assert_eq!(
            "4x3".parse::<AspectRatio>(),
            Err(GalleryError::Malformed("4x3".into()))
        );
        assert!(matches!(
            "a:b".parse::<AspectRatio>(),
            Err(GalleryError::Malformed(_))
        ));
        assert!(matches!(
            "inf:1".parse::<AspectRatio>(),
            Err(GalleryError::Malformed(_))
        ));
        assert_eq!(
            "-4:3".parse::<AspectRatio>(),
            Err(GalleryError::NonPositive("-4:3".into()))
        );
        assert_eq!(
            "4:0".parse::<AspectRatio>(),
            Err(GalleryError::NonPositive("4:0".into()))
        );
    }

    #[test]
    fn test_thumbnail_widths() {
        let width = |r: &str| r.parse::<AspectRatio>().unwrap().width_for_height(160);
        assert_eq!(width("4:3"), 213);
        assert_eq!(width("3:4"), 120);
        assert_eq!(width("1:1"), 160);
        assert_eq!(width("16:9"), 284);
    }

    #[test]
    fn test_decimal_ratio() {
        let ratio: AspectRatio = "1.91:1".parse().unwrap();
        assert_eq!(ratio.to_string(), "1.91:1");
        assert_eq!(ratio.width_for_height(THUMBNAIL_ROW_HEIGHT), 306);
        assert_eq!(
            "16:10.5"
                .parse::<AspectRatio>()
                .unwrap()
                .width_for_height(THUMBNAIL_ROW_HEIGHT),
            244
        );

        let gallery: Gallery =
            serde_json::from_str(r#"[{"src": "a.jpg", "ratio": "1.91:1"}]"#).unwrap();
        assert_eq!(gallery.images()[0].thumbnail_width(), 306);
    }

    #[test]
    fn test_deserialize_mixed_entries() {
        let gallery: Gallery = serde_json::from_str(
            r#"["https://img/a.jpg", {"src": "https://img/b.jpg", "ratio": "1:1"}, {"src": "https://img/c.jpg"}]"#,
        )
        .unwrap();
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.images()[0].ratio, AspectRatio::LANDSCAPE);
        assert_eq!(gallery.images()[1].thumbnail_width(), 160);
        assert_eq!(gallery.images()[2].ratio, AspectRatio::LANDSCAPE);
    }

    #[test]
    fn test_deserialize_rejects_bad_ratio() {
        let err = serde_json::from_str::<Gallery>(r#"[{"src": "https://img/a.jpg", "ratio": "wide"}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("malformed aspect ratio \"wide\""), "{err}");
    }

    #[test]
    fn test_group_for_click() {
        let gallery = Gallery::new(vec![
            GalleryImage {
                src: "a".into(),
                ratio: AspectRatio::default(),
            },
            GalleryImage {
                src: "b".into(),
                ratio: AspectRatio::default(),
            },
        ]);
        let group = gallery.group(1, "DevOps e GenAI", "logo.jpg");
        assert_eq!(group.urls, vec!["a", "b"]);
        assert_eq!(group.start_index, 1);
        assert_eq!(group.label, "DevOps e GenAI");
        assert_eq!(group.icon, "logo.jpg");
    }
}
