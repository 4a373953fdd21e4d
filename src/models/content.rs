//! Static content records shown on the page.

use serde::Deserialize;

use crate::config::{PLACEHOLDER_IMAGE_BASE, PLACEHOLDER_IMAGE_SIZE};

/// A portfolio entry shown in the gallery.
///
/// Loaded once from the embedded content document and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DisplayItem {
    /// Stable identifier, also used as the placeholder image seed.
    pub id: String,
    pub title: String,
    /// Category label shown under the title.
    pub category: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Embeddable player URL. Items with media open the video overlay.
    #[serde(default)]
    pub media: Option<String>,
    /// External watch page, opened in a new tab when there is no media.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl DisplayItem {
    /// Check if the item carries a playable-media reference.
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    /// Placeholder thumbnail used when the real one fails to load.
    ///
    /// Format: `{PLACEHOLDER_IMAGE_BASE}/{id}/{width}/{height}`
    pub fn fallback_thumbnail(&self) -> String {
        placeholder_image(&self.id)
    }
}

/// Build a placeholder image URL seeded by `seed`.
pub fn placeholder_image(seed: &str) -> String {
    let (width, height) = PLACEHOLDER_IMAGE_SIZE;
    format!("{}/{}/{}/{}", PLACEHOLDER_IMAGE_BASE, seed, width, height)
}

/// Image to swap in after `current` failed to load.
///
/// Returns `None` once the fallback itself is showing.
pub fn image_fallback(current: &str, fallback: &str) -> Option<String> {
    (current != fallback).then(|| fallback.to_string())
}

/// A headline statistic in the about section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Highlight {
    pub id: String,
    pub stat: String,
    pub label: String,
}

/// Icon shown on a service card.
///
/// Unknown names deserialize to [`ServiceIcon::Other`], which renders as film.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    #[default]
    Film,
    Cpu,
    Zap,
    Monitor,
    Compass,
    #[serde(other)]
    Other,
}

/// An offered service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: ServiceIcon,
}

/// A long-form project breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub image: String,
    pub brief: String,
    pub concept: String,
    pub workflow: String,
    pub output: String,
    pub impact: String,
}

impl CaseStudy {
    /// Labelled breakdown rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Brief", self.brief.as_str()),
            ("Concept", self.concept.as_str()),
            ("Workflow", self.workflow.as_str()),
            ("Output", self.output.as_str()),
            ("Impact", self.impact.as_str()),
        ]
    }
}

/// A journal entry teaser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Display date, kept as authored.
    pub date: String,
    pub excerpt: String,
}

/// All static content of the site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub projects: Vec<DisplayItem>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

#[cfg(test)]
pub(crate) fn item(id: &str, media: Option<&str>) -> DisplayItem {
    DisplayItem {
        id: id.to_string(),
        title: format!("{} title", id),
        category: "Motion".to_string(),
        thumbnail: format!("https://picsum.photos/seed/{}/800/600", id),
        media: media.map(String::from),
        link: None,
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_media() {
        assert!(item("sony-bravia", Some("https://streamable.com/e/3s5t42")).has_media());
        assert!(!item("huddle-global", None).has_media());
    }

    #[test]
    fn test_fallback_thumbnail() {
        assert_eq!(
            item("led-visuals", None).fallback_thumbnail(),
            "https://picsum.photos/seed/led-visuals/800/600"
        );
    }

    #[test]
    fn test_image_fallback_applies_once() {
        let fallback = placeholder_image("cs-1");
        assert_eq!(
            image_fallback("https://images.unsplash.com/broken", &fallback),
            Some(fallback.clone())
        );
        assert_eq!(image_fallback(&fallback, &fallback), None);
    }

    #[test]
    fn test_service_icon_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            icon: ServiceIcon,
        }

        let parse = |name: &str| {
            toml::from_str::<Wrapper>(&format!("icon = \"{}\"", name))
                .map(|w| w.icon)
                .ok()
        };
        assert_eq!(parse("film"), Some(ServiceIcon::Film));
        assert_eq!(parse("monitor"), Some(ServiceIcon::Monitor));
        assert_eq!(parse("sparkles"), Some(ServiceIcon::Other));
    }

    #[test]
    fn test_case_study_rows_order() {
        let study = CaseStudy {
            id: "cs".to_string(),
            title: "Case".to_string(),
            image: String::new(),
            brief: "b".to_string(),
            concept: "c".to_string(),
            workflow: "w".to_string(),
            output: "o".to_string(),
            impact: "i".to_string(),
        };
        let labels: Vec<_> = study.rows().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Brief", "Concept", "Workflow", "Output", "Impact"]);
        assert_eq!(study.rows()[4].1, "i");
    }
}
