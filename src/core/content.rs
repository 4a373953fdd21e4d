//! Site content loading.
//!
//! Content is a TOML document embedded at compile time. It is parsed and
//! validated once on start; components only ever see a validated
//! [`SiteContent`].

use std::collections::HashSet;

use crate::config::SITE_CONTENT;
use crate::core::error::ContentError;
use crate::models::SiteContent;
use crate::utils::validate_external_url;

/// Load the embedded site content.
pub fn load_site_content() -> Result<SiteContent, ContentError> {
    parse_content(SITE_CONTENT)
}

/// Parse and validate a content document.
pub fn parse_content(source: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = toml::from_str(source)?;
    validate(&content)?;
    Ok(content)
}

fn validate(content: &SiteContent) -> Result<(), ContentError> {
    if content.projects.is_empty() {
        return Err(ContentError::EmptyGallery);
    }

    unique_ids("project", content.projects.iter().map(|p| p.id.as_str()))?;
    unique_ids("highlight", content.highlights.iter().map(|h| h.id.as_str()))?;
    unique_ids("service", content.services.iter().map(|s| s.id.as_str()))?;
    unique_ids("case study", content.case_studies.iter().map(|c| c.id.as_str()))?;
    unique_ids("post", content.posts.iter().map(|p| p.id.as_str()))?;

    for project in &content.projects {
        let fields = [
            ("thumbnail", Some(&project.thumbnail)),
            ("media", project.media.as_ref()),
            ("link", project.link.as_ref()),
        ];
        for (field, url) in fields {
            if let Some(url) = url {
                check_url("project", &project.id, field, url)?;
            }
        }
    }

    for study in &content.case_studies {
        check_url("case study", &study.id, "image", &study.image)?;
    }

    Ok(())
}

fn unique_ids<'a>(
    section: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                section,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_url(
    section: &'static str,
    id: &str,
    field: &'static str,
    url: &str,
) -> Result<(), ContentError> {
    validate_external_url(url)
        .map(|_| ())
        .map_err(|source| ContentError::InvalidUrl {
            section,
            id: id.to_string(),
            field,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceIcon;
    use crate::utils::UrlValidationError;

    const MINIMAL: &str = r#"
        [[projects]]
        id = "a"
        title = "A"
        category = "Motion"
        thumbnail = "https://picsum.photos/seed/a/800/600"
    "#;

    #[test]
    fn test_embedded_content_loads() {
        let content = load_site_content().expect("embedded content must be valid");
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.highlights.len(), 4);
        assert_eq!(content.services.len(), 5);
        assert_eq!(content.case_studies.len(), 4);
        assert_eq!(content.posts.len(), 3);
    }

    #[test]
    fn test_embedded_gallery_media() {
        let content = load_site_content().expect("embedded content must be valid");
        let with_media: Vec<_> = content
            .projects
            .iter()
            .filter(|p| p.has_media())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(with_media, ["sony-bravia"]);
        assert_eq!(content.projects[0].title, "Sony Bravia – AI Commercial");
    }

    #[test]
    fn test_embedded_service_icons() {
        let content = load_site_content().expect("embedded content must be valid");
        let icons: Vec<_> = content.services.iter().map(|s| s.icon).collect();
        assert_eq!(
            icons,
            [
                ServiceIcon::Film,
                ServiceIcon::Cpu,
                ServiceIcon::Zap,
                ServiceIcon::Monitor,
                ServiceIcon::Compass,
            ]
        );
    }

    #[test]
    fn test_minimal_document() {
        let content = parse_content(MINIMAL).unwrap();
        assert_eq!(content.projects.len(), 1);
        assert!(content.services.is_empty());
        assert!(content.posts.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_content("[[projects]]\nid = ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = parse_content("[[projects]]\nid = \"a\"\ntitle = \"A\"").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_gallery() {
        assert_eq!(parse_content(""), Err(ContentError::EmptyGallery));
    }

    #[test]
    fn test_duplicate_project_id() {
        let doc = format!("{MINIMAL}{MINIMAL}");
        assert_eq!(
            parse_content(&doc),
            Err(ContentError::DuplicateId {
                section: "project",
                id: "a".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_media_url() {
        let doc = format!("{MINIMAL}media = \"https://evil.com/e/1\"\n");
        let err = parse_content(&doc).unwrap_err();
        assert_eq!(
            err,
            ContentError::InvalidUrl {
                section: "project",
                id: "a".to_string(),
                field: "media",
                source: UrlValidationError::DomainNotAllowed("evil.com".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "project 'a' has an invalid media: domain 'evil.com' is not allowed"
        );
    }

    #[test]
    fn test_insecure_thumbnail_rejected() {
        let doc = MINIMAL.replace("https://picsum", "http://picsum");
        assert!(matches!(
            parse_content(&doc),
            Err(ContentError::InvalidUrl {
                field: "thumbnail",
                source: UrlValidationError::InsecureProtocol,
                ..
            })
        ));
    }
}
