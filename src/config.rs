//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Content assets are loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Gallery, highlights, services, case studies and journal entries.
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Site Identity
// =============================================================================

/// Owner name shown in the navbar, overlays and footer.
pub const OWNER_NAME: &str = "Dheeraj Dharan";

/// Monogram shown in the navbar brand badge.
pub const OWNER_INITIALS: &str = "DD";

/// Role line used in the resume overlay caption.
pub const OWNER_ROLE: &str = "Senior Motion Designer";

/// City shown in the hero badge.
pub const OWNER_CITY: &str = "Dubai";

/// Full location shown in the footer.
pub const OWNER_LOCATION: &str = "Dubai, United Arab Emirates";

/// Years of professional experience, rendered as `{n}+`.
pub const YEARS_EXPERIENCE: u32 = 7;

// =============================================================================
// Images
// =============================================================================

/// Portrait used in the about section.
pub const PROFILE_IMAGE: &str = "https://lh3.googleusercontent.com/d/1mwrzo0RRK1nqIp1-R0wVFHBZ9pyUc4S3";

/// Full-bleed hero background.
pub const HERO_BG_IMAGE: &str = "https://photos.fife.usercontent.com/pw/AP1GczONX91QH4qH4ifrYx0MCdiRzbKGE_uf8bmqYnauUjBNCc0V1eDwIXa7Og=w1699-h948-s-no-gm?authuser=0";

/// Placeholder image service; the item id is used as the seed.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/seed";

/// Placeholder image dimensions (width, height).
pub const PLACEHOLDER_IMAGE_SIZE: (u32, u32) = (800, 600);

// =============================================================================
// Resume Document
// =============================================================================

/// Shareable resume link, used for the download button.
pub const RESUME_LINK: &str =
    "https://drive.google.com/file/d/147evtKYh90pDQuHeGWVwGcIU-n6-Te1_/view?usp=sharing";

/// Embeddable resume preview rendered inside the document overlay.
pub const RESUME_EMBED: &str =
    "https://drive.google.com/file/d/147evtKYh90pDQuHeGWVwGcIU-n6-Te1_/preview";

// =============================================================================
// Contact
// =============================================================================

/// Contact endpoints rendered in the services CTA and footer.
pub mod contact {
    /// Contact mailbox.
    pub const EMAIL: &str = "dheerajkdharan58@gmail.com";

    /// WhatsApp click-to-chat link.
    pub const WHATSAPP: &str = "https://wa.me/917907262805";

    /// LinkedIn profile.
    pub const LINKEDIN: &str = "https://www.linkedin.com/in/dheerajdharan/";
}

/// Allowed domains for external links (security).
/// Content links to other domains are rejected when content loads.
pub const ALLOWED_LINK_DOMAINS: &[&str] = &[
    "streamable.com",
    "youtube.com",
    "youtube-nocookie.com",
    "vimeo.com",
    "player.vimeo.com",
    "drive.google.com",
    "lh3.googleusercontent.com",
    "photos.fife.usercontent.com",
    "picsum.photos",
    "linkedin.com",
    "behance.net",
    "instagram.com",
    "wa.me",
];

// =============================================================================
// Overlay Presentation
// =============================================================================

/// Gallery items whose player is framed tall (9:16) instead of wide (16:9).
pub const PORTRAIT_ITEMS: &[&str] = &["sony-bravia"];

// =============================================================================
// Layout & Animation
// =============================================================================

/// Scroll offset (px) after which the navbar switches to its solid style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Media query matching the desktop layout (mobile menu hidden).
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Reveal stagger between consecutive gallery cards, in milliseconds.
pub const REVEAL_STAGGER_MS: u32 = 100;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
