//! Page sections reachable from the navbar.

/// Anchored sections of the single scroll page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Hero banner: `#home`
    Home,
    /// Project gallery: `#work`
    Work,
    /// About section: `#about`
    About,
    /// Services grid: `#services`
    Services,
}

impl Section {
    /// Sections listed as navbar menu items, in display order.
    pub const MENU: [Section; 3] = [Section::Work, Section::About, Section::Services];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::About => "about",
            Section::Services => "services",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Work => "Work",
            Section::About => "About",
            Section::Services => "Services",
        }
    }

    /// Parse a URL hash (`#work`, `work`) into a section.
    pub fn from_hash(hash: &str) -> Option<Self> {
        match hash.trim_start_matches('#') {
            "home" => Some(Section::Home),
            "work" => Some(Section::Work),
            "about" => Some(Section::About),
            "services" => Some(Section::Services),
            _ => None,
        }
    }
}
