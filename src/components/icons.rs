//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::ServiceIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUpRight as ArrowUpRight, LuChevronRight as ChevronRight, LuCompass as Compass,
        LuCpu as Cpu, LuDownload as Download, LuFileText as FileText, LuFilm as Film,
        LuMail as Mail, LuMapPin as Location, LuMenu as Menu, LuMessageCircle as Message,
        LuMonitor as Monitor, LuPlay as Play, LuX as Close, LuZap as Zap,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUpRight as ArrowUpRight, BsChevronRight as ChevronRight, BsCompass as Compass,
        BsCpu as Cpu, BsDisplay as Monitor, BsDownload as Download,
        BsEnvelope as Mail, BsFileEarmarkText as FileText, BsFilm as Film,
        BsGeoAltFill as Location, BsLightningCharge as Zap, BsList as Menu,
        BsPlayFill as Play, BsWhatsapp as Message, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(MAIL, Mail);
themed_icon!(MESSAGE, Message);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ARROW_UP_RIGHT, ArrowUpRight);
themed_icon!(LOCATION, Location);
themed_icon!(DOWNLOAD, Download);
themed_icon!(PLAY, Play);
themed_icon!(FILM, Film);
themed_icon!(CPU, Cpu);
themed_icon!(ZAP, Zap);
themed_icon!(MONITOR, Monitor);
themed_icon!(COMPASS, Compass);

/// Icon for a service card. Unknown icons fall back to film.
pub fn service_icon(icon: ServiceIcon) -> Icon {
    match icon {
        ServiceIcon::Film | ServiceIcon::Other => FILM,
        ServiceIcon::Cpu => CPU,
        ServiceIcon::Zap => ZAP,
        ServiceIcon::Monitor => MONITOR,
        ServiceIcon::Compass => COMPASS,
    }
}
