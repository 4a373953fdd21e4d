//! Page sections, top to bottom.
//!
//! - [`Hero`] - Banner with resume call-to-action
//! - [`Gallery`] - Selected work grid (video overlay entry point)
//! - [`About`] - Bio and highlight stats
//! - [`CaseStudies`] - Project breakdowns
//! - [`Journal`] - Blog post teasers
//! - [`Services`] - Service cards and contact CTA
//! - [`Footer`] - Contact links

mod about;
mod case_studies;
mod footer;
mod gallery;
mod hero;
mod journal;
mod services;

pub use about::About;
pub use case_studies::CaseStudies;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use journal::Journal;
pub use services::Services;
