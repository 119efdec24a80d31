//! Shared UI crate for the Morino Lab site. Cross-platform logic and views live here.

pub mod content;
pub mod core;
pub mod i18n;
pub mod reveal;
pub mod views;

pub mod components {
    // Localized site chrome (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;
}

mod hero;
pub use hero::Hero;
