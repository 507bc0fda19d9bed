//! Page builders.
//!
//! Every builder is a plain function returning a [`crate::tree::Node`].
//! Only [`HomepageDocument`] is a Leptos component; it wraps the serialized
//! tree into the final page.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomepageDocument            (Leptos SSR shell: head, title, styles)
//! └── homepage                (page composer)
//!     ├── homepage_header     (hero: title, tagline, nav buttons)
//!     ├── feature_section     (3 feature cards)
//!     ├── roadmap_section     (10 step cards + 9 connectors)
//!     └── cta_section         (nav buttons again)
//! ```

mod cta;
mod document;
mod features;
mod hero;
mod nav;
mod page;
mod roadmap;

pub use cta::cta_section;
pub use document::HomepageDocument;
pub use features::feature_section;
pub use hero::homepage_header;
pub use nav::{nav_button, ButtonStyle};
pub use page::homepage;
pub use roadmap::{roadmap_section, CONNECTOR};
