//! # homepage-leptos
//!
//! Static renderer for the PBO (object-oriented programming) learning-roadmap
//! homepage.
//!
//! The page is built in two steps:
//!
//! 1. [`build_homepage`] composes a plain [`tree::Node`] record tree from the
//!    site settings and the content. Nothing here knows about HTML strings.
//! 2. [`render_homepage`] serializes that tree and places it inside the
//!    [`components::HomepageDocument`] shell using Leptos server-side rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use homepage::{render_homepage, content::HomepageContent, types::SiteMeta};
//!
//! let site = SiteMeta::new("Learn OOP", "Master it");
//! let content = HomepageContent::builtin();
//!
//! let html = render_homepage(&site, &content);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Learn OOP"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - records and site settings
//! - [`content`] - the shipped content and its validation
//! - [`tree`] - the document tree
//! - [`components`] - tree builders and the Leptos document shell
//! - [`html`] - tree serializer
//! - [`styles`] - class hooks and CSS

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod html;
pub mod styles;
pub mod tree;
pub mod types;

pub use content::{ContentError, HomepageContent};
pub use types::SiteMeta;

use components::HomepageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tree::Node;

/// Compose the homepage body as a document tree.
pub fn build_homepage(site: &SiteMeta, content: &HomepageContent) -> Node {
    components::homepage(site, content)
}

/// Render the complete homepage as an HTML document string.
///
/// The result starts with `<!DOCTYPE html>`. The `<title>` is the site title
/// followed by the content's title suffix.
pub fn render_homepage(site: &SiteMeta, content: &HomepageContent) -> String {
    let body_html = html::to_html(&build_homepage(site, content));
    let title = document_title(site, content);
    let description = content.copy.meta_description.clone();

    let doc = view! {
        <HomepageDocument title=title description=description body_html=body_html />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// `"{title} - {suffix}"`, or just the title when the suffix is empty.
pub fn document_title(site: &SiteMeta, content: &HomepageContent) -> String {
    let suffix = content.copy.document_title_suffix.trim();
    if suffix.is_empty() {
        site.title.clone()
    } else {
        format!("{} - {}", site.title, suffix)
    }
}
