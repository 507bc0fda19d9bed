//! Hero header - site title, tagline, welcome text and the two entry buttons.

use super::nav::{nav_button, ButtonStyle};
use crate::content::PageCopy;
use crate::styles::class;
use crate::tree::{Element, Node};
use crate::types::{NavTarget, SiteMeta};

/// Decorative bubbles behind the hero content.
const FLOATING_ELEMENTS: usize = 3;

/// The hero banner. Title and tagline come from `site`, never from content.
pub fn homepage_header(site: &SiteMeta, copy: &PageCopy) -> Node {
    let content = Element::new("div")
        .class(class::HERO_CONTENT)
        .child(
            Element::new("h1")
                .class(class::HERO_TITLE)
                .text(site.title.as_str()),
        )
        .child(
            Element::new("p")
                .class(class::HERO_SUBTITLE)
                .text(site.tagline.as_str()),
        )
        .child(
            Element::new("p")
                .class(class::HERO_DESCRIPTION)
                .text(copy.hero_description.as_str()),
        )
        .child(
            Element::new("div")
                .class(class::HERO_BUTTONS)
                .child(nav_button(
                    site,
                    NavTarget::StartLearning,
                    ButtonStyle::Secondary,
                    &copy.hero_start_label,
                ))
                .child(nav_button(
                    site,
                    NavTarget::Blog,
                    ButtonStyle::Outline,
                    &copy.hero_blog_label,
                )),
        );

    let background = Element::new("div")
        .class(class::HERO_BACKGROUND)
        .attr("aria-hidden", "true")
        .children((0..FLOATING_ELEMENTS).map(|_| Element::new("div").class(class::FLOATING_ELEMENT)));

    Element::new("header")
        .classes([class::HERO, class::HERO_PRIMARY, class::HERO_BANNER])
        .child(Element::new("div").class(class::CONTAINER).child(content))
        .child(background)
        .into_node()
}
