//! Closing call-to-action block.

use super::nav::{nav_button, ButtonStyle};
use crate::content::PageCopy;
use crate::styles::class;
use crate::tree::{Element, Node};
use crate::types::{NavTarget, SiteMeta};

/// Heading plus the same two destinations as the hero.
pub fn cta_section(site: &SiteMeta, copy: &PageCopy) -> Node {
    Element::new("section")
        .class(class::CTA_SECTION)
        .child(
            Element::new("div").class(class::CONTAINER).child(
                Element::new("div")
                    .class(class::CTA_CONTENT)
                    .child(Element::new("h2").text(copy.cta_title.as_str()))
                    .child(
                        Element::new("div")
                            .class(class::CTA_BUTTONS)
                            .child(nav_button(
                                site,
                                NavTarget::StartLearning,
                                ButtonStyle::Primary,
                                &copy.cta_start_label,
                            ))
                            .child(nav_button(
                                site,
                                NavTarget::Blog,
                                ButtonStyle::Outline,
                                &copy.cta_blog_label,
                            )),
                    ),
            ),
        )
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_point_at_docs_and_blog() {
        let site = SiteMeta::new("t", "g");
        let section = cta_section(&site, &PageCopy::default());
        let links = section.find_all_by_tag("a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].attr_value("href"), Some("/docs/pertemuan-1"));
        assert_eq!(links[1].attr_value("href"), Some("/blog"));
        assert!(links[0].has_class(class::BUTTON_PRIMARY));
        assert_eq!(links[0].text_content(), "Mulai Sekarang");
    }
}
