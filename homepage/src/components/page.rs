//! Landing page composer.

use super::{cta_section, feature_section, homepage_header, roadmap_section};
use crate::content::HomepageContent;
use crate::styles::class;
use crate::tree::{Element, Node};
use crate::types::SiteMeta;

/// Compose the whole homepage body.
///
/// ```text
/// div.homepage
/// ├── header.hero-banner        (title, tagline, buttons)
/// └── main
///     ├── section.features      (3 cards)
///     ├── section.path-section  (10 steps, 9 arrows)
///     └── section.cta-section   (buttons again)
/// ```
pub fn homepage(site: &SiteMeta, content: &HomepageContent) -> Node {
    Element::new("div")
        .class(class::HOMEPAGE)
        .child(homepage_header(site, &content.copy))
        .child(
            Element::new("main")
                .child(feature_section(site, content))
                .child(roadmap_section(content))
                .child(cta_section(site, &content.copy)),
        )
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_appear_in_order() {
        let page = homepage(&SiteMeta::new("t", "g"), &HomepageContent::builtin());
        let root = page.as_element().expect("root element");
        let tags: Vec<&str> = root.child_elements().map(|el| el.tag.as_str()).collect();
        assert_eq!(tags, vec!["header", "main"]);

        let main = root.find_all_by_tag("main")[0];
        let sections: Vec<&str> = main
            .child_elements()
            .map(|el| el.classes[0].as_str())
            .collect();
        assert_eq!(
            sections,
            vec![class::FEATURES, class::PATH_SECTION, class::CTA_SECTION]
        );
    }

    #[test]
    fn hero_and_cta_share_destinations() {
        let page = homepage(&SiteMeta::new("t", "g"), &HomepageContent::builtin());
        let hrefs = |hook: &str| -> Vec<String> {
            page.find_by_class(hook)
                .expect("button group")
                .find_all_by_tag("a")
                .iter()
                .filter_map(|a| a.attr_value("href").map(str::to_string))
                .collect()
        };
        let hero = hrefs(class::HERO_BUTTONS);
        let cta = hrefs(class::CTA_BUTTONS);
        assert_eq!(hero, vec!["/docs/pertemuan-1", "/blog"]);
        assert_eq!(hero, cta);
    }

    #[test]
    fn prefixed_base_url_applies_to_links_and_icons() {
        let site = SiteMeta::new("t", "g").with_base_url("/pbo/");
        let page = homepage(&site, &HomepageContent::builtin());

        let links = page.find_all_by_tag("a");
        let images = page.find_all_by_tag("img");
        let hrefs: Vec<&str> = links.iter().filter_map(|a| a.attr_value("href")).collect();
        let srcs: Vec<&str> = images
            .iter()
            .filter_map(|img| img.attr_value("src"))
            .collect();

        assert_eq!(hrefs.len(), 4);
        assert_eq!(srcs.len(), 3);
        for url in hrefs.iter().chain(&srcs) {
            assert!(url.starts_with("/pbo/"), "{} ignores base_url", url);
        }
        assert_eq!(hrefs[0], "/pbo/docs/pertemuan-1");
        assert_eq!(hrefs[1], "/pbo/blog");
    }

    #[test]
    fn building_twice_gives_identical_trees() {
        let site = SiteMeta::new("Learn OOP", "Master it");
        let content = HomepageContent::builtin();
        assert_eq!(homepage(&site, &content), homepage(&site, &content));
    }
}
