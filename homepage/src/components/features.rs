//! Feature cards section.

use crate::content::HomepageContent;
use crate::styles::class;
use crate::tree::{Element, Node};
use crate::types::{FeatureRecord, SiteMeta};

/// One feature column: icon on top, heading and text below.
///
/// The icon path is resolved against the site base URL like every link.
fn feature_card(site: &SiteMeta, feature: &FeatureRecord) -> Element {
    Element::new("div")
        .classes([class::COL, class::COL_4, class::FEATURE_CARD])
        .child(
            Element::new("div").class(class::TEXT_CENTER).child(
                Element::new("img")
                    .class(class::FEATURE_SVG)
                    .attr("src", site.resolve(feature.icon.as_str()))
                    .attr("role", "img")
                    .attr("alt", feature.title.as_str()),
            ),
        )
        .child(
            Element::new("div")
                .classes([class::TEXT_CENTER, class::PADDING_HORIZ_MD])
                .child(Element::new("h3").text(feature.title.as_str()))
                .child(Element::new("p").text(feature.description.as_str())),
        )
}

/// The feature section: header plus one card per record, in record order.
pub fn feature_section(site: &SiteMeta, content: &HomepageContent) -> Node {
    let copy = &content.copy;

    Element::new("section")
        .class(class::FEATURES)
        .child(
            Element::new("div")
                .class(class::CONTAINER)
                .child(
                    Element::new("div")
                        .class(class::FEATURES_HEADER)
                        .child(
                            Element::new("h2")
                                .class(class::FEATURES_TITLE)
                                .text(copy.features_title.as_str()),
                        )
                        .child(
                            Element::new("p")
                                .class(class::FEATURES_SUBTITLE)
                                .text(copy.features_subtitle.as_str()),
                        ),
                )
                .child(
                    Element::new("div")
                        .class(class::ROW)
                        .children(content.features.iter().map(|f| feature_card(site, f))),
                ),
        )
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_three_cards_in_order() {
        let content = HomepageContent::builtin();
        let section = feature_section(&SiteMeta::new("t", "g"), &content);
        let cards = section.find_all_by_class(class::FEATURE_CARD);

        assert_eq!(cards.len(), 3);
        let titles: Vec<String> = cards
            .iter()
            .map(|card| card.find_all_by_tag("h3")[0].text_content())
            .collect();
        assert_eq!(
            titles,
            vec!["Konsep Dasar OOP", "Implementasi Praktis", "Proyek Real-World"]
        );
    }

    #[test]
    fn every_card_has_title_description_and_icon() {
        let content = HomepageContent::builtin();
        let section = feature_section(&SiteMeta::new("t", "g"), &content);

        for (card, feature) in section
            .find_all_by_class(class::FEATURE_CARD)
            .into_iter()
            .zip(&content.features)
        {
            let heading = card.find_all_by_tag("h3")[0].text_content();
            let body = card.find_all_by_tag("p")[0].text_content();
            assert!(!heading.is_empty());
            assert!(!body.is_empty());
            assert_eq!(body, feature.description);

            let icon = card.find_all_by_class(class::FEATURE_SVG)[0];
            assert_eq!(icon.tag, "img");
            assert_eq!(icon.attr_value("role"), Some("img"));
            assert_eq!(
                icon.attr_value("src"),
                Some(format!("/{}", feature.icon.as_str()).as_str())
            );
        }
    }

    #[test]
    fn icons_follow_prefixed_base_url() {
        let site = SiteMeta::new("t", "g").with_base_url("/pbo/");
        let section = feature_section(&site, &HomepageContent::builtin());

        let icons = section.find_all_by_class(class::FEATURE_SVG);
        let srcs: Vec<&str> = icons
            .iter()
            .filter_map(|img| img.attr_value("src"))
            .collect();
        assert_eq!(
            srcs,
            vec![
                "/pbo/img/undraw_docusaurus_mountain.svg",
                "/pbo/img/undraw_docusaurus_tree.svg",
                "/pbo/img/undraw_docusaurus_react.svg",
            ]
        );
    }

    #[test]
    fn renders_section_header() {
        let content = HomepageContent::builtin();
        let section = feature_section(&SiteMeta::new("t", "g"), &content);
        let title = section
            .find_by_class(class::FEATURES_TITLE)
            .expect("features title");
        assert_eq!(title.tag, "h2");
        assert_eq!(title.text_content(), "Fitur Pembelajaran Unggulan");
    }
}
