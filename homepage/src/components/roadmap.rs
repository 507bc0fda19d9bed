//! Learning roadmap - numbered step cards chained by arrow connectors.

use crate::content::HomepageContent;
use crate::styles::class;
use crate::tree::{Element, Node};
use crate::types::RoadmapStep;

/// Text of the connector placed between consecutive steps.
pub const CONNECTOR: &str = "→";

fn step_card(step: &RoadmapStep) -> Element {
    Element::new("div")
        .class(class::PATH_STEP)
        .child(
            Element::new("div")
                .class(class::STEP_NUMBER)
                .text(step.index.to_string()),
        )
        .child(Element::new("h3").text(step.title.as_str()))
        .child(Element::new("p").text(step.description.as_str()))
}

fn connector() -> Element {
    Element::new("div")
        .class(class::PATH_ARROW)
        .attr("aria-hidden", "true")
        .text(CONNECTOR)
}

/// Interleave step cards with connectors: `n` steps yield `n - 1` arrows.
fn step_chain(steps: &[RoadmapStep]) -> Vec<Element> {
    let mut chain = Vec::with_capacity(steps.len().saturating_mul(2));
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            chain.push(connector());
        }
        chain.push(step_card(step));
    }
    chain
}

/// The roadmap section with its header and the step chain.
pub fn roadmap_section(content: &HomepageContent) -> Node {
    let copy = &content.copy;

    Element::new("section")
        .class(class::PATH_SECTION)
        .child(
            Element::new("div")
                .class(class::CONTAINER)
                .child(
                    Element::new("div")
                        .class(class::SECTION_HEADER)
                        .child(
                            Element::new("h2")
                                .class(class::SECTION_TITLE)
                                .text(copy.roadmap_title.as_str()),
                        )
                        .child(
                            Element::new("p")
                                .class(class::SECTION_SUBTITLE)
                                .text(copy.roadmap_subtitle.as_str()),
                        ),
                )
                .child(
                    Element::new("div")
                        .class(class::PATH_STEPS)
                        .children(step_chain(&content.steps)),
                ),
        )
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_ten_steps_and_nine_connectors() {
        let section = roadmap_section(&HomepageContent::builtin());
        assert_eq!(section.find_all_by_class(class::PATH_STEP).len(), 10);
        assert_eq!(section.find_all_by_class(class::PATH_ARROW).len(), 9);
    }

    #[test]
    fn card_n_displays_index_n() {
        let section = roadmap_section(&HomepageContent::builtin());
        let numbers: Vec<String> = section
            .find_all_by_class(class::STEP_NUMBER)
            .iter()
            .map(|el| el.text_content())
            .collect();
        let expected: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn connectors_only_sit_between_steps() {
        let section = roadmap_section(&HomepageContent::builtin());
        let chain = section
            .find_by_class(class::PATH_STEPS)
            .expect("path steps");
        let kinds: Vec<bool> = chain
            .child_elements()
            .map(|el| el.has_class(class::PATH_STEP))
            .collect();

        assert_eq!(kinds.len(), 19);
        assert_eq!(kinds.first(), Some(&true));
        assert_eq!(kinds.last(), Some(&true));
        // strict alternation: step, arrow, step, ...
        for (i, is_step) in kinds.iter().enumerate() {
            assert_eq!(*is_step, i % 2 == 0, "position {}", i);
        }
    }

    #[test]
    fn single_step_has_no_connector() {
        let chain = step_chain(&[RoadmapStep::new(1, "Only", "Step")]);
        assert_eq!(chain.len(), 1);
        assert!(step_chain(&[]).is_empty());
    }
}
