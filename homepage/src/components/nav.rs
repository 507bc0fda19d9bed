//! Navigation buttons shared by the hero and the call-to-action block.

use crate::styles::class;
use crate::tree::Element;
use crate::types::{NavTarget, SiteMeta};

/// Visual weight of a navigation button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled with the primary color
    Primary,
    /// White, for use on the colored hero
    Secondary,
    /// Transparent with a border
    Outline,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => class::BUTTON_PRIMARY,
            ButtonStyle::Secondary => class::BUTTON_SECONDARY,
            ButtonStyle::Outline => class::BUTTON_OUTLINE,
        }
    }
}

/// A large link-button pointing at `target`, resolved against the base URL.
pub fn nav_button(site: &SiteMeta, target: NavTarget, style: ButtonStyle, label: &str) -> Element {
    Element::new("a")
        .classes([class::BUTTON, style.class(), class::BUTTON_LG])
        .attr("href", site.resolve(target.path()))
        .text(label)
}
