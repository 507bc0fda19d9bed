//! Stylesheet and style-class hooks for the homepage.
//!
//! Builders only assign the class names in [`class`]; all visual decisions
//! live in [`HOMEPAGE_CSS`]. To extend it:
//!
//! ```rust
//! use homepage::styles::HOMEPAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", HOMEPAGE_CSS, my_css);
//! assert!(combined.contains(".path-step"));
//! ```

/// Stable class names assigned by the builders.
///
/// Each constant is the literal class name it is named after.
#[allow(missing_docs)]
pub mod class {
    // Layout grid
    pub const CONTAINER: &str = "container";
    pub const ROW: &str = "row";
    pub const COL: &str = "col";
    pub const COL_4: &str = "col--4";
    pub const TEXT_CENTER: &str = "text--center";
    pub const PADDING_HORIZ_MD: &str = "padding-horiz--md";

    // Buttons
    pub const BUTTON: &str = "button";
    pub const BUTTON_PRIMARY: &str = "button--primary";
    pub const BUTTON_SECONDARY: &str = "button--secondary";
    pub const BUTTON_OUTLINE: &str = "button--outline";
    pub const BUTTON_LG: &str = "button--lg";

    pub const HOMEPAGE: &str = "homepage";

    // Hero
    pub const HERO: &str = "hero";
    pub const HERO_PRIMARY: &str = "hero--primary";
    pub const HERO_BANNER: &str = "hero-banner";
    pub const HERO_CONTENT: &str = "hero-content";
    pub const HERO_TITLE: &str = "hero-title";
    pub const HERO_SUBTITLE: &str = "hero-subtitle";
    pub const HERO_DESCRIPTION: &str = "hero-description";
    pub const HERO_BUTTONS: &str = "hero-buttons";
    pub const HERO_BACKGROUND: &str = "hero-background";
    pub const FLOATING_ELEMENT: &str = "floating-element";

    // Features
    pub const FEATURES: &str = "features";
    pub const FEATURES_HEADER: &str = "features-header";
    pub const FEATURES_TITLE: &str = "features-title";
    pub const FEATURES_SUBTITLE: &str = "features-subtitle";
    pub const FEATURE_CARD: &str = "feature-card";
    pub const FEATURE_SVG: &str = "feature-svg";

    // Roadmap
    pub const PATH_SECTION: &str = "path-section";
    pub const SECTION_HEADER: &str = "section-header";
    pub const SECTION_TITLE: &str = "section-title";
    pub const SECTION_SUBTITLE: &str = "section-subtitle";
    pub const PATH_STEPS: &str = "path-steps";
    pub const PATH_STEP: &str = "path-step";
    pub const STEP_NUMBER: &str = "step-number";
    pub const PATH_ARROW: &str = "path-arrow";

    // Call to action
    pub const CTA_SECTION: &str = "cta-section";
    pub const CTA_CONTENT: &str = "cta-content";
    pub const CTA_BUTTONS: &str = "cta-buttons";
}

/// Complete CSS for the homepage.
///
/// Contains no `<` or `>` so it can be embedded as escaped style text.
pub const HOMEPAGE_CSS: &str = r#"
:root {
    --pbo-primary: #2e5aac;
    --pbo-primary-dark: #1f3f7a;
    --pbo-accent: #f5a623;
    --pbo-bg: #ffffff;
    --pbo-bg-alt: #f4f6fb;
    --pbo-text: #1c1e21;
    --pbo-text-dim: #5a5f6b;
    --pbo-radius: 12px;
    --pbo-shadow: 0 6px 20px rgba(31, 63, 122, 0.12);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: var(--pbo-text);
    background: var(--pbo-bg);
    line-height: 1.6;
}

.container {
    max-width: 1140px;
    margin: 0 auto;
    padding: 0 1rem;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 -1rem;
}

.col { padding: 0 1rem; flex: 1 0 0; }
.col--4 { flex: 0 0 33.333%; max-width: 33.333%; }
.text--center { text-align: center; }
.padding-horiz--md { padding-left: 1rem; padding-right: 1rem; }

/* Buttons */
.button {
    display: inline-block;
    border: 2px solid transparent;
    border-radius: 8px;
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}
.button:hover { transform: translateY(-2px); box-shadow: var(--pbo-shadow); }
.button--lg { padding: 0.75rem 1.75rem; font-size: 1.1rem; }
.button--primary { background: var(--pbo-primary); color: #fff; }
.button--secondary { background: #fff; color: var(--pbo-primary-dark); }
.button--outline { background: transparent; border-color: currentColor; color: inherit; }

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
    padding: 5rem 0;
}
.hero--primary {
    background: linear-gradient(135deg, var(--pbo-primary) 0%, var(--pbo-primary-dark) 100%);
    color: #fff;
}
.hero-banner { text-align: center; }
.hero-content { position: relative; z-index: 1; }
.hero-title { font-size: 3rem; margin: 0 0 0.5rem; }
.hero-subtitle { font-size: 1.5rem; margin: 0 0 1rem; opacity: 0.9; }
.hero-description { max-width: 640px; margin: 0 auto 2rem; opacity: 0.85; }
.hero-buttons { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
.hero-background { position: absolute; inset: 0; pointer-events: none; }
.floating-element {
    position: absolute;
    width: 120px;
    height: 120px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.08);
    animation: pbo-float 6s ease-in-out infinite;
}
.floating-element:nth-child(1) { top: 10%; left: 8%; }
.floating-element:nth-child(2) { top: 55%; right: 10%; animation-delay: 2s; }
.floating-element:nth-child(3) { bottom: 8%; left: 40%; animation-delay: 4s; }

@keyframes pbo-float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-20px); }
}

/* Features */
.features { padding: 4rem 0; background: var(--pbo-bg); }
.features-header { text-align: center; margin-bottom: 2.5rem; }
.features-title { font-size: 2rem; margin: 0 0 0.5rem; }
.features-subtitle { color: var(--pbo-text-dim); max-width: 640px; margin: 0 auto; }
.feature-svg { height: 200px; width: 200px; }

/* Roadmap */
.path-section { padding: 4rem 0; background: var(--pbo-bg-alt); }
.section-header { text-align: center; margin-bottom: 2.5rem; }
.section-title { font-size: 2rem; margin: 0 0 0.5rem; }
.section-subtitle { color: var(--pbo-text-dim); margin: 0; }
.path-steps {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.path-step {
    flex: 0 1 240px;
    background: #fff;
    border-radius: var(--pbo-radius);
    box-shadow: var(--pbo-shadow);
    padding: 1.5rem;
    text-align: center;
}
.path-step h3 { font-size: 1.05rem; margin: 0.75rem 0 0.5rem; }
.path-step p { font-size: 0.9rem; color: var(--pbo-text-dim); margin: 0; }
.step-number {
    width: 44px;
    height: 44px;
    margin: 0 auto;
    border-radius: 50%;
    background: var(--pbo-accent);
    color: #fff;
    font-weight: 800;
    display: flex;
    align-items: center;
    justify-content: center;
}
.path-arrow { font-size: 1.75rem; color: var(--pbo-primary); }

/* Call to action */
.cta-section { padding: 4rem 0; }
.cta-content { text-align: center; }
.cta-content h2 { font-size: 1.75rem; margin: 0 0 1.5rem; }
.cta-buttons { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
.cta-buttons .button--outline { color: var(--pbo-primary); }

@media (max-width: 996px) {
    .col--4 { flex: 0 0 100%; max-width: 100%; }
    .hero-title { font-size: 2.25rem; }
    .path-arrow { transform: rotate(90deg); flex-basis: 100%; text-align: center; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_targets_every_section_hook() {
        for hook in [
            class::HERO_BANNER,
            class::FLOATING_ELEMENT,
            class::FEATURE_SVG,
            class::PATH_STEP,
            class::STEP_NUMBER,
            class::PATH_ARROW,
            class::CTA_BUTTONS,
        ] {
            assert!(
                HOMEPAGE_CSS.contains(&format!(".{}", hook)),
                "missing rule for .{}",
                hook
            );
        }
    }

    #[test]
    fn css_has_no_angle_brackets() {
        assert!(!HOMEPAGE_CSS.contains('<'));
        assert!(!HOMEPAGE_CSS.contains('>'));
    }
}
