//! Root document component - the complete HTML page around the homepage body.

use crate::styles::HOMEPAGE_CSS;
use leptos::prelude::*;

/// The complete HTML document.
///
/// `body_html` is already-serialized markup and is inserted verbatim.
#[component]
pub fn HomepageDocument(
    /// Text of the `<title>` element
    title: String,
    /// Content of `<meta name="description">`
    description: String,
    /// Serialized page body
    body_html: String,
) -> impl IntoView {
    view! {
        <html lang="id">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{HOMEPAGE_CSS}</style>
            </head>
            <body inner_html=body_html></body>
        </html>
    }
}
