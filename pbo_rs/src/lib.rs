//! # pbo-site
//!
//! Command-line host for the PBO learning-roadmap homepage.
//!
//! It reads the site settings from `site.toml`, optionally replaces the
//! built-in content with a JSON file, and renders the page with
//! [`homepage`].
//!
//! ```bash
//! pbo-site build --config site.toml --out dist
//! pbo-site tree --compact | jq '.children[0].tag'
//! pbo-site check --content content.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::Cli;
pub use commands::run;
pub use config::{ConfigError, SiteConfig};
