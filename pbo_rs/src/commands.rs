//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use homepage::{HomepageContent, SiteMeta, build_homepage, render_homepage};
use tracing::{debug, info};

use crate::cli::{BuildArgs, CheckArgs, Cli, Command, SourceArgs, TreeArgs};
use crate::config::SiteConfig;

/// Name of the rendered homepage inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => build(&args).map(|_| ()),
        Command::Tree(args) => tree(&args),
        Command::Check(args) => check(&args),
    }
}

/// Load homepage content from a JSON file, or the built-in content.
pub fn load_content(path: Option<&Path>) -> Result<HomepageContent> {
    let Some(path) = path else {
        debug!("Using built-in homepage content");
        return Ok(HomepageContent::builtin());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file {}", path.display()))?;
    let content = HomepageContent::from_json(&json)
        .with_context(|| format!("Invalid content file {}", path.display()))?;
    info!("Loaded homepage content from {}", path.display());
    Ok(content)
}

/// Site settings and content for one run.
fn load_sources(source: &SourceArgs) -> Result<(SiteMeta, HomepageContent)> {
    let config = SiteConfig::resolve(source.config.as_deref(), &source.root)?;
    let content = load_content(source.content.as_deref())?;
    Ok((config.site_meta(), content))
}

/// Render the homepage into `out_dir/index.html` and return the file path.
pub fn write_site(site: &SiteMeta, content: &HomepageContent, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let html = render_homepage(site, content);
    let path = out_dir.join(INDEX_FILE);
    std::fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(path)
}

/// Document tree as JSON.
pub fn tree_json(site: &SiteMeta, content: &HomepageContent, compact: bool) -> Result<String> {
    let tree = build_homepage(site, content);
    let json = if compact {
        serde_json::to_string(&tree)
    } else {
        serde_json::to_string_pretty(&tree)
    };
    json.context("Failed to serialize document tree")
}

fn build(args: &BuildArgs) -> Result<PathBuf> {
    let (site, content) = load_sources(&args.source)?;
    info!("Building homepage for \"{}\"", site.title);
    let path = write_site(&site, &content, &args.out)?;
    println!("Homepage written to: {}", path.display());
    Ok(path)
}

fn tree(args: &TreeArgs) -> Result<()> {
    let (site, content) = load_sources(&args.source)?;
    println!("{}", tree_json(&site, &content, args.compact)?);
    Ok(())
}

fn check(args: &CheckArgs) -> Result<()> {
    let content = load_content(args.content.as_deref())?;
    // builtin content skips from_json, so validate here as well
    content.validate()?;
    println!(
        "Content OK: {} feature cards, {} roadmap steps",
        content.features.len(),
        content.steps.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_site_creates_nested_output_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public").join("site");
        let site = SiteMeta::new("Learn OOP", "Master it");

        let path = write_site(&site, &HomepageContent::builtin(), &out).expect("write site");

        assert_eq!(path, out.join(INDEX_FILE));
        let html = std::fs::read_to_string(&path).expect("read index");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Learn OOP"));
    }

    #[test]
    fn load_content_without_path_is_builtin() {
        let content = load_content(None).expect("builtin");
        assert_eq!(content, HomepageContent::builtin());
    }

    #[test]
    fn load_content_rejects_invalid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.json");
        let mut content = HomepageContent::builtin();
        content.steps.reverse();
        std::fs::write(&path, serde_json::to_string(&content).expect("json")).expect("write");

        let err = load_content(Some(&path)).expect_err("reversed steps");
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid content file"));
        assert!(chain.contains("roadmap step at position 1 has index 10"));
    }

    #[test]
    fn tree_json_compact_is_single_line() {
        let site = SiteMeta::new("t", "g");
        let json = tree_json(&site, &HomepageContent::builtin(), true).expect("json");
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["tag"], "div");
    }
}
