//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pbo-site")]
#[command(about = "Static generator for the PBO learning-roadmap homepage")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(
        long,
        default_value = "info",
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the homepage to <out>/index.html
    Build(BuildArgs),
    /// Print the homepage document tree as JSON
    Tree(TreeArgs),
    /// Validate homepage content and print a summary
    Check(CheckArgs),
}

/// Where site settings and content come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Project root (searched for site.toml)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Site config file (default: <root>/site.toml, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file replacing the built-in homepage content
    #[arg(long)]
    pub content: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON file to validate instead of the built-in content
    #[arg(long)]
    pub content: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_with_defaults() {
        let cli = Cli::try_parse_from(["pbo-site", "build"]).expect("parse");
        assert_eq!(cli.log_level, "info");
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.out, PathBuf::from("dist"));
                assert_eq!(args.source.root, PathBuf::from("."));
                assert!(args.source.config.is_none());
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn parses_global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["pbo-site", "tree", "--compact", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Tree(TreeArgs { compact: true, .. })));
    }

    #[test]
    fn rejects_misspelled_log_level() {
        let err = Cli::try_parse_from(["pbo-site", "build", "--log-level", "bogus"])
            .expect_err("bogus level");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["pbo-site", "deploy"]).is_err());
    }
}
