//! Command-line interface for the site generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{parse_timestamp, BuildConfig, SourceKind};
use crate::error::{Result, SiteError};
use crate::inspect::{check_for_config, list_links};
use crate::site::build_site;

/// Gesetze aus dem Internet - Render the static download page for the law dataset.
#[derive(Parser)]
#[command(name = "gadi-site")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render index.html for the dataset.
    Build {
        /// Dataset directory containing all_laws.json and laws/
        #[arg(short, long)]
        data_dir: PathBuf,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Shape of the dataset index to read
        #[arg(short, long, value_enum, default_value_t = SourceKind::Index)]
        source: SourceKind,

        /// Fixed RFC 3339 timestamp instead of the dataset file's creation time
        #[arg(long)]
        last_modified: Option<String>,
    },

    /// Print every law link in page order.
    List {
        /// Dataset directory containing all_laws.json and laws/
        #[arg(short, long)]
        data_dir: PathBuf,

        /// Shape of the dataset index to read
        #[arg(short, long, value_enum, default_value_t = SourceKind::Index)]
        source: SourceKind,
    },

    /// Verify that every linked file exists in the dataset.
    Check {
        /// Dataset directory containing all_laws.json and laws/
        #[arg(short, long)]
        data_dir: PathBuf,

        /// Shape of the dataset index to read
        #[arg(short, long, value_enum, default_value_t = SourceKind::Index)]
        source: SourceKind,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            data_dir,
            output,
            source,
            last_modified,
        } => {
            let mut config = BuildConfig::new(data_dir).with_source(source);
            if let Some(output) = output {
                config = config.with_output_dir(output);
            }
            if let Some(ts) = last_modified {
                config = config.with_last_modified(parse_timestamp(&ts)?);
            }
            build_command(&config)
        }
        Commands::List { data_dir, source } => {
            list_command(&BuildConfig::new(data_dir).with_source(source))
        }
        Commands::Check { data_dir, source } => {
            check_command(&BuildConfig::new(data_dir).with_source(source))
        }
    }
}

/// Execute the build command.
fn build_command(config: &BuildConfig) -> Result<()> {
    println!(
        "{} {}",
        style("Building").bold(),
        style(config.data_dir.display()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Rendering listing page...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match build_site(config) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Laws: {}", report.law_count);
    println!(
        "  Last modified: {}",
        style(report.last_modified.as_str()).green()
    );
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        report.output_path.display()
    );

    Ok(())
}

/// Execute the list command.
fn list_command(config: &BuildConfig) -> Result<()> {
    for link in list_links(config)? {
        println!("{}\t{}", link.target, link.text);
    }
    Ok(())
}

/// Execute the check command.
fn check_command(config: &BuildConfig) -> Result<()> {
    let report = check_for_config(config)?;

    for path in &report.missing {
        println!("{} {}", style("missing").red().bold(), path);
    }
    for position in &report.empty_identifiers {
        println!(
            "{} entry #{} has no identifier",
            style("invalid").yellow().bold(),
            position + 1
        );
    }

    if !report.is_ok() {
        return Err(SiteError::BrokenLinks {
            count: report.problem_count(),
        });
    }

    println!(
        "{} {} files checked",
        style("OK").green().bold(),
        report.checked
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::parse_from(["gadi-site", "build", "--data-dir", "static/gadi"]);

        let Commands::Build {
            data_dir,
            output,
            source,
            last_modified,
        } = cli.command
        else {
            panic!("expected build command");
        };
        assert_eq!(data_dir, PathBuf::from("static/gadi"));
        assert!(output.is_none());
        assert_eq!(source, SourceKind::Index);
        assert!(last_modified.is_none());
    }

    #[test]
    fn test_cli_parse_build_with_options() {
        let cli = Cli::parse_from([
            "gadi-site",
            "build",
            "-d",
            "data",
            "--output",
            "public",
            "--source",
            "scan",
            "--last-modified",
            "2024-01-01T00:00:00+01:00",
        ]);

        let Commands::Build {
            output,
            source,
            last_modified,
            ..
        } = cli.command
        else {
            panic!("expected build command");
        };
        assert_eq!(output, Some(PathBuf::from("public")));
        assert_eq!(source, SourceKind::Scan);
        assert_eq!(last_modified.as_deref(), Some("2024-01-01T00:00:00+01:00"));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["gadi-site", "check", "-d", "data", "-s", "scan"]);

        let Commands::Check { data_dir, source } = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(data_dir, PathBuf::from("data"));
        assert_eq!(source, SourceKind::Scan);
    }

    #[test]
    fn test_cli_rejects_unknown_source() {
        let result = Cli::try_parse_from(["gadi-site", "list", "-d", "data", "-s", "graphql"]);
        assert!(result.is_err());
    }
}
