//! CLI argument parsing and execution

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use gradle_mvn_repo::orchestrator::{self, RunConfig};
use gradle_mvn_repo::output::{OutputConfig, COLOR_CHOICES};

/// Generate local maven repository from a gradle cache.
#[derive(Parser, Debug)]
#[command(name = "gradle-mvn-repo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to Gradle cache directory
    #[arg(long = "gradle_cache_dir", value_name = "CACHE_DIR")]
    gradle_cache_dir: PathBuf,

    /// Path to the local maven repository
    #[arg(long = "target_mvn_dir", value_name = "MAVEN_REPOSITORY_DIR")]
    target_mvn_dir: PathBuf,

    /// Remove target_mvn_dir before generating the maven repository.
    #[arg(long = "pre_clean_mvn_dir")]
    pre_clean_mvn_dir: bool,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = COLOR_CHOICES
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the conversion
    pub fn execute(self) -> Result<()> {
        let output = OutputConfig::from_flag(&self.color);
        init_logging(&self.log_level, &output);

        let config = RunConfig {
            gradle_cache_dir: self.gradle_cache_dir,
            target_mvn_dir: self.target_mvn_dir,
            pre_clean_mvn_dir: self.pre_clean_mvn_dir,
        };
        let summary = orchestrator::execute(&config).with_context(|| {
            format!(
                "Failed to generate maven repository from {}",
                config.gradle_cache_dir.display()
            )
        })?;

        println!(
            "{} {} files copied to {} ({} groups, {} artifacts, {} versions)",
            output.marker("📦", "[DONE]"),
            summary.write.files_copied,
            config.target_mvn_dir.display(),
            summary.write.groups,
            summary.write.artifacts,
            summary.write.versions,
        );
        if summary.write.files_overwritten > 0 {
            println!(
                "{} {} files shared a name within their version and were overwritten",
                output.marker("⚠️ ", "[WARN]"),
                summary.write.files_overwritten
            );
        }

        Ok(())
    }
}

/// Install the global logger writing to stderr
fn init_logging(level: &str, output: &OutputConfig) {
    let level = level.parse().unwrap_or(LevelFilter::Info);
    let write_style = if output.log_color {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    };

    env_logger::Builder::new()
        .filter_level(level)
        .write_style(write_style)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_required_flags() {
        let cli = Cli::try_parse_from([
            "gradle-mvn-repo",
            "--gradle_cache_dir",
            "/home/user/.gradle",
            "--target_mvn_dir",
            "/tmp/m2",
        ])
        .unwrap();

        assert_eq!(cli.gradle_cache_dir, PathBuf::from("/home/user/.gradle"));
        assert_eq!(cli.target_mvn_dir, PathBuf::from("/tmp/m2"));
        assert!(!cli.pre_clean_mvn_dir);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.color, "auto");
    }

    #[test]
    fn test_parse_pre_clean_flag() {
        let cli = Cli::try_parse_from([
            "gradle-mvn-repo",
            "--gradle_cache_dir",
            "cache",
            "--target_mvn_dir",
            "repo",
            "--pre_clean_mvn_dir",
        ])
        .unwrap();

        assert!(cli.pre_clean_mvn_dir);
    }

    #[test]
    fn test_missing_target_dir_is_rejected() {
        let result = Cli::try_parse_from(["gradle-mvn-repo", "--gradle_cache_dir", "cache"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let result = Cli::try_parse_from([
            "gradle-mvn-repo",
            "--gradle_cache_dir",
            "cache",
            "--target_mvn_dir",
            "repo",
            "--log-level",
            "verbose",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let result = Cli::try_parse_from([
            "gradle-mvn-repo",
            "--gradle_cache_dir",
            "cache",
            "--target_mvn_dir",
            "repo",
            "--color",
            "sometimes",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_choice_is_parsed() {
        let cli = Cli::try_parse_from([
            "gradle-mvn-repo",
            "--gradle_cache_dir",
            "cache",
            "--target_mvn_dir",
            "repo",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.color, "never");
    }
}
