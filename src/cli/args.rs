//! Command line argument parsing for the Spellmap CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dictionary file used by interactive mode.
pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";

/// Spellmap - spell checking backed by a chained hash table
#[derive(Parser, Debug, Clone)]
#[command(name = "spellmap")]
#[command(about = "Check spelling and suggest the closest dictionary words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellmapArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Spell checker configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellmapArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Prompt for words until "quit" is entered
    Interactive(InteractiveArgs),

    /// Check the given words once
    Check(CheckArgs),

    /// Show dictionary table statistics
    Stats(StatsArgs),
}

/// Arguments for the interactive prompt
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Dictionary word list
    #[arg(value_name = "DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,
}

/// Arguments for one-shot checks
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Dictionary word list
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for table statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dictionary word list
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_check_command() {
        let args =
            SpellmapArgs::try_parse_from(["spellmap", "check", "words.txt", "helo", "wrold"])
                .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.dictionary, PathBuf::from("words.txt"));
            assert_eq!(check_args.words, vec!["helo", "wrold"]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_requires_words() {
        assert!(SpellmapArgs::try_parse_from(["spellmap", "check", "words.txt"]).is_err());
    }

    #[test]
    fn test_interactive_default_dictionary() {
        let args = SpellmapArgs::try_parse_from(["spellmap", "interactive"]).unwrap();

        if let Command::Interactive(interactive_args) = args.command {
            assert_eq!(interactive_args.dictionary, PathBuf::from(DEFAULT_DICTIONARY));
        } else {
            panic!("Expected Interactive command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpellmapArgs::try_parse_from(["spellmap", "stats", "d.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SpellmapArgs::try_parse_from(["spellmap", "-vv", "stats", "d.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            SpellmapArgs::try_parse_from(["spellmap", "--quiet", "-vvv", "stats", "d.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format_and_config() {
        let args = SpellmapArgs::try_parse_from([
            "spellmap",
            "--format",
            "json",
            "--config",
            "spellmap.json",
            "stats",
            "d.txt",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.config, Some(PathBuf::from("spellmap.json")));
    }
}
