//! Command implementations for the Spellmap CLI.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::{SpellChecker, SpellCheckerConfig, normalize};

/// Prompt shown before every interactive query.
pub const PROMPT: &str = "Enter a word or \"quit\" to quit: ";

/// Entering this word ends an interactive session.
pub const QUIT_COMMAND: &str = "quit";

/// Execute a CLI command.
pub fn execute_command(args: SpellmapArgs) -> Result<()> {
    let config = load_config(&args)?;
    let mut reporter = create_reporter(&args);

    match &args.command {
        Command::Interactive(interactive_args) => {
            let stdin = io::stdin();
            // Keep prompts out of machine-readable output.
            let mut prompt: Box<dyn Write> = match args.output_format {
                OutputFormat::Human => Box::new(io::stdout()),
                OutputFormat::Json => Box::new(io::stderr()),
            };
            run_interactive(
                interactive_args,
                &config,
                stdin.lock(),
                &mut prompt,
                reporter.as_mut(),
            )
            .map(|_| ())
        }
        Command::Check(check_args) => run_check(check_args, &config, reporter.as_mut()),
        Command::Stats(stats_args) => run_stats(stats_args, &config, reporter.as_mut()),
    }
}

/// Load the configuration named on the command line, or the defaults.
pub fn load_config(args: &SpellmapArgs) -> Result<SpellCheckerConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            SpellCheckerConfig::load_from_file(path)
        }
        None => Ok(SpellCheckerConfig::default()),
    }
}

/// Create the reporter for the selected output format, writing to stdout.
pub fn create_reporter(args: &SpellmapArgs) -> Box<dyn Reporter> {
    match args.output_format {
        OutputFormat::Human => {
            Box::new(HumanReporter::new(io::stdout()).with_distances(args.verbosity() > 1))
        }
        OutputFormat::Json => Box::new(JsonReporter::new(io::stdout(), args.pretty)),
    }
}

/// Load a dictionary and time it.
fn load_checker(
    dictionary: &Path,
    config: &SpellCheckerConfig,
) -> Result<(SpellChecker, LoadSummary)> {
    let start_time = Instant::now();
    let checker = SpellChecker::from_file(dictionary, config)?;
    let elapsed = start_time.elapsed();

    let summary = LoadSummary {
        dictionary: dictionary.to_string_lossy().to_string(),
        words: checker.dictionary().len(),
        duration_ms: elapsed.as_millis() as u64,
        seconds: elapsed.as_secs_f64(),
    };
    Ok((checker, summary))
}

/// Load the dictionary, then check words read from `input` until "quit" or end of input.
///
/// Input is split on whitespace and every token is one query. Each query is
/// lowercased and reported before the quit check, so "quit" itself is reported.
/// Returns the number of words checked.
pub fn run_interactive<R: BufRead, W: Write>(
    args: &InteractiveArgs,
    config: &SpellCheckerConfig,
    input: R,
    prompt: &mut W,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    let (checker, summary) = load_checker(&args.dictionary, config)?;
    reporter.report_load(&summary)?;
    run_session(&checker, input, prompt, reporter)
}

/// Interactive loop over an already loaded checker.
pub fn run_session<R: BufRead, W: Write>(
    checker: &SpellChecker,
    mut input: R,
    prompt: &mut W,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    let mut line = Vec::new();
    let mut pending: VecDeque<String> = VecDeque::new();
    let mut checked = 0;

    loop {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;

        while pending.is_empty() {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            // Raw bytes: invalid UTF-8 in a query is replaced, never fatal.
            pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        let Some(word) = pending.pop_front() else {
            writeln!(prompt)?;
            debug!("Input exhausted after {checked} words");
            break;
        };

        let word = normalize(&word);
        let outcome = checker.check(&word);
        reporter.report_check(&outcome)?;
        checked += 1;

        if word == QUIT_COMMAND {
            break;
        }
    }

    Ok(checked)
}

/// Check each word given on the command line.
pub fn run_check(
    args: &CheckArgs,
    config: &SpellCheckerConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let (checker, summary) = load_checker(&args.dictionary, config)?;
    debug!(
        "Loaded {} words from {} in {}ms",
        summary.words, summary.dictionary, summary.duration_ms
    );

    for word in &args.words {
        reporter.report_check(&checker.check(word))?;
    }
    Ok(())
}

/// Report table statistics for a dictionary.
pub fn run_stats(
    args: &StatsArgs,
    config: &SpellCheckerConfig,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let (checker, summary) = load_checker(&args.dictionary, config)?;
    reporter.report_load(&summary)?;
    reporter.report_stats(&checker.dictionary().stats())
}
