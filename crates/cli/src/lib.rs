#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `trainsched`
//! binary. The crate is intentionally small: it recognises the switches
//! supported by this build (`--help`/`-h`, `--version`/`-V`,
//! `--verbose`/`-v`, and `--value`) plus positional month operands, selects
//! the plan to report on, and renders the report to the supplied output
//! handle.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard
//! output and error, so tests can capture output without spawning
//! processes. Internally a [`clap`](https://docs.rs/clap/) command
//! definition performs the parse; plan selection and report rendering are
//! pure functions over [`calendar::MonthSet`].
//!
//! # Invariants
//!
//! - `run` never panics; unexpected I/O failures surface as non-zero exit
//!   codes.
//! - The report lists months in calendar order, one line per selected
//!   month, preceded by the raw plan value on its own line.
//! - Help output is rendered from a static snapshot so the wording stays
//!   stable across refactors.
//!
//! # Errors
//!
//! Argument processing failures produce a one-line diagnostic on the error
//! handle and exit code `1`. The no-operand invocation has no error paths
//! short of a broken output handle.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["trainsched", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - [`calendar`] for the month bitmask primitives.
//! - `src/bin/trainsched.rs` for the binary crate that wires [`run`] into
//!   `main`.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Arg, ArgAction, Command};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use calendar::{Month, MonthSet, ParseMonthError};

/// Exit code for successful invocations.
const EXIT_OK: i32 = 0;

/// Exit code for usage errors and report-rendering failures.
const EXIT_USAGE: i32 = 1;

/// Built-in plan reported when no operands are given: the spring training
/// window.
const DEFAULT_PLAN: MonthSet = MonthSet::MARCH.union(MonthSet::APRIL).union(MonthSet::MAY);

/// Environment variable consulted for the default tracing filter.
const LOG_ENV_VAR: &str = "TRAINSCHED_LOG";

/// Deterministic help text describing the CLI surface supported by this build.
const HELP_TEXT: &str = concat!(
    "trainsched ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: trainsched [-h] [-V] [-v] [--value BITS] [MONTH...]\n",
    "\n",
    "Reports the months in which training needs to be finished. Without\n",
    "operands the built-in plan (March, April, May) is used. Month operands\n",
    "accept full English names or three-letter abbreviations, ignoring case.\n",
    "\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -v, --verbose    Enable debug logging on standard error.\n",
    "      --value=BITS Decode a raw plan value instead of month operands.\n",
);

/// Version banner printed by `--version`.
const VERSION_TEXT: &str = concat!("trainsched ", env!("CARGO_PKG_VERSION"), "\n");

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbose: bool,
    value: Option<String>,
    months: Vec<String>,
}

/// Errors produced while turning parsed arguments into a plan.
#[derive(Debug, Error)]
enum CliError {
    /// A month operand did not name a calendar month.
    #[error(transparent)]
    InvalidMonth(#[from] ParseMonthError),
    /// `--value` was not a non-negative 32-bit integer.
    #[error("invalid plan value {value:?}: expected a non-negative 32-bit integer")]
    InvalidValue {
        /// The rejected argument text.
        value: String,
    },
    /// Month operands and `--value` select conflicting plans.
    #[error("month operands cannot be combined with --value")]
    ConflictingSelectors,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("trainsched")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on standard error.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("value")
                .long("value")
                .value_name("BITS")
                .help("Decode a raw plan value instead of month operands.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("months")
                .value_name("MONTH")
                .help("Months that replace the built-in plan.")
                .action(ArgAction::Append),
        )
}

/// Parses the raw argument iterator into a [`ParsedArgs`] value.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let arguments: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    let mut matches = clap_command().try_get_matches_from(arguments)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let verbose = matches.get_flag("verbose");
    let value = matches.remove_one::<String>("value");
    let months = matches
        .remove_many::<String>("months")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help,
        show_version,
        verbose,
        value,
        months,
    })
}

/// Selects the plan to report on from the parsed arguments.
fn select_plan(parsed: &ParsedArgs) -> Result<MonthSet, CliError> {
    if let Some(raw) = parsed.value.as_deref() {
        if !parsed.months.is_empty() {
            return Err(CliError::ConflictingSelectors);
        }

        let bits = raw.parse::<u32>().map_err(|_| CliError::InvalidValue {
            value: raw.to_owned(),
        })?;
        return Ok(MonthSet::from_bits(bits));
    }

    if parsed.months.is_empty() {
        return Ok(DEFAULT_PLAN);
    }

    parsed
        .months
        .iter()
        .map(|name| Month::from_name(name))
        .collect::<Result<MonthSet, ParseMonthError>>()
        .map_err(CliError::from)
}

/// Writes the plan report: the raw value first, then one line per month in
/// calendar order.
fn render_report<W: Write>(stdout: &mut W, plan: MonthSet) -> io::Result<()> {
    writeln!(stdout, "{}", plan.bits())?;
    for month in plan.iter() {
        writeln!(stdout, "Training needs to be finished in {month}.")?;
    }
    Ok(())
}

/// Installs the tracing subscriber for this invocation.
///
/// Later invocations in the same process keep the first subscriber, so the
/// `try_init` result is discarded on purpose.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn execute<Out, Err>(parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        if stdout.write_all(HELP_TEXT.as_bytes()).is_err() {
            return EXIT_USAGE;
        }
        return EXIT_OK;
    }

    if parsed.show_version {
        if stdout.write_all(VERSION_TEXT.as_bytes()).is_err() {
            return EXIT_USAGE;
        }
        return EXIT_OK;
    }

    let plan = match select_plan(parsed) {
        Ok(plan) => plan,
        Err(error) => {
            let _ = writeln!(stderr, "trainsched: {error}");
            return EXIT_USAGE;
        }
    };

    tracing::debug!(
        target: "trainsched::plan",
        value = plan.bits(),
        months = plan.iter().len(),
        "selected training plan"
    );

    if let Err(error) = render_report(stdout, plan) {
        let _ = writeln!(stderr, "trainsched: failed to write report: {error}");
        return EXIT_USAGE;
    }

    EXIT_OK
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` on success, `1` for usage errors or a broken output handle.
/// Diagnostics go to `stderr`; the report goes to `stdout`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => {
            init_tracing(parsed.verbose);
            execute(&parsed, stdout, stderr)
        }
        Err(error) => {
            let _ = write!(stderr, "{error}");
            EXIT_USAGE
        }
    }
}
