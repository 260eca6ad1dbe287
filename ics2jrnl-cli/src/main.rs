use anyhow::Result;
use clap::Parser;
use ics2jrnl_core::{Source, convert};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// ics2jrnl — convert an iCalendar feed to jrnl import format
///
/// Pipe the output into `jrnl --import`:
///   ics2jrnl -f calendar.ics | jrnl --import
///   ics2jrnl -u https://calendar.google.com/calendar/ical/<secret> | jrnl --import
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Convert a local iCalendar (.ics) file
    #[arg(long, short, value_name = "PATH", group = "source")]
    file: Option<PathBuf>,
    /// Fetch and convert a calendar from its secret iCal URL
    #[arg(
        long,
        short,
        value_name = "URL",
        group = "source",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    url: Option<String>,
}

/// What one invocation should do, decided from the parsed flags.
#[derive(Debug, PartialEq)]
enum Action {
    Convert(Source),
    ShowUsage,
    ShowUrlInstructions,
}

fn dispatch(file: Option<PathBuf>, url: Option<String>) -> Action {
    match (file, url) {
        (Some(path), None) => Action::Convert(Source::File(path)),
        // `-u` with no value parses as an empty string and lands in the
        // instructions branch, like a blank value.
        (None, Some(url)) => {
            if url.trim().is_empty() {
                Action::ShowUrlInstructions
            } else {
                Action::Convert(Source::Url(url))
            }
        }
        _ => Action::ShowUsage,
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ics2jrnl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Bad or missing arguments are a usage hint and a no-op exit, kept
    // apart from genuine fetch/parse failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(());
        }
    };

    let source = match dispatch(cli.file, cli.url) {
        Action::Convert(source) => source,
        // No source flag at all: a usage hint, not a failure.
        Action::ShowUsage => {
            print_usage();
            return Ok(());
        }
        Action::ShowUrlInstructions => {
            print_secret_url_instructions();
            return Ok(());
        }
    };

    let bytes = source.load()?;
    let output = convert(&bytes)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{output}\r\n")?;
    Ok(())
}

fn print_usage() {
    eprintln!("Usage:\n  ics2jrnl -f <path-to-ics>\n  ics2jrnl -u <secret-ical-url>");
}

fn print_secret_url_instructions() {
    eprintln!(
        "Provide the secret iCal URL of your calendar.\n\
         Find it in Google Calendar: gear icon top-right -> Settings -> select the calendar -> \
         Integrate calendar -> Secret address in iCal format.\n\
         Usage: ics2jrnl -u <secret-ical-url>"
    );
}
