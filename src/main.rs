mod logging;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use ago::util::parse_instant;
use ago::{FormatOptions, FormatterConfig, Result, TimeAgo};

/// Describe an instant relative to now, or to another instant
#[derive(Parser, Debug)]
#[command(name = "ago", version, about, long_about = None)]
struct Args {
    /// Instant to describe, as RFC 3339 or Unix seconds
    instant: String,

    /// Reference instant (defaults to now)
    #[arg(long, value_name = "INSTANT")]
    since: Option<String>,

    /// Print an abbreviated token such as "3d"
    #[arg(short, long)]
    short: bool,

    /// Write single dates numerically ("1 month ago" instead of "Last month")
    #[arg(long)]
    numeric_dates: bool,

    /// Write single times numerically ("1 hour ago" instead of "An hour ago")
    #[arg(long)]
    numeric_times: bool,

    /// Locale to format in (defaults to LC_ALL / LC_MESSAGES / LANG)
    #[arg(short, long)]
    locale: Option<String>,

    /// JSON string table to merge over the bundled translations
    #[arg(long, value_name = "FILE")]
    strings: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize logging (ok to fail silently - formatting works without it)
    let _ = logging::init();

    match run() {
        Ok(phrase) => {
            println!("{phrase}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String> {
    let args = Args::parse();

    let config = FormatterConfig {
        locale: args.locale,
        extra_strings: args.strings,
    };
    let formatter = TimeAgo::from_config(&config)?;

    let subject = parse_instant(&args.instant)?;
    let options = FormatOptions::new()
        .with_numeric_dates(args.numeric_dates)
        .with_numeric_times(args.numeric_times);

    let phrase = match (args.since.as_deref(), args.short) {
        (Some(since), true) => formatter.short_time_ago(&subject, &parse_instant(since)?),
        (Some(since), false) => formatter.time_ago(&subject, &parse_instant(since)?, options),
        (None, true) => formatter.short_time_ago_since_now(&subject),
        (None, false) => formatter.time_ago_since_now(&subject, options),
    };

    Ok(phrase)
}
