// fizzbuzz: classify numbers from the command line.
//
//   cargo run --bin fizzbuzz -- 3 5 15
//   cargo run --bin fizzbuzz -- --from 1 --to 100 --format json --summary
//   FIZZBUZZ_LOG=debug cargo run --bin fizzbuzz -- --config fizzbuzz.toml

use clap::Parser;
use colored::Colorize;
use fizzbuzz_testing::config::Config;
use fizzbuzz_testing::logging::init_logging;
use fizzbuzz_testing::report::{self, LabelStyle, OutputFormat, Summary};
use fizzbuzz_testing::{parse_input, FizzBuzz, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "fizzbuzz", version, about = "Classify integers as BOTH, THREE, FIVE or NEITHER")]
struct Cli {
    /// Numbers to classify. When omitted, the range from --from/--to (or the config) is used.
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// First number of the range.
    #[arg(long, allow_negative_numbers = true)]
    from: Option<i64>,

    /// Last number of the range (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    to: Option<i64>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    style: Option<LabelStyle>,

    /// Print per-label counts after the entries.
    #[arg(long)]
    summary: bool,

    /// Config file; defaults to ./fizzbuzz.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Merge command-line flags over the file config. Flags win.
fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(from) = cli.from {
        config.range.start = from;
    }
    if let Some(to) = cli.to {
        config.range.end = to;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(style) = cli.style {
        config.output.style = style;
    }
    config.output.summary |= cli.summary;
    config
}

fn run(cli: Cli) -> Result<String> {
    let config = Config::discover(cli.config.as_deref(), Path::new("."))?;
    init_logging(config.log_level.as_deref());
    let config = apply_overrides(&cli, config);
    debug!(?config, "effective configuration");

    let entries = if cli.numbers.is_empty() {
        report::classify_range_limited(
            &FizzBuzz,
            config.range.start,
            config.range.end,
            config.range.max_len,
        )?
    } else {
        let numbers = cli
            .numbers
            .iter()
            .map(|raw| parse_input(raw))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        report::classify_all(&FizzBuzz, numbers)
    };
    info!(count = entries.len(), "classified");

    let mut out = report::render(&entries, config.output.format, config.output.style)?;
    if config.output.summary {
        out.push_str(&Summary::tally(&entries).render());
        out.push('\n');
    }
    Ok(out)
}

/// `--help` and `--version` are not failures; every real usage error is.
fn exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing useful to do if the terminal is gone.
            let _ = e.print();
            return ExitCode::from(exit_status(&e));
        }
    };
    match run(cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
