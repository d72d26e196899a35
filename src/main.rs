//! justline CLI.
//!
//! Non-interactive shell around the pure core: reads text from a file
//! argument or stdin, breaks it with the chosen partitioner, and prints the
//! justified lines. `--algo=both` runs both partitioners and reports elapsed
//! time and raggedness cost for each.
//!
//! All configuration travels as plain parameters in [`Options`]; the core
//! never sees a width below 1.

use std::io::Read;
use std::process;
use std::time::{Duration, Instant};

use crossterm::style::Stylize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use justline::{Alignment, Partition, dp_break, format, greedy_break, raggedness, split};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    ReadStdin(std::io::Error),
    #[error("missing required flag --width=N")]
    MissingWidth,
    #[error("invalid width {0:?}: expected an integer of at least 1")]
    InvalidWidth(String),
    #[error("unknown alignment {0:?}: expected left, right, center, or full")]
    UnknownAlignment(String),
    #[error("unknown algorithm {0:?}: expected greedy, dp, or both")]
    UnknownAlgorithm(String),
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Greedy,
    Dp,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    /// Input file path; `None` or `-` reads stdin to EOF.
    input: Option<String>,
    width: usize,
    align: Alignment,
    algo: Algorithm,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    if let Err(err) = parse_args(&args).and_then(run) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: justline [FILE] --width=N [options]");
    eprintln!();
    eprintln!("Reads FILE (or stdin when FILE is absent or '-'), breaks the text into");
    eprintln!("lines of at most N characters, and prints the justified result.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --width=N        Maximum line width in characters (required, N >= 1)");
    eprintln!("  --align=MODE     left, right, center, or full (default: left)");
    eprintln!("  --algo=ALGO      greedy, dp, or both (default: greedy)");
    eprintln!("  -h, --help       Show this help");
}

fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let mut input = None;
    let mut width = None;
    let mut align = Alignment::Left;
    let mut algo = Algorithm::Greedy;

    for arg in args {
        if let Some(v) = arg.strip_prefix("--width=") {
            let parsed: usize = v
                .parse()
                .map_err(|_| CliError::InvalidWidth(v.to_string()))?;
            if parsed < 1 {
                return Err(CliError::InvalidWidth(v.to_string()));
            }
            width = Some(parsed);
        } else if let Some(v) = arg.strip_prefix("--align=") {
            align = parse_alignment(v)?;
        } else if let Some(v) = arg.strip_prefix("--algo=") {
            algo = parse_algorithm(v)?;
        } else if !arg.starts_with('-') || arg == "-" {
            if input.is_some() {
                return Err(CliError::UnexpectedArgument(arg.clone()));
            }
            input = Some(arg.clone());
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(Options {
        input,
        width: width.ok_or(CliError::MissingWidth)?,
        align,
        algo,
    })
}

fn parse_alignment(value: &str) -> Result<Alignment, CliError> {
    match value {
        "left" => Ok(Alignment::Left),
        "right" => Ok(Alignment::Right),
        "center" => Ok(Alignment::Center),
        "full" => Ok(Alignment::Full),
        _ => Err(CliError::UnknownAlignment(value.to_string())),
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, CliError> {
    match value {
        "greedy" => Ok(Algorithm::Greedy),
        "dp" => Ok(Algorithm::Dp),
        "both" => Ok(Algorithm::Both),
        _ => Err(CliError::UnknownAlgorithm(value.to_string())),
    }
}

fn run(opts: Options) -> Result<(), CliError> {
    let text = read_input(opts.input.as_deref())?;
    let words = split(&text);
    if words.is_empty() {
        eprintln!("input contains no words");
        return Ok(());
    }

    match opts.algo {
        Algorithm::Greedy => {
            let (partition, elapsed) = timed(|| greedy_break(&words, opts.width));
            print_result("Greedy", &partition, opts.align, opts.width, elapsed);
        }
        Algorithm::Dp => {
            let (partition, elapsed) = timed(|| dp_break(&words, opts.width));
            print_result(
                "Dynamic programming",
                &partition,
                opts.align,
                opts.width,
                elapsed,
            );
        }
        Algorithm::Both => {
            let (dp, dp_elapsed) = timed(|| dp_break(&words, opts.width));
            let (greedy, greedy_elapsed) = timed(|| greedy_break(&words, opts.width));
            print_result("Dynamic programming", &dp, opts.align, opts.width, dp_elapsed);
            print_result("Greedy", &greedy, opts.align, opts.width, greedy_elapsed);
            compare(&dp, dp_elapsed, &greedy, greedy_elapsed, opts.width);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::ReadStdin)?;
            Ok(text)
        }
        Some(p) => std::fs::read_to_string(p).map_err(|source| CliError::ReadFile {
            path: p.to_string(),
            source,
        }),
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn print_result(
    name: &str,
    partition: &Partition<'_>,
    align: Alignment,
    width: usize,
    elapsed: Duration,
) {
    println!();
    println!(
        "{} ({})",
        format!("--- {name} ---").bold(),
        format_ms(elapsed)
    );
    for line in format(partition, align, width) {
        println!("{line}");
    }
}

fn compare(
    dp: &Partition<'_>,
    dp_elapsed: Duration,
    greedy: &Partition<'_>,
    greedy_elapsed: Duration,
    width: usize,
) {
    let dp_cost = raggedness(dp, width);
    let greedy_cost = raggedness(greedy, width);

    println!();
    println!(
        "raggedness: dp {dp_cost}, greedy {greedy_cost}{}",
        if dp_cost < greedy_cost {
            " (dp is more even)"
        } else {
            ""
        }
    );
    if dp_elapsed < greedy_elapsed {
        println!(
            "dp ran faster ({} vs {})",
            format_ms(dp_elapsed),
            format_ms(greedy_elapsed)
        );
    } else if greedy_elapsed < dp_elapsed {
        println!(
            "greedy ran faster ({} vs {})",
            format_ms(greedy_elapsed),
            format_ms(dp_elapsed)
        );
    } else {
        println!("both took about the same time ({})", format_ms(dp_elapsed));
    }
}

fn format_ms(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_minimal() {
        let opts = parse_args(&args(&["--width=40"])).unwrap();
        assert_eq!(
            opts,
            Options {
                input: None,
                width: 40,
                align: Alignment::Left,
                algo: Algorithm::Greedy,
            }
        );
    }

    #[test]
    fn parse_all_flags() {
        let opts =
            parse_args(&args(&["input.txt", "--width=72", "--align=full", "--algo=both"])).unwrap();
        assert_eq!(
            opts,
            Options {
                input: Some("input.txt".to_string()),
                width: 72,
                align: Alignment::Full,
                algo: Algorithm::Both,
            }
        );
    }

    #[test]
    fn parse_stdin_dash() {
        let opts = parse_args(&args(&["-", "--width=10"])).unwrap();
        assert_eq!(opts.input.as_deref(), Some("-"));
    }

    #[test]
    fn missing_width_is_an_error() {
        assert!(matches!(
            parse_args(&args(&["input.txt"])),
            Err(CliError::MissingWidth)
        ));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(matches!(
            parse_args(&args(&["--width=0"])),
            Err(CliError::InvalidWidth(_))
        ));
    }

    #[test]
    fn non_numeric_width_is_rejected() {
        assert!(matches!(
            parse_args(&args(&["--width=ten"])),
            Err(CliError::InvalidWidth(_))
        ));
    }

    #[test]
    fn unknown_alignment_is_rejected() {
        assert!(matches!(
            parse_args(&args(&["--width=10", "--align=justified"])),
            Err(CliError::UnknownAlignment(_))
        ));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(matches!(
            parse_args(&args(&["--width=10", "--algo=fastest"])),
            Err(CliError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(matches!(
            parse_args(&args(&["a.txt", "b.txt", "--width=10"])),
            Err(CliError::UnexpectedArgument(_))
        ));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(
            parse_args(&args(&["--width=10", "--wrap=hard"])),
            Err(CliError::UnexpectedArgument(_))
        ));
    }
}
