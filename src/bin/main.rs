extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate simmetrics;

use std::env;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use simmetrics::prelude::*;
use simmetrics::util::read_lines;

/// simm - string similarity from the command line
///
/// Compare two strings:
///     simm -m jaro_winkler martha marhta
///
/// Rank the lines of stdin against a query:
///     cat names.txt | simm -m monge_elkan --filter "john smith" --threshold 0.8
///
/// Default options can be set in SIMM_DEFAULT_OPTIONS.
#[derive(Parser, Debug)]
#[command(name = "simm", args_override_self = true, verbatim_doc_comment, version, about)]
struct Cli {
    /// First string
    #[arg(required_unless_present = "filter")]
    a: Option<String>,

    /// Second string
    #[arg(required_unless_present = "filter")]
    b: Option<String>,

    /// Print the unnormalized score
    #[arg(short, long, help_heading = "Output")]
    absolute: bool,

    /// Print how the score was computed
    #[arg(short, long, help_heading = "Output")]
    explain: bool,

    /// Score every line of stdin against QUERY, best first
    #[arg(short, long, value_name = "QUERY", help_heading = "Filter")]
    filter: Option<String>,

    /// Drop lines scoring below this value
    #[arg(long, default_value_t = 0.0, help_heading = "Filter")]
    threshold: f64,

    /// Read metric options from a RON file instead of the command line
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reference corpus for TagLink IDF weights, one document per line
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    #[command(flatten)]
    options: MetricOptions,
}

fn parse_args() -> Cli {
    let mut args: Vec<String> = env::args().take(1).collect();
    args.extend(
        env::var("SIMM_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));
    Cli::parse_from(args)
}

//------------------------------------------------------------------------------
fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // downstream pipe closed
            if let Some(io_err) = err.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::BrokenPipe
            {
                std::process::exit(0)
            }
            Err(err)
        }
    }
}

fn real_main() -> Result<i32> {
    let cli = parse_args();

    let mut options = match &cli.config {
        Some(path) => MetricOptions::load(path).wrap_err_with(|| format!("loading {}", path.display()))?,
        None => cli.options.clone(),
    };
    if let Some(path) = &cli.corpus {
        options.corpus = read_lines(path).wrap_err_with(|| format!("reading corpus {}", path.display()))?;
        debug!("read {} corpus documents", options.corpus.len());
    }

    let metric = options.build_metric()?;

    if let Some(query) = &cli.filter {
        return filter(metric.as_ref(), query, cli.threshold);
    }

    let (a, b) = match (&cli.a, &cli.b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(eyre!("two strings are required")),
    };

    let mut stdout = std::io::stdout().lock();
    if cli.explain {
        writeln!(stdout, "{}", metric.explain(a, b))?;
    } else if cli.absolute {
        writeln!(stdout, "{}", metric.absolute_similarity(a, b))?;
    } else {
        writeln!(stdout, "{:.4}", metric.similarity(a, b))?;
    }
    Ok(0)
}

/// Print `score\tline` for every stdin line scoring at least `threshold`.
///
/// Exits with 1 when no line qualifies.
fn filter(metric: &dyn StringMetric, query: &str, threshold: f64) -> Result<i32> {
    let mut scored = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let score = metric.similarity(query, &line);
        if score >= threshold {
            scored.push((score, line));
        }
    }
    debug!("{} lines kept at threshold {threshold}", scored.len());

    scored.sort_by(|(x, _), (y, _)| y.total_cmp(x));

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    for (score, line) in &scored {
        writeln!(stdout, "{score:.4}\t{line}")?;
    }
    stdout.flush()?;

    Ok(if scored.is_empty() { 1 } else { 0 })
}
