//! Batch runner: `duel <input.json> <output.json> [--verbose]`.
//!
//! Reads a batch input file, plays every match in order and writes the
//! output records as a pretty-printed JSON array. Logs go to stderr.

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use log::{info, LevelFilter};

use minion_duel::core::{BatchContext, RulesConfig};
use minion_duel::games::duel::run_batch;
use minion_duel::io::{render, Input};

struct Args {
    input: PathBuf,
    output: PathBuf,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut verbose = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    let [input, output]: [PathBuf; 2] = match paths.try_into() {
        Ok(paths) => paths,
        Err(_) => bail!("usage: duel <input.json> <output.json> [--verbose]"),
    };
    Ok(Args { input, output, verbose })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = parse_args()?;

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    simple_logging::log_to_stderr(level);

    let raw = fs::read_to_string(&args.input)
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;
    let input: Input = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse {}", args.input.display()))?;

    let mut batch = BatchContext::new();
    let results = run_batch(&input, &RulesConfig::default(), &mut batch)
        .wrap_err("match setup failed")?;

    let records = render(&results);
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&args.output, json)
        .wrap_err_with(|| format!("failed to write {}", args.output.display()))?;

    info!(
        "wrote {} records for {} games ({} won by player one, {} by player two)",
        records.len(),
        input.games.len(),
        batch.player_one_wins,
        batch.player_two_wins
    );
    Ok(())
}
