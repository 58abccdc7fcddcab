//! pcg-cli: print PCG draws as JSON
//!
//! ```text
//! pcg-cli [--seed S1 S2 Q1 Q2] [--skip N] [--count N] [--config FILE]
//! ```
//!
//! Without `--seed` (or a seed in the config file) the generator is seeded
//! from OS entropy. Set `RUST_LOG=debug` for diagnostics.

use std::process::ExitCode;

use log::{debug, error};
use pcg_core_rs::{GeneratorConfig, SeedConfig};
use serde::Serialize;

const USAGE: &str = "usage: pcg-cli [--seed S1 S2 Q1 Q2] [--skip N] [--count N] [--config FILE]";

#[derive(Debug)]
struct Args {
    config: GeneratorConfig,
    count: usize,
}

#[derive(Serialize)]
struct Output {
    seed: Option<SeedConfig>,
    skip: i64,
    draws: Vec<String>,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} expects a value"))?;
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16)
            .map_err(|e| e.to_string())
            .and_then(|v| v.to_string().parse::<T>().map_err(|_| "out of range".to_string())),
        None => value.parse::<T>().map_err(|_| "not a number".to_string()),
    };
    parsed.map_err(|e| format!("{flag}: invalid value '{value}': {e}"))
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut config = GeneratorConfig::default();
    let mut seed = None;
    let mut skip = None;
    let mut count = 8;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--seed" => {
                seed = Some(SeedConfig {
                    seed1: parse_number("--seed", raw.next())?,
                    seed2: parse_number("--seed", raw.next())?,
                    seq1: parse_number("--seed", raw.next())?,
                    seq2: parse_number("--seed", raw.next())?,
                });
            }
            "--skip" => skip = Some(parse_number("--skip", raw.next())?),
            "--count" => count = parse_number("--count", raw.next())?,
            "--config" => {
                let path = raw.next().ok_or("--config expects a path")?;
                let json = std::fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read {path}: {e}"))?;
                config = GeneratorConfig::from_json(&json).map_err(|e| e.to_string())?;
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument '{other}'\n{USAGE}")),
        }
    }

    // Command line flags override the config file
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(skip) = skip {
        config.skip = skip;
    }

    Ok(Args { config, count })
}

fn run(args: Args) -> Result<String, String> {
    debug!("Building generator from {:?}", args.config);
    let mut rng = args.config.build().map_err(|e| e.to_string())?;

    let output = Output {
        seed: args.config.seed,
        skip: args.config.skip,
        draws: (0..args.count)
            .map(|_| format!("{:#018x}", rng.next()))
            .collect(),
    };
    serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::init();

    match parse_args(std::env::args().skip(1)).and_then(run) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
