// src/cli.rs
// Command-line parsing and runners for the shor_factor binary

use std::path::PathBuf;
use log::{error, info};
use crate::algorithms::order_test::FactorTestFormula;
use crate::algorithms::report::FactorReport;
use crate::algorithms::shor::FactorFinder;
use crate::algorithms::{factor_batch, FactorJob};
use crate::config::ShorConfig;
use crate::error::Result;

pub const USAGE: &str = "\
Usage:
  shor_factor [OPTIONS] <N> [INITIAL_BASE]
  shor_factor batch [OPTIONS] <N>...

Options:
  --quantum               Use the quantum order-finding oracle
  --formula <NAME>        textbook (default) or reference
  --seed <SEED>           Seed for random base selection
  --max-attempts <COUNT>  Attempt budget per target (0 = unbounded)
  --allow-primes          Search prime targets instead of rejecting them
  --json                  Print the full report as JSON
  --config <PATH>         Load configuration from PATH";

/// Default first base when none is given
pub const DEFAULT_INITIAL_BASE: u64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Single { n: u64, initial_base: u64 },
    Batch { targets: Vec<u64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: Command,
    pub use_quantum: bool,
    pub json: bool,
    pub config_path: Option<PathBuf>,
    pub formula: Option<FactorTestFormula>,
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
    pub allow_primes: bool,
}

impl CliArgs {
    /// Parses arguments without the program name.
    pub fn parse(args: &[String]) -> std::result::Result<Self, String> {
        let mut positional: Vec<&str> = Vec::new();
        let mut use_quantum = false;
        let mut json = false;
        let mut config_path = None;
        let mut formula = None;
        let mut seed = None;
        let mut max_attempts = None;
        let mut allow_primes = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--quantum" => use_quantum = true,
                "--json" => json = true,
                "--allow-primes" => allow_primes = true,
                "--config" => config_path = Some(PathBuf::from(value_for(&mut iter, arg)?)),
                "--formula" => formula = Some(value_for(&mut iter, arg)?.parse::<FactorTestFormula>()?),
                "--seed" => seed = Some(parse_number(value_for(&mut iter, arg)?, arg)?),
                "--max-attempts" => {
                    max_attempts = Some(parse_number::<usize>(value_for(&mut iter, arg)?, arg)?)
                }
                flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
                value => positional.push(value),
            }
        }

        let command = match positional.split_first() {
            Some((&"batch", rest)) => {
                if rest.is_empty() {
                    return Err("batch needs at least one target".to_string());
                }
                let targets = rest
                    .iter()
                    .map(|s| parse_number(s, "target"))
                    .collect::<std::result::Result<Vec<u64>, String>>()?;
                Command::Batch { targets }
            }
            Some((n, rest)) => {
                let n = parse_number(n, "target")?;
                let initial_base = match rest {
                    [] => DEFAULT_INITIAL_BASE,
                    [base] => parse_number(base, "initial base")?,
                    _ => return Err(format!("Unexpected argument '{}'", rest[1])),
                };
                Command::Single { n, initial_base }
            }
            None => return Err("Missing target N".to_string()),
        };

        Ok(CliArgs {
            command,
            use_quantum,
            json,
            config_path,
            formula,
            seed,
            max_attempts,
            allow_primes,
        })
    }

    /// Applies command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, config: &mut ShorConfig) {
        if let Some(formula) = self.formula {
            config.formula = formula;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if self.allow_primes {
            config.reject_primes = false;
        }
    }
}

fn value_for<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> std::result::Result<&'a str, String> {
    iter.next()
        .map(|s| s.as_str())
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> std::result::Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid {} '{}'", what, value))
}

/// Runs the parsed command. Returns the process exit code.
pub fn run(args: &CliArgs, finder: &FactorFinder) -> i32 {
    match &args.command {
        Command::Single { n, initial_base } => {
            let result = finder.factor(*n, *initial_base, args.use_quantum);
            if print_result(*n, &result, args.json) { 0 } else { 1 }
        }
        Command::Batch { targets } => {
            let jobs: Vec<FactorJob> = targets
                .iter()
                .map(|&n| FactorJob::new(n, DEFAULT_INITIAL_BASE))
                .collect();
            let results = factor_batch(finder, &jobs, args.use_quantum);

            let mut all_ok = true;
            for (job, result) in jobs.iter().zip(results.iter()) {
                all_ok &= print_result(job.n, result, args.json);
            }
            info!("Batch finished: {} targets", jobs.len());
            if all_ok { 0 } else { 1 }
        }
    }
}

fn print_result(n: u64, result: &Result<FactorReport>, json: bool) -> bool {
    match result {
        Ok(report) if json => match report.to_json() {
            Ok(text) => {
                println!("{}", text);
                true
            }
            Err(e) => {
                error!("Could not serialize report for {}: {}", n, e);
                false
            }
        },
        Ok(report) => {
            println!(
                "{} = {} ({} attempts, {:.3} ms)",
                n, report.factors, report.attempts.len(), report.elapsed_ms
            );
            true
        }
        Err(e) => {
            eprintln!("{}: {}", n, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_single_defaults() {
        let parsed = CliArgs::parse(&args(&["123"])).unwrap();
        assert_eq!(parsed.command, Command::Single { n: 123, initial_base: DEFAULT_INITIAL_BASE });
        assert!(!parsed.use_quantum);
        assert!(!parsed.json);
    }

    #[test]
    fn test_parse_single_with_options() {
        let parsed = CliArgs::parse(&args(&[
            "--formula", "reference", "123", "100", "--seed", "9", "--max-attempts", "0", "--json",
        ]))
        .unwrap();
        assert_eq!(parsed.command, Command::Single { n: 123, initial_base: 100 });
        assert_eq!(parsed.formula, Some(FactorTestFormula::Reference));
        assert_eq!(parsed.seed, Some(9));
        assert_eq!(parsed.max_attempts, Some(0));
        assert!(parsed.json);

        let mut config = ShorConfig::default();
        parsed.apply_to(&mut config);
        assert_eq!(config.formula, FactorTestFormula::Reference);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.attempt_budget(), None);
        assert!(config.reject_primes);
    }

    #[test]
    fn test_parse_batch() {
        let parsed = CliArgs::parse(&args(&["batch", "15", "21", "--allow-primes"])).unwrap();
        assert_eq!(parsed.command, Command::Batch { targets: vec![15, 21] });
        assert!(parsed.allow_primes);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::parse(&args(&[])).is_err());
        assert!(CliArgs::parse(&args(&["batch"])).is_err());
        assert!(CliArgs::parse(&args(&["abc"])).is_err());
        assert!(CliArgs::parse(&args(&["15", "2", "3"])).is_err());
        assert!(CliArgs::parse(&args(&["15", "--seed"])).is_err());
        assert!(CliArgs::parse(&args(&["15", "--formula", "magic"])).is_err());
        assert!(CliArgs::parse(&args(&["15", "--verbose"])).is_err());
    }

    #[test]
    fn test_run_exit_codes() {
        let finder = FactorFinder::new(ShorConfig { seed: Some(1), ..ShorConfig::default() });
        let ok = CliArgs::parse(&args(&["15"])).unwrap();
        assert_eq!(run(&ok, &finder), 0);
        let prime = CliArgs::parse(&args(&["13"])).unwrap();
        assert_eq!(run(&prime, &finder), 1);
    }
}
