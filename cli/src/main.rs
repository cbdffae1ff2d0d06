//! jackhouse CLI - recite "The House That Jack Built".
//!
//! # Resolution
//!
//! Every setting has a single winner, checked in this order:
//!
//! ```text
//! policy: --policy  >  JACKHOUSE_POLICY  >  [recital].policy  >  default
//! verse:  --recite | --line N  >  [recital].mode / line  >  full line
//! seed:   --seed  >  [recital].seed  >  fresh
//! ```
//!
//! Recital text goes to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jackhouse_config::{HouseConfig, POLICY_ENV_VAR, RecitalMode, policy_from_env};
use jackhouse_core::{Entropy, HouseError, Performance, Policy, Verse, showcase};

#[derive(Debug, Parser)]
#[command(name = "jackhouse")]
#[command(about = "Recite \"The House That Jack Built\" under a chosen phrase ordering")]
struct Cli {
    /// Ordering policy: default, random, or mostly_random
    #[arg(long, short)]
    policy: Option<Policy>,
    /// Print every line of the recital, shortest first
    #[arg(long, conflicts_with = "line")]
    recite: bool,
    /// Print a single line (1-based)
    #[arg(long, short)]
    line: Option<usize>,
    /// Seed for the shuffling policies; repeats a previous ordering
    #[arg(long)]
    seed: Option<u64>,
    /// Print the chosen verse once for every policy
    #[arg(long, conflicts_with = "policy")]
    every_policy: bool,
    /// Store --policy in the config file
    #[arg(long, requires = "policy")]
    save_policy: bool,
    /// Config file to read instead of ~/.jackhouse/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log at debug level to stderr
    #[arg(long, short)]
    verbose: bool,
}

/// Fully resolved invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Request {
    policy: Policy,
    verse: Verse,
    seed: Option<u64>,
    every_policy: bool,
}

impl Request {
    fn resolve(cli: &Cli, config: Option<&HouseConfig>, env_policy: Option<Policy>) -> Self {
        let policy = cli
            .policy
            .or(env_policy)
            .or_else(|| config.and_then(HouseConfig::policy))
            .unwrap_or_default();

        let verse = if cli.recite {
            Verse::Recital
        } else if let Some(number) = cli.line {
            Verse::Line(number)
        } else {
            match config.map(HouseConfig::mode).unwrap_or_default() {
                RecitalMode::Recital => Verse::Recital,
                RecitalMode::Line => config
                    .and_then(HouseConfig::line)
                    .map_or(Verse::Full, Verse::Line),
            }
        };

        Self {
            policy,
            verse,
            seed: cli.seed.or_else(|| config.and_then(HouseConfig::seed)),
            every_policy: cli.every_policy,
        }
    }

    fn perform(&self, entropy: &mut Entropy) -> Result<String, HouseError> {
        if self.every_policy {
            return showcase(self.verse, entropy);
        }
        Ok(Performance::new(self.policy, entropy).render(self.verse)?)
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout carries the recital only.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().or_else(HouseConfig::path);
    let config = match &config_path {
        Some(path) => HouseConfig::load_from(path).context("Failed to load config")?,
        None => None,
    };
    let env_policy = policy_from_env().with_context(|| format!("Invalid {POLICY_ENV_VAR}"))?;

    let request = Request::resolve(&cli, config.as_ref(), env_policy);
    tracing::debug!(?request, "Resolved request");

    if cli.save_policy {
        let path = config_path.context("Could not determine config path")?;
        HouseConfig::persist_policy(&path, request.policy)?;
    }

    let mut entropy = request.seed.map_or_else(Entropy::fresh, Entropy::from_seed);
    let text = request.perform(&mut entropy)?;
    print!("{text}");
    Ok(())
}
