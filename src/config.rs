//! Runtime configuration: defaults, then environment, then command line.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::term::MAX_CELL_WIDTH;

pub const ENV_SEED: &str = "FLOOD_TETRIS_SEED";
pub const ENV_LOG_PATH: &str = "FLOOD_TETRIS_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "FLOOD_TETRIS_LOG_LEVEL";

pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Falling blocks in the terminal; connected same-color regions clear.
#[derive(Parser, Debug, Default, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for the piece sequence (random when omitted).
    #[arg(long)]
    pub seed: Option<u32>,

    /// Append logs to this file. Nothing is logged without it.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Terminal columns per board cell (1 to 8).
    #[arg(long, value_name = "COLS")]
    pub cell_width: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_level: DEFAULT_LOG_LEVEL,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Config {
    /// Parse process arguments and environment.
    pub fn load() -> Result<Self> {
        Self::resolve(&Cli::parse(), |key| std::env::var(key).ok())
    }

    /// Layer `env` and then `cli` over the defaults.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        let env = |key: &str| {
            env(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        if let Some(s) = env(ENV_SEED) {
            config.seed = Some(
                s.parse()
                    .with_context(|| format!("{ENV_SEED}={s:?} is not a valid seed"))?,
            );
        }
        if let Some(s) = env(ENV_LOG_PATH) {
            config.log_path = Some(PathBuf::from(s));
        }
        if let Some(s) = env(ENV_LOG_LEVEL) {
            config.log_level = parse_level(&s)?;
        }

        if let Some(seed) = cli.seed {
            config.seed = Some(seed);
        }
        if let Some(path) = &cli.log_file {
            config.log_path = Some(path.clone());
        }
        if let Some(level) = &cli.log_level {
            config.log_level = parse_level(level)?;
        }
        if let Some(w) = cli.cell_width {
            config.cell_width = w;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            bail!(
                "cell width must be between 1 and {MAX_CELL_WIDTH}, got {}",
                self.cell_width
            );
        }
        Ok(())
    }

    /// Configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_level(s: &str) -> Result<LevelFilter> {
    s.parse()
        .map_err(|_| anyhow!("unknown log level {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults() {
        let c = Config::resolve(&Cli::default(), no_env).unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.cell_width, 2);
        assert_eq!(c.log_level, LevelFilter::Info);
    }

    #[test]
    fn env_overrides_defaults() {
        let env = |key: &str| match key {
            ENV_SEED => Some("42".to_string()),
            ENV_LOG_PATH => Some(" /tmp/flood.log ".to_string()),
            ENV_LOG_LEVEL => Some("DEBUG".to_string()),
            _ => None,
        };
        let c = Config::resolve(&Cli::default(), env).unwrap();
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/flood.log")));
        assert_eq!(c.log_level, LevelFilter::Debug);
    }

    #[test]
    fn cli_overrides_env() {
        let env = |key: &str| (key == ENV_SEED).then(|| "42".to_string());
        let cli = Cli::parse_from(["flood-tetris", "--seed", "7", "--cell-width", "3"]);
        let c = Config::resolve(&cli, env).unwrap();
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.cell_width, 3);
    }

    #[test]
    fn blank_env_is_ignored() {
        let env = |_: &str| Some("  ".to_string());
        let c = Config::resolve(&Cli::default(), env).unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn invalid_values_are_errors() {
        let bad_seed = |key: &str| (key == ENV_SEED).then(|| "nope".to_string());
        assert!(Config::resolve(&Cli::default(), bad_seed).is_err());

        let cli = Cli::parse_from(["flood-tetris", "--log-level", "loud"]);
        assert!(Config::resolve(&cli, no_env).is_err());

        let cli = Cli::parse_from(["flood-tetris", "--cell-width", "0"]);
        assert!(Config::resolve(&cli, no_env).is_err());
    }

    #[test]
    fn cell_width_is_bounded() {
        let huge = Cli {
            cell_width: Some(7000),
            ..Cli::default()
        };
        let err = Config::resolve(&huge, no_env).unwrap_err();
        assert!(err.to_string().contains("7000"));

        let widest = Cli {
            cell_width: Some(MAX_CELL_WIDTH),
            ..Cli::default()
        };
        assert_eq!(
            Config::resolve(&widest, no_env).unwrap().cell_width,
            MAX_CELL_WIDTH
        );

        let past = Cli::parse_from(["flood-tetris", "--cell-width", "9"]);
        assert!(Config::resolve(&past, no_env).is_err());
    }

    #[test]
    fn fixed_seed_is_used_verbatim() {
        let c = Config {
            seed: Some(9),
            ..Config::default()
        };
        assert_eq!(c.seed_or_random(), 9);
    }
}
