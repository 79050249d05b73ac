use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_COLS, DEFAULT_LIVES, DEFAULT_MINES, DEFAULT_ROWS};

pub const USAGE: &str = "\
usage: minewalk [--rows N] [--cols N] [--mines N] [--lives N] [--seed N] [--no-color]

  --rows N     board height (default 8)
  --cols N     board width (default 8)
  --mines N    hazards to place (default 5)
  --lives N    lives to start with (default 3)
  --seed N     fix the hazard layout
  --no-color   plain text output

Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
    pub lives: u32,
    /// `None` seeds the board from OS entropy
    pub seed: Option<u64>,
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mines: DEFAULT_MINES,
            lives: DEFAULT_LIVES,
            seed: None,
            color: true,
        }
    }
}

/// Parse command-line arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested. Range checks (zero rows, more
/// mines than cells, ...) are left to the game constructors.
pub fn parse_args(args: &[String]) -> Result<Option<GameConfig>> {
    let mut config = GameConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                config.rows = parse_value(args, i, "--rows")?;
            }
            "--cols" => {
                i += 1;
                config.cols = parse_value(args, i, "--cols")?;
            }
            "--mines" => {
                i += 1;
                config.mines = parse_value(args, i, "--mines")?;
            }
            "--lives" => {
                i += 1;
                config.lives = parse_value(args, i, "--lives")?;
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_value(args, i, "--seed")?);
            }
            "--no-color" => config.color = false,
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = parse_args(&[]).unwrap().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!((config.rows, config.cols, config.mines, config.lives), (8, 8, 5, 3));
    }

    #[test]
    fn test_all_flags() {
        let config = parse_args(&args(&[
            "--rows", "4", "--cols", "6", "--mines", "2", "--lives", "1", "--seed", "99",
            "--no-color",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(
            config,
            GameConfig {
                rows: 4,
                cols: 6,
                mines: 2,
                lives: 1,
                seed: Some(99),
                color: false,
            }
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(&args(&["--rows"])).is_err());
        assert!(parse_args(&args(&["--rows", "-1"])).is_err());
        assert!(parse_args(&args(&["--mines", "many"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }
}
