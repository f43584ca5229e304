//! # Configuration
//!
//! Optional TOML configuration for the machine and for logging. Every field
//! has a default equal to the reference machine, so the game runs with no
//! file at all and a partial file overrides only what it names.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [machine]
//! rows = 3
//! columns = 3
//! min_lines = 1
//! max_lines = 3
//!
//! [machine.symbol_counts]
//! A = 2
//! B = 4
//! C = 6
//! D = 8
//!
//! [machine.symbol_values]
//! A = 5.0
//! B = 4.0
//! C = 3.0
//! D = 2.0
//!
//! [logging]
//! level = "warn"
//! file = "reelbet.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reelbet::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("reelbet.toml")?;
//!     let machine = config.build_machine()?;
//!     println!("{} rows x {} columns", machine.rows(), machine.columns());
//!     Ok(())
//! }
//! ```
//!
//! Validation happens in [`Config::build_machine`]; a config that parses but
//! describes an impossible machine (tables that disagree, more rows than a
//! column pool can fill, line bounds outside the grid) is a startup error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::slot::machine::{
    REFERENCE_COLUMNS, REFERENCE_MAX_LINES, REFERENCE_MIN_LINES, REFERENCE_ROWS,
};
use crate::slot::{ConfigError, Machine, SymbolCatalog};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub machine: MachineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_min_lines")]
    pub min_lines: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    /// Copies of each symbol in one column's draw pool
    #[serde(default = "default_symbol_counts")]
    pub symbol_counts: BTreeMap<String, u32>,
    /// Payout multiplier per winning line, keyed like `symbol_counts`
    #[serde(default = "default_symbol_values")]
    pub symbol_values: BTreeMap<String, f64>,
}

fn default_rows() -> usize {
    REFERENCE_ROWS
}

fn default_columns() -> usize {
    REFERENCE_COLUMNS
}

fn default_min_lines() -> usize {
    REFERENCE_MIN_LINES
}

fn default_max_lines() -> usize {
    REFERENCE_MAX_LINES
}

fn default_symbol_counts() -> BTreeMap<String, u32> {
    let cat = SymbolCatalog::reference();
    cat.symbols()
        .map(|s| (cat.name(s).to_string(), cat.pool_count(s)))
        .collect()
}

fn default_symbol_values() -> BTreeMap<String, f64> {
    let cat = SymbolCatalog::reference();
    cat.symbols()
        .map(|s| (cat.name(s).to_string(), cat.multiplier(s)))
        .collect()
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rows: default_rows(),
            columns: default_columns(),
            min_lines: default_min_lines(),
            max_lines: default_max_lines(),
            symbol_counts: default_symbol_counts(),
            symbol_values: default_symbol_values(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error/warn/info/debug/trace. `-v` on the command line wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Append log records to this file as well
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Parsed level filter; unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.as_deref() {
            Some(name) => name.parse().unwrap_or_else(|_| {
                eprintln!("Invalid log level '{}', defaulting to warn", name);
                log::LevelFilter::Warn
            }),
            None => log::LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    fn from_toml(path: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Validate the machine section and build the [`Machine`] a session plays on.
    pub fn build_machine(&self) -> Result<Machine, ConfigError> {
        let m = &self.machine;
        let catalog = SymbolCatalog::from_tables(&m.symbol_counts, &m.symbol_values)?;
        Machine::new(catalog, m.rows, m.columns, m.min_lines, m.max_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_builds_reference_machine() {
        let machine = Config::default().build_machine().unwrap();
        assert_eq!(machine, Machine::reference());
    }

    #[test]
    fn empty_file_means_defaults() {
        let cfg = Config::from_toml("empty.toml", "").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let cfg = Config::from_toml(
            "partial.toml",
            "[machine]\ncolumns = 5\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(cfg.machine.columns, 5);
        assert_eq!(cfg.machine.rows, 3);
        assert_eq!(cfg.machine.symbol_counts.len(), 4);
        assert_eq!(cfg.logging.level_filter(), log::LevelFilter::Debug);
        let machine = cfg.build_machine().unwrap();
        assert_eq!(machine.columns(), 5);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back = Config::from_toml("rt.toml", &text).unwrap();
        assert_eq!(back, Config::default());
    }

    #[test]
    fn mismatched_tables_fail_at_build() {
        let cfg = Config::from_toml(
            "bad.toml",
            "[machine.symbol_counts]\nA = 2\nB = 3\n\n[machine.symbol_values]\nA = 5.0\n",
        )
        .unwrap();
        assert!(matches!(
            cfg.build_machine(),
            Err(ConfigError::MissingMultiplier(s)) if s == "B"
        ));
    }

    #[test]
    fn too_many_rows_fail_at_build() {
        let cfg = Config::from_toml(
            "rows.toml",
            "[machine]\nrows = 4\nmax_lines = 4\n\n[machine.symbol_counts]\nA = 1\nB = 2\n\n[machine.symbol_values]\nA = 5.0\nB = 2.0\n",
        )
        .unwrap();
        assert!(matches!(
            cfg.build_machine(),
            Err(ConfigError::PoolTooSmall { rows: 4, pool: 3 })
        ));
    }

    #[test]
    fn load_reads_file_and_reports_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[machine]\nmax_lines = 2").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.machine.max_lines, 2);

        let missing = Config::load("/nonexistent/reelbet.toml");
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[machine\nrows = ").unwrap();
        let broken_path = broken.path().to_str().unwrap().to_string();
        assert!(matches!(Config::load(&broken_path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_log_level_falls_back_to_warn() {
        let cfg = LoggingConfig {
            level: Some("loud".to_string()),
            file: None,
        };
        assert_eq!(cfg.level_filter(), log::LevelFilter::Warn);
        assert_eq!(LoggingConfig::default().level_filter(), log::LevelFilter::Warn);
    }
}
