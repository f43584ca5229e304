use thiserror::Error;

/// Errors raised while building the machine from configuration. All of them are
/// fatal at startup; nothing in a running session produces one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A symbol has a pool count but no multiplier.
    #[error("symbol {0:?} has a pool count but no payout multiplier")]
    MissingMultiplier(String),

    /// A symbol has a multiplier but no pool count.
    #[error("symbol {0:?} has a payout multiplier but no pool count")]
    MissingPoolCount(String),

    /// No symbols configured at all.
    #[error("symbol catalog is empty")]
    EmptyCatalog,

    /// Pool counts must be at least one.
    #[error("symbol {0:?} has a pool count of zero")]
    ZeroPoolCount(String),

    /// Multipliers must be finite and strictly positive.
    #[error("symbol {symbol:?} has invalid multiplier {value}")]
    InvalidMultiplier { symbol: String, value: f64 },

    /// Grid needs at least one row and one column.
    #[error("grid must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: usize, columns: usize },

    /// A column draws `rows` symbols without replacement, so the pool must hold at least that many.
    #[error("grid has {rows} rows but a column pool only holds {pool} symbols")]
    PoolTooSmall { rows: usize, pool: usize },

    /// Bettable line bounds must satisfy 1 <= min <= max <= rows.
    #[error("invalid line bounds {min}..={max} for a grid with {rows} rows")]
    InvalidLineBounds { min: usize, max: usize, rows: usize },

    /// Config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::Config`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
