//! Validated machine geometry: grid size, bettable line bounds and the symbol
//! catalog. A [`Machine`] can only be constructed when every precondition of
//! the grid generator holds, so spinning never fails.

use log::debug;
use rand::Rng;

use super::catalog::SymbolCatalog;
use super::errors::ConfigError;
use super::grid::{self, Grid};

pub const REFERENCE_ROWS: usize = 3;
pub const REFERENCE_COLUMNS: usize = 3;
pub const REFERENCE_MIN_LINES: usize = 1;
pub const REFERENCE_MAX_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Machine {
    catalog: SymbolCatalog,
    rows: usize,
    columns: usize,
    min_lines: usize,
    max_lines: usize,
}

impl Machine {
    pub fn new(
        catalog: SymbolCatalog,
        rows: usize,
        columns: usize,
        min_lines: usize,
        max_lines: usize,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::EmptyGrid { rows, columns });
        }
        let pool = catalog.pool_size();
        if rows > pool {
            return Err(ConfigError::PoolTooSmall { rows, pool });
        }
        if min_lines == 0 || min_lines > max_lines || max_lines > rows {
            return Err(ConfigError::InvalidLineBounds {
                min: min_lines,
                max: max_lines,
                rows,
            });
        }
        debug!(
            "machine ready: {}x{} grid, {} symbols, pool {}, lines {}..={}",
            rows,
            columns,
            catalog.len(),
            pool,
            min_lines,
            max_lines
        );
        Ok(Machine {
            catalog,
            rows,
            columns,
            min_lines,
            max_lines,
        })
    }

    /// 3x3 grid, 1..=3 lines, reference catalog.
    pub fn reference() -> Self {
        Machine {
            catalog: SymbolCatalog::reference(),
            rows: REFERENCE_ROWS,
            columns: REFERENCE_COLUMNS,
            min_lines: REFERENCE_MIN_LINES,
            max_lines: REFERENCE_MAX_LINES,
        }
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn min_lines(&self) -> usize {
        self.min_lines
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Spin a fresh grid.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        grid::generate(&self.catalog, self.rows, self.columns, rng)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::reference()
    }
}
