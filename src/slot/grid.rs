//! Grid generation and rendering.
//!
//! Each column ("reel") draws `rows` symbols without replacement from its own
//! freshly built pool: pick a uniform index into what is left, take that
//! symbol, remove it. Columns never share a pool.

use rand::Rng;

use super::catalog::{Symbol, SymbolCatalog};

/// One horizontal pay-line, one symbol per column in column order.
pub type Line = Vec<Symbol>;

/// A spun grid, stored column-major (one `Vec` per reel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    reels: Vec<Vec<Symbol>>,
    rows: usize,
}

impl Grid {
    /// Build a grid from explicit reels. Every reel must have the same length.
    pub fn from_reels(reels: Vec<Vec<Symbol>>) -> Self {
        let rows = reels.first().map_or(0, Vec::len);
        debug_assert!(reels.iter().all(|r| r.len() == rows));
        Grid { reels, rows }
    }

    pub fn reels(&self) -> &[Vec<Symbol>] {
        &self.reels
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.reels.len()
    }

    /// Transpose into row-major lines; line `i` is row `i`.
    pub fn lines(&self) -> Vec<Line> {
        (0..self.rows)
            .map(|row| self.reels.iter().map(|reel| reel[row]).collect())
            .collect()
    }
}

/// Draw a `rows` x `columns` grid from `catalog`.
///
/// Precondition: `rows <= catalog.pool_size()`. [`super::machine::Machine`]
/// enforces it at construction time.
pub fn generate<R: Rng + ?Sized>(
    catalog: &SymbolCatalog,
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Grid {
    debug_assert!(rows <= catalog.pool_size());
    let mut reels = Vec::with_capacity(columns);
    for _ in 0..columns {
        let mut pool = catalog.draw_pool();
        let mut reel = Vec::with_capacity(rows);
        for _ in 0..rows {
            let idx = rng.gen_range(0..pool.len());
            reel.push(pool.remove(idx));
        }
        reels.push(reel);
    }
    Grid { reels, rows }
}

/// Render a line as `A | B | C`.
pub fn render_line(line: &[Symbol], catalog: &SymbolCatalog) -> String {
    line.iter()
        .map(|&s| catalog.name(s))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render every line, one per row.
pub fn render_lines(lines: &[Line], catalog: &SymbolCatalog) -> Vec<String> {
    lines.iter().map(|l| render_line(l, catalog)).collect()
}
