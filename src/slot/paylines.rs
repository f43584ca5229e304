//! Pay-line evaluation. Pure functions of the lines, the bet and the catalog.

use super::catalog::{Symbol, SymbolCatalog};
use super::grid::Line;

/// A winning line and what it paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineWin {
    pub line: usize,
    pub symbol: Symbol,
    pub payout: f64,
}

/// The symbol a line pays on, if every entry matches the first one.
pub fn winning_symbol(line: &[Symbol]) -> Option<Symbol> {
    let (&first, rest) = line.split_first()?;
    rest.iter().all(|&s| s == first).then_some(first)
}

/// Per-line breakdown for the first `line_count` lines. Lines past
/// `line_count` are not looked at.
pub fn line_wins(
    lines: &[Line],
    bet: f64,
    line_count: usize,
    catalog: &SymbolCatalog,
) -> Vec<LineWin> {
    lines
        .iter()
        .take(line_count)
        .enumerate()
        .filter_map(|(idx, line)| {
            winning_symbol(line).map(|symbol| LineWin {
                line: idx,
                symbol,
                payout: bet * catalog.multiplier(symbol),
            })
        })
        .collect()
}

/// Sum of the payouts; no wins is `+0.0`.
pub fn total(wins: &[LineWin]) -> f64 {
    wins.iter().fold(0.0, |acc, w| acc + w.payout)
}

/// Total winnings: `bet * multiplier` for each all-equal line among the first
/// `line_count`. Zero when nothing matches.
pub fn winnings(lines: &[Line], bet: f64, line_count: usize, catalog: &SymbolCatalog) -> f64 {
    total(&line_wins(lines, bet, line_count, catalog))
}
