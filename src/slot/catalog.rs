//! Symbol catalog: which symbols exist, how many copies of each sit in one
//! column's draw pool, and what each pays per winning line.
//!
//! The catalog is built once from two tables (pool counts and multipliers) and
//! is immutable afterwards. Both tables must name exactly the same symbols.

use std::collections::BTreeMap;

use super::errors::ConfigError;

/// Handle to a symbol in a [`SymbolCatalog`]. Only meaningful together with the
/// catalog that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(usize);

impl Symbol {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SymbolSpec {
    name: String,
    pool_count: u32,
    multiplier: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCatalog {
    specs: Vec<SymbolSpec>,
}

impl SymbolCatalog {
    /// Build a catalog from a pool-count table and a multiplier table.
    ///
    /// Symbols are ordered by name. Fails when the tables disagree on which
    /// symbols exist, when a pool count is zero, or when a multiplier is not a
    /// finite positive number.
    pub fn from_tables(
        counts: &BTreeMap<String, u32>,
        values: &BTreeMap<String, f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = values.keys().find(|name| !counts.contains_key(*name)) {
            return Err(ConfigError::MissingPoolCount(name.clone()));
        }
        let mut specs = Vec::with_capacity(counts.len());
        for (name, &pool_count) in counts {
            let multiplier = *values
                .get(name)
                .ok_or_else(|| ConfigError::MissingMultiplier(name.clone()))?;
            if pool_count == 0 {
                return Err(ConfigError::ZeroPoolCount(name.clone()));
            }
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    symbol: name.clone(),
                    value: multiplier,
                });
            }
            specs.push(SymbolSpec {
                name: name.clone(),
                pool_count,
                multiplier,
            });
        }
        if specs.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(SymbolCatalog { specs })
    }

    /// Four symbols, rarer pays more: A 2/x5, B 4/x4, C 6/x3, D 8/x2.
    pub fn reference() -> Self {
        let specs = [("A", 2, 5.0), ("B", 4, 4.0), ("C", 6, 3.0), ("D", 8, 2.0)]
            .into_iter()
            .map(|(name, pool_count, multiplier)| SymbolSpec {
                name: name.to_string(),
                pool_count,
                multiplier,
            })
            .collect();
        SymbolCatalog { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.specs.len()).map(Symbol)
    }

    /// Look a symbol up by its configured name.
    pub fn find(&self, name: &str) -> Option<Symbol> {
        self.specs.iter().position(|s| s.name == name).map(Symbol)
    }

    pub fn name(&self, symbol: Symbol) -> &str {
        &self.specs[symbol.0].name
    }

    pub fn pool_count(&self, symbol: Symbol) -> u32 {
        self.specs[symbol.0].pool_count
    }

    pub fn multiplier(&self, symbol: Symbol) -> f64 {
        self.specs[symbol.0].multiplier
    }

    /// Total number of entries in one column's draw pool.
    pub fn pool_size(&self) -> usize {
        self.specs.iter().map(|s| s.pool_count as usize).sum()
    }

    /// Fresh working pool for one column: `pool_count` copies of every symbol,
    /// in catalog order.
    pub fn draw_pool(&self) -> Vec<Symbol> {
        let mut pool = Vec::with_capacity(self.pool_size());
        for (idx, spec) in self.specs.iter().enumerate() {
            pool.extend(std::iter::repeat(Symbol(idx)).take(spec.pool_count as usize));
        }
        pool
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(
        counts: &[(&str, u32)],
        values: &[(&str, f64)],
    ) -> (BTreeMap<String, u32>, BTreeMap<String, f64>) {
        (
            counts.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        )
    }

    #[test]
    fn reference_catalog_values() {
        let cat = SymbolCatalog::reference();
        assert_eq!(cat.len(), 4);
        let expected = [("A", 2, 5.0), ("B", 4, 4.0), ("C", 6, 3.0), ("D", 8, 2.0)];
        for (name, count, mult) in expected {
            let sym = cat.find(name).expect("symbol present");
            assert_eq!(cat.name(sym), name);
            assert_eq!(cat.pool_count(sym), count);
            assert_eq!(cat.multiplier(sym), mult);
        }
        assert_eq!(cat.pool_size(), 20);
        assert!(cat.find("E").is_none());
    }

    #[test]
    fn from_tables_matches_reference() {
        let (counts, values) = tables(
            &[("A", 2), ("B", 4), ("C", 6), ("D", 8)],
            &[("A", 5.0), ("B", 4.0), ("C", 3.0), ("D", 2.0)],
        );
        let cat = SymbolCatalog::from_tables(&counts, &values).unwrap();
        assert_eq!(cat, SymbolCatalog::reference());
    }

    #[test]
    fn draw_pool_holds_pool_count_copies() {
        let cat = SymbolCatalog::reference();
        let pool = cat.draw_pool();
        assert_eq!(pool.len(), 20);
        for sym in cat.symbols() {
            let n = pool.iter().filter(|&&s| s == sym).count();
            assert_eq!(n as u32, cat.pool_count(sym));
        }
    }

    #[test]
    fn tables_must_agree() {
        let (counts, values) = tables(&[("A", 2), ("B", 4)], &[("A", 5.0)]);
        assert!(matches!(
            SymbolCatalog::from_tables(&counts, &values),
            Err(ConfigError::MissingMultiplier(s)) if s == "B"
        ));

        let (counts, values) = tables(&[("A", 2)], &[("A", 5.0), ("Z", 1.0)]);
        assert!(matches!(
            SymbolCatalog::from_tables(&counts, &values),
            Err(ConfigError::MissingPoolCount(s)) if s == "Z"
        ));
    }

    #[test]
    fn rejects_zero_counts_and_bad_multipliers() {
        let (counts, values) = tables(&[("A", 0)], &[("A", 5.0)]);
        assert!(matches!(
            SymbolCatalog::from_tables(&counts, &values),
            Err(ConfigError::ZeroPoolCount(_))
        ));

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let (counts, values) = tables(&[("A", 1)], &[("A", bad)]);
            assert!(matches!(
                SymbolCatalog::from_tables(&counts, &values),
                Err(ConfigError::InvalidMultiplier { .. })
            ));
        }

        let (counts, values) = tables(&[], &[]);
        assert!(matches!(
            SymbolCatalog::from_tables(&counts, &values),
            Err(ConfigError::EmptyCatalog)
        ));
    }
}
