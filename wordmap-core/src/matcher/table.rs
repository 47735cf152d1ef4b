//! Last-occurrence tables for the bad-character rule
//!
//! Row `i` of a table answers, for every symbol `c`, the highest index
//! `j <= i` with `pattern[j] == c`. Row `i` equals row `i - 1` except for
//! the single cell of `pattern[i]`, which holds `i`.
//!
//! Two layouts are provided:
//! - [`DenseTable`] stores every row (`m * E` cells) and answers in O(1).
//! - [`SparseTable`] stores one sorted position list per symbol that occurs
//!   in the pattern and answers with a binary search. It is built in one
//!   pass and its size does not depend on the alphabet.

use super::alphabet::{Alphabet, Symbol};
use super::error::{MatchError, MatchResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Sentinel stored in dense cells for symbols absent from the prefix
pub const NOT_PRESENT: isize = -1;

/// Largest `m * E` for which [`TableKind::Auto`] picks the dense layout
pub const DENSE_CELL_BUDGET: usize = 1 << 16;

/// Largest `m * E` a dense table may be built with
pub const MAX_DENSE_CELLS: usize = 1 << 28;

/// Query interface shared by the table layouts
pub trait LastOccurrence {
    /// Highest index `<= row` at which `symbol` appears in the pattern
    fn last_at_or_before(&self, row: usize, symbol: usize) -> Option<usize>;

    /// Number of rows, equal to the pattern length
    fn rows(&self) -> usize;
}

/// Full row-per-position table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTable {
    cells: Vec<isize>,
    width: usize,
    rows: usize,
}

impl DenseTable {
    /// Build the table row by row, copying the previous row each time
    pub fn build<S: Symbol>(pattern: &[S], alphabet: Alphabet) -> MatchResult<Self> {
        alphabet.validate_pattern(pattern)?;

        let width = alphabet.size();
        let len = pattern
            .len()
            .checked_mul(width)
            .filter(|&cells| cells <= MAX_DENSE_CELLS)
            .ok_or(MatchError::TableTooLarge {
                rows: pattern.len(),
                width,
            })?;
        let mut cells = vec![NOT_PRESENT; len];

        for (i, symbol) in pattern.iter().enumerate() {
            if i > 0 {
                let (previous, current) = cells.split_at_mut(i * width);
                current[..width].copy_from_slice(&previous[(i - 1) * width..]);
            }
            cells[i * width + symbol.index()] = i as isize;
        }

        Ok(Self {
            cells,
            width,
            rows: pattern.len(),
        })
    }

    /// Raw row `i`, with [`NOT_PRESENT`] for absent symbols
    pub fn row(&self, i: usize) -> &[isize] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }
}

impl LastOccurrence for DenseTable {
    #[inline]
    fn last_at_or_before(&self, row: usize, symbol: usize) -> Option<usize> {
        if symbol >= self.width {
            return None;
        }
        let cell = self.cells[row * self.width + symbol];
        (cell != NOT_PRESENT).then_some(cell as usize)
    }

    fn rows(&self) -> usize {
        self.rows
    }
}

/// Per-symbol occurrence lists, built in a single left-to-right pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseTable {
    occurrences: HashMap<usize, Vec<usize>>,
    rows: usize,
}

impl SparseTable {
    /// Build the occurrence lists for `pattern`
    pub fn build<S: Symbol>(pattern: &[S], alphabet: Alphabet) -> MatchResult<Self> {
        alphabet.validate_pattern(pattern)?;

        let mut occurrences: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, symbol) in pattern.iter().enumerate() {
            occurrences.entry(symbol.index()).or_default().push(i);
        }

        Ok(Self {
            occurrences,
            rows: pattern.len(),
        })
    }

    /// Number of distinct symbols in the pattern
    pub fn distinct_symbols(&self) -> usize {
        self.occurrences.len()
    }
}

impl LastOccurrence for SparseTable {
    fn last_at_or_before(&self, row: usize, symbol: usize) -> Option<usize> {
        let positions = self.occurrences.get(&symbol)?;
        let after = positions.partition_point(|&p| p <= row);
        after.checked_sub(1).map(|idx| positions[idx])
    }

    fn rows(&self) -> usize {
        self.rows
    }
}

/// Which table layout to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Dense when it fits [`DENSE_CELL_BUDGET`], sparse otherwise
    #[default]
    Auto,
    /// Always build [`DenseTable`]
    Dense,
    /// Always build [`SparseTable`]
    Sparse,
}

impl TableKind {
    /// Layout chosen for a pattern of `len` symbols over `alphabet`
    pub fn resolve(self, len: usize, alphabet: Alphabet) -> TableKind {
        match self {
            TableKind::Auto => {
                let dense = len
                    .checked_mul(alphabet.size())
                    .is_some_and(|cells| cells <= DENSE_CELL_BUDGET);
                if dense {
                    TableKind::Dense
                } else {
                    TableKind::Sparse
                }
            }
            other => other,
        }
    }

    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Auto => "auto",
            TableKind::Dense => "dense",
            TableKind::Sparse => "sparse",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(TableKind::Auto),
            "dense" => Ok(TableKind::Dense),
            "sparse" => Ok(TableKind::Sparse),
            other => Err(format!("unknown table kind: {other}")),
        }
    }
}

/// A built table of either layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    /// Row-per-position layout
    Dense(DenseTable),
    /// Occurrence-list layout
    Sparse(SparseTable),
}

impl Table {
    /// Build the layout `kind` resolves to
    pub fn build<S: Symbol>(pattern: &[S], alphabet: Alphabet, kind: TableKind) -> MatchResult<Self> {
        match kind.resolve(pattern.len(), alphabet) {
            TableKind::Sparse => SparseTable::build(pattern, alphabet).map(Table::Sparse),
            _ => DenseTable::build(pattern, alphabet).map(Table::Dense),
        }
    }

    /// Layout actually built
    pub fn kind(&self) -> TableKind {
        match self {
            Table::Dense(_) => TableKind::Dense,
            Table::Sparse(_) => TableKind::Sparse,
        }
    }
}

impl LastOccurrence for Table {
    #[inline]
    fn last_at_or_before(&self, row: usize, symbol: usize) -> Option<usize> {
        match self {
            Table::Dense(table) => table.last_at_or_before(row, symbol),
            Table::Sparse(table) => table.last_at_or_before(row, symbol),
        }
    }

    fn rows(&self) -> usize {
        match self {
            Table::Dense(table) => table.rows(),
            Table::Sparse(table) => table.rows(),
        }
    }
}

/// Build the dense last-occurrence table with the default alphabet for `S`
pub fn build_last_occurrence_table<S: Symbol>(pattern: &[S]) -> MatchResult<DenseTable> {
    DenseTable::build(pattern, Alphabet::for_symbol::<S>())
}
