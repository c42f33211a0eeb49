//! Remembered sort direction per column.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction to apply on the next click of each column.
///
/// Columns start ascending the first time they are seen. Each column toggles
/// independently; sorting one column never touches another's entry.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    next: HashMap<usize, SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a column, starting it ascending if it is new.
    pub fn register(&mut self, column: usize) {
        self.next.entry(column).or_default();
    }

    /// Direction the next click on `column` will apply.
    pub fn peek(&self, column: usize) -> SortDirection {
        self.next.get(&column).copied().unwrap_or_default()
    }

    /// Take the direction for a click on `column` and flip it for the next one.
    pub fn advance(&mut self, column: usize) -> SortDirection {
        let entry = self.next.entry(column).or_default();
        let current = *entry;
        *entry = current.flipped();
        current
    }
}
