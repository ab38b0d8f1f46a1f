//! Per-row column selection.

use std::collections::HashSet;

use crate::error::SelectionError;
use crate::{ColumnIndex, RowId};

/// The selected columns of a single row.
///
/// A `TableSelection` only keeps a `RowSelection` while at least one column is
/// selected; the record is dropped as soon as its last column is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelection {
    row_id: RowId,
    columns: HashSet<ColumnIndex>,
}

impl RowSelection {
    /// Create an empty selection for a row.
    pub fn new(row_id: RowId) -> Self {
        Self {
            row_id,
            columns: HashSet::new(),
        }
    }

    /// Create a row selection with the given columns already selected.
    ///
    /// Fails with [`SelectionError::EmptyRow`] if `columns` yields nothing.
    pub fn with_columns(
        row_id: RowId,
        columns: impl IntoIterator<Item = ColumnIndex>,
    ) -> Result<Self, SelectionError> {
        let columns: HashSet<_> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(SelectionError::EmptyRow { row_id });
        }
        Ok(Self { row_id, columns })
    }

    /// Get the row identifier.
    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    /// Get the selected columns (unordered).
    pub fn columns(&self) -> &HashSet<ColumnIndex> {
        &self.columns
    }

    /// Get the selected columns in ascending order.
    pub fn sorted_columns(&self) -> Vec<ColumnIndex> {
        let mut columns: Vec<_> = self.columns.iter().copied().collect();
        columns.sort_unstable();
        columns
    }

    /// Get the number of selected columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no column is selected.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check if a column is selected.
    pub fn is_selected(&self, column: ColumnIndex) -> bool {
        self.columns.contains(&column)
    }

    /// Check if every given column is selected.
    ///
    /// An empty slice is vacuously selected.
    pub fn is_range_selected(&self, columns: &[ColumnIndex]) -> bool {
        columns.iter().all(|column| self.columns.contains(column))
    }

    /// Select the given columns. Already selected columns are left as is.
    pub fn add(&mut self, columns: &[ColumnIndex]) {
        self.columns.extend(columns.iter().copied());
    }

    /// Unselect the given columns. Columns that are not selected are ignored.
    pub fn remove(&mut self, columns: &[ColumnIndex]) {
        for column in columns {
            self.columns.remove(column);
        }
    }
}
