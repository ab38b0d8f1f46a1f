//! Cell selection state for a table.
//!
//! Selection is tracked per row: each selected row owns a [`RowSelection`]
//! holding its selected columns. Rows with nothing selected are never stored,
//! so an absent row always means "not selected".

use std::collections::{BTreeSet, HashMap};

use crate::error::SelectionError;
use crate::row::RowSelection;
use crate::{ColumnIndex, RowId};

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed
    None,
    /// Every action replaces the previous selection; the multiple flag is ignored
    Single,
    /// Actions add to the selection when the multiple flag is set (Ctrl+click, Shift+range)
    #[default]
    Multiple,
}

/// Cell selection state for a table of rows and columns.
///
/// Cells are addressed by `(row_id, column)`. Both are opaque keys: negative or
/// out-of-range values are accepted and simply behave as any other cell.
#[derive(Debug, Clone, Default)]
pub struct TableSelection {
    /// Selected rows by ID. Every entry has at least one selected column.
    selected: HashMap<RowId, RowSelection>,
    mode: SelectionMode,
}

impl TableSelection {
    /// Create an empty selection in [`SelectionMode::Multiple`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty selection with the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            selected: HashMap::new(),
            mode,
        }
    }

    /// Rebuild a selection from row records, e.g. after the grid reloads its data.
    ///
    /// Every record must have at least one column, and each row may appear only once.
    pub fn from_rows(rows: impl IntoIterator<Item = RowSelection>) -> Result<Self, SelectionError> {
        let mut selected = HashMap::new();
        for row in rows {
            let row_id = row.row_id();
            if row.is_empty() {
                return Err(SelectionError::EmptyRow { row_id });
            }
            if selected.insert(row_id, row).is_some() {
                return Err(SelectionError::DuplicateRow { row_id });
            }
        }
        log::trace!("[selection] restored {} rows", selected.len());
        Ok(Self {
            selected,
            mode: SelectionMode::default(),
        })
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Set the selection mode. Switching to [`SelectionMode::None`] clears the selection.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::None {
            self.clear();
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Get all selected rows, sorted by row ID.
    pub fn selected_rows(&self) -> Vec<&RowSelection> {
        let mut rows: Vec<_> = self.selected.values().collect();
        rows.sort_unstable_by_key(|row| row.row_id());
        rows
    }

    /// Get the selection of a single row.
    pub fn row(&self, row_id: RowId) -> Option<&RowSelection> {
        self.selected.get(&row_id)
    }

    /// Get the number of rows with at least one selected cell.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the total number of selected cells.
    pub fn cell_count(&self) -> usize {
        self.selected.values().map(RowSelection::len).sum()
    }

    /// Get every selected cell, ordered by row then column.
    pub fn selected_cells(&self) -> Vec<(RowId, ColumnIndex)> {
        self.selected_rows()
            .into_iter()
            .flat_map(|row| {
                let row_id = row.row_id();
                row.sorted_columns()
                    .into_iter()
                    .map(move |column| (row_id, column))
            })
            .collect()
    }

    /// Get every column that has a selected cell in any row, ascending.
    pub fn selected_columns(&self) -> Vec<ColumnIndex> {
        self.selected
            .values()
            .flat_map(|row| row.columns().iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check if a cell is selected.
    pub fn is_cell_selected(&self, row_id: RowId, column: ColumnIndex) -> bool {
        self.selected
            .get(&row_id)
            .is_some_and(|row| row.is_selected(column))
    }

    /// Check if every row between `start` and `end` (inclusive, either order)
    /// has all of `columns` selected.
    pub fn is_range_selected(&self, start: RowId, end: RowId, columns: &[ColumnIndex]) -> bool {
        let (first, last) = span(start, end);
        (first..=last).all(|row_id| {
            self.selected
                .get(&row_id)
                .is_some_and(|row| row.is_range_selected(columns))
        })
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Clear all selection.
    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            log::trace!("[selection] clearing {} rows", self.selected.len());
        }
        self.selected.clear();
    }

    /// Select a cell (click behavior).
    ///
    /// Without `multiple` the previous selection is cleared first. A cell that
    /// is still selected afterwards is toggled off unless `ignore_selected` is
    /// set, in which case it simply stays selected.
    pub fn select_cell(
        &mut self,
        row_id: RowId,
        column: ColumnIndex,
        multiple: bool,
        ignore_selected: bool,
    ) {
        if self.mode == SelectionMode::None {
            log::debug!("[selection] ignoring cell ({}, {}): selection disabled", row_id, column);
            return;
        }

        if !self.allows_multiple(multiple) {
            self.clear();
        }

        if !ignore_selected && self.is_cell_selected(row_id, column) {
            log::trace!("[selection] toggle off cell ({}, {})", row_id, column);
            self.unselect_columns(row_id, &[column]);
        } else {
            log::trace!("[selection] select cell ({}, {})", row_id, column);
            self.select_columns(row_id, &[column]);
        }
    }

    /// Toggle a rectangular range (Shift+click behavior).
    ///
    /// The rows between `start` and `end` (inclusive, either order) crossed
    /// with `columns` act as one unit: if the whole range is already selected
    /// it is unselected, otherwise every cell in it is selected. Without
    /// `multiple` the previous selection is cleared first.
    pub fn select_range(
        &mut self,
        start: RowId,
        end: RowId,
        columns: &[ColumnIndex],
        multiple: bool,
    ) {
        if self.mode == SelectionMode::None {
            log::debug!("[selection] ignoring range {}..={}: selection disabled", start, end);
            return;
        }

        let (first, last) = span(start, end);
        // Decided against the state before any mutation below.
        let was_selected = self.is_range_selected(first, last, columns);

        if !self.allows_multiple(multiple) {
            self.clear();
        }

        log::trace!(
            "[selection] {} rows {}..={} columns {:?}",
            if was_selected { "unselect" } else { "select" },
            first,
            last,
            columns
        );

        for row_id in first..=last {
            if was_selected {
                self.unselect_columns(row_id, columns);
            } else {
                self.select_columns(row_id, columns);
            }
        }
    }

    fn allows_multiple(&self, multiple: bool) -> bool {
        multiple && self.mode == SelectionMode::Multiple
    }

    fn select_columns(&mut self, row_id: RowId, columns: &[ColumnIndex]) {
        if columns.is_empty() {
            return;
        }
        self.selected
            .entry(row_id)
            .or_insert_with(|| RowSelection::new(row_id))
            .add(columns);
    }

    fn unselect_columns(&mut self, row_id: RowId, columns: &[ColumnIndex]) {
        let Some(row) = self.selected.get_mut(&row_id) else {
            return;
        };
        row.remove(columns);
        if row.is_empty() {
            self.selected.remove(&row_id);
        }
    }
}

/// Normalize two row positions into an inclusive `(first, last)` span.
fn span(start: RowId, end: RowId) -> (RowId, RowId) {
    (start.min(end), start.max(end))
}
