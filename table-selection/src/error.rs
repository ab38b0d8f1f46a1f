//! Error types

use crate::RowId;

/// Errors raised while building a selection from existing row records.
///
/// Selection operations themselves never fail: an unknown row or column is
/// simply "not selected".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// A row record carried no selected columns.
    #[error("row {row_id} has no selected columns")]
    EmptyRow {
        /// Identifier of the offending row.
        row_id: RowId,
    },

    /// The same row identifier was supplied more than once.
    #[error("row {row_id} appears more than once")]
    DuplicateRow {
        /// Identifier of the repeated row.
        row_id: RowId,
    },
}

impl SelectionError {
    /// Returns the row identifier the error refers to.
    pub fn row_id(&self) -> RowId {
        match self {
            Self::EmptyRow { row_id } | Self::DuplicateRow { row_id } => *row_id,
        }
    }
}
