//! Cell selection state for table grids.
//!
//! Tracks which `(row, column)` cells of a grid are selected, with single and
//! multiple selection and rectangular range toggling. Rendering and input
//! handling belong to the grid component that drives it.

pub mod error;
pub mod row;
pub mod table;

pub use error::SelectionError;
pub use row::RowSelection;
pub use table::{SelectionMode, TableSelection};

/// Identifier of a grid row.
pub type RowId = i64;

/// Index of a grid column.
pub type ColumnIndex = i64;

pub mod prelude {
    pub use crate::error::SelectionError;
    pub use crate::row::RowSelection;
    pub use crate::table::{SelectionMode, TableSelection};
    pub use crate::{ColumnIndex, RowId};
}
