//! View-models handed to table templates.

use serde::Serialize;

use crate::domain::table::SortDirection;
use crate::pagination::Paginated;

/// Header of a single column.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColumnView {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Direction the listing is currently sorted by this column, if any.
    pub sorted: Option<SortDirection>,
    /// Link a header click navigates to; `None` for unsortable columns.
    pub sort_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CellView {
    pub column: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

/// Data required to render a table with its pagination control.
#[derive(Debug, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnView>,
    pub rows: Paginated<RowView>,
    /// Total number of records matching the search.
    pub total: usize,
    /// Search string echoed back to the template when present.
    pub search_query: Option<String>,
}
