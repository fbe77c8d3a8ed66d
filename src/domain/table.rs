use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ColumnKey, TypeConstraintError};

/// Direction a sortable column is ordered in.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The direction a header click switches to.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(TypeConstraintError::InvalidSortDirection(other.to_string())),
        }
    }
}

/// Ordering applied to a table listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(column: ColumnKey, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn asc(column: ColumnKey) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: ColumnKey) -> Self {
        Self::new(column, SortDirection::Desc)
    }
}

/// A single table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub label: String,
    pub sortable: bool,
    pub searchable: bool,
}

impl Column {
    pub fn new<K>(key: K, label: impl Into<String>) -> Result<Self, TypeConstraintError>
    where
        K: TryInto<ColumnKey, Error = TypeConstraintError>,
    {
        Ok(Self {
            key: key.try_into()?,
            label: label.into(),
            sortable: false,
            searchable: false,
        })
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// Columns of a table together with its default ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDefinition {
    columns: Vec<Column>,
    default_sort: Option<Sort>,
}

impl TableDefinition {
    /// Builds a definition, rejecting duplicate column keys.
    pub fn new(columns: Vec<Column>) -> Result<Self, TypeConstraintError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TypeConstraintError::DuplicateColumn(column.key.to_string()));
            }
        }

        Ok(Self {
            columns,
            default_sort: None,
        })
    }

    /// Sets the ordering used when a request names none. The column must be
    /// a sortable column of this table.
    pub fn default_sort(mut self, sort: Sort) -> Result<Self, TypeConstraintError> {
        if self.sortable_column(&sort.column).is_none() {
            return Err(TypeConstraintError::InvalidColumnKey(sort.column.into_inner()));
        }
        self.default_sort = Some(sort);
        Ok(self)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn default_sort_order(&self) -> Option<&Sort> {
        self.default_sort.as_ref()
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key.as_str() == key)
    }

    pub fn sortable_column(&self, key: &str) -> Option<&Column> {
        self.column(key).filter(|c| c.sortable)
    }

    pub fn searchable_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.searchable)
    }
}

/// Value of a single table cell.
///
/// Variants are ordered `Empty < Integer < Text` so mixed columns still sort
/// deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Text(String),
}

impl CellValue {
    /// Case-insensitive substring match used by table search.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Integer(n) => n.to_string().contains(needle_lowercase),
            CellValue::Text(s) => s.to_lowercase().contains(needle_lowercase),
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// A record that can be displayed as a table row.
pub trait TableRecord {
    /// Value shown in the column identified by `key`; unknown keys yield
    /// [`CellValue::Empty`].
    fn cell(&self, key: &ColumnKey) -> CellValue;
}
