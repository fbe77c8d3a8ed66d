//! Table reader over records held in memory.

use crate::domain::table::{SortDirection, TableDefinition, TableRecord};
use crate::domain::types::ColumnKey;
use crate::repository::errors::RepositoryResult;
use crate::repository::{TableQuery, TableReader};

/// Serves a fixed set of records, applying search, ordering and paging the
/// way a database-backed reader would.
#[derive(Debug, Clone)]
pub struct InMemoryTable<T> {
    searchable: Vec<ColumnKey>,
    records: Vec<T>,
}

impl<T> InMemoryTable<T> {
    pub fn new(definition: &TableDefinition, records: Vec<T>) -> Self {
        Self {
            searchable: definition
                .searchable_columns()
                .map(|c| c.key.clone())
                .collect(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> TableReader for InMemoryTable<T>
where
    T: TableRecord + Clone,
{
    type Record = T;

    fn list_rows(&self, query: &TableQuery) -> RepositoryResult<(usize, Vec<T>)> {
        let needle = query.search.as_deref().map(str::to_lowercase);

        let mut matched: Vec<&T> = self
            .records
            .iter()
            .filter(|record| match &needle {
                Some(needle) => self
                    .searchable
                    .iter()
                    .any(|key| record.cell(key).matches(needle)),
                None => true,
            })
            .collect();

        if let Some(sort) = &query.sort {
            matched.sort_by(|a, b| {
                let ordering = a.cell(&sort.column).cmp(&b.cell(&sort.column));
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let total = matched.len();
        let rows = match &query.pagination {
            Some(pagination) => matched
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.limit())
                .cloned()
                .collect(),
            None => matched.into_iter().cloned().collect(),
        };

        Ok((total, rows))
    }
}
