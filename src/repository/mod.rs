use crate::domain::table::Sort;
use crate::domain::types::{PageNumber, PerPage};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: PageNumber,
    pub per_page: PerPage,
}

impl Pagination {
    /// Number of records skipped before this page.
    pub fn offset(&self) -> usize {
        self.page.offset(self.per_page)
    }

    pub fn limit(&self) -> usize {
        self.per_page.get()
    }
}

/// Search, ordering and paging applied to a table listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: Option<String>,
    pub sort: Option<Sort>,
    pub pagination: Option<Pagination>,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn paginate(mut self, page: PageNumber, per_page: PerPage) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Source of table rows.
pub trait TableReader {
    type Record;

    /// Returns the number of records matching `query` and the records of the
    /// requested page.
    fn list_rows(&self, query: &TableQuery) -> RepositoryResult<(usize, Vec<Self::Record>)>;
}
