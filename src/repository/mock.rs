//! Mock table reader for isolating services in tests.

use mockall::mock;

use crate::repository::errors::RepositoryResult;
use crate::repository::{TableQuery, TableReader};

mock! {
    pub Reader<T: 'static> {}

    impl<T: 'static> TableReader for Reader<T> {
        type Record = T;

        fn list_rows(&self, query: &TableQuery) -> RepositoryResult<(usize, Vec<T>)>;
    }
}
