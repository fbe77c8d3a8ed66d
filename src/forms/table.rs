//! Query-string form shared by every table listing.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::table::{Sort, SortDirection, TableDefinition};
use crate::domain::types::{ColumnKey, PageNumber, PerPage};
use crate::forms::FormError;
use crate::models::config::TableSettings;

/// Raw table parameters as they appear in a URL query string.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate, PartialEq, Eq)]
pub struct TableQueryForm {
    /// Free-form search string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub q: Option<String>,
    /// Key of the column to sort by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 1000))]
    pub per_page: Option<usize>,
}

impl TableQueryForm {
    /// Parses a query string such as `q=alice&sort=name&dir=desc&page=2`.
    pub fn parse(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|e| FormError::InvalidQuery(e.to_string()))
    }

    /// Encodes the populated fields back into a query string.
    pub fn to_query_string(&self) -> Result<String, FormError> {
        serde_html_form::to_string(self).map_err(|e| FormError::Encode(e.to_string()))
    }
}

/// Validated table parameters resolved against a [`TableDefinition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableParams {
    pub search: Option<String>,
    pub sort: Option<Sort>,
    pub page: PageNumber,
    pub per_page: PerPage,
    per_page_requested: bool,
}

impl TableParams {
    pub fn from_form(
        form: TableQueryForm,
        definition: &TableDefinition,
        settings: &TableSettings,
    ) -> Result<Self, FormError> {
        form.validate()?;

        let page = PageNumber::new(form.page.unwrap_or(1))?;
        let per_page = PerPage::clamped(
            form.per_page.unwrap_or(settings.default_per_page),
            settings.max_per_page,
        )?;

        let search = form
            .q
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let requested_sort = form.sort.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let sort = match requested_sort {
            Some(key) => {
                let column = definition
                    .sortable_column(key)
                    .ok_or_else(|| FormError::InvalidSortColumn(key.to_string()))?;
                Some(Sort::new(column.key.clone(), form.dir.unwrap_or_default()))
            }
            None => definition.default_sort_order().cloned().map(|mut sort| {
                if let Some(direction) = form.dir {
                    sort.direction = direction;
                }
                sort
            }),
        };

        Ok(Self {
            search,
            sort,
            page,
            per_page,
            per_page_requested: form.per_page.is_some(),
        })
    }

    fn to_form(&self, page: Option<usize>, sort: Option<&Sort>) -> TableQueryForm {
        TableQueryForm {
            q: self.search.clone(),
            sort: sort.map(|s| s.column.to_string()),
            dir: sort.map(|s| s.direction),
            page,
            per_page: self.per_page_requested.then(|| self.per_page.get()),
        }
    }

    /// Query string of the same listing on another page.
    pub fn query_string(&self, page: usize) -> Result<String, FormError> {
        self.to_form(Some(page), self.sort.as_ref()).to_query_string()
    }

    /// Query string for a click on the header of `column`: the direction
    /// flips when the listing is already sorted by it and the page resets.
    pub fn sort_query_string(&self, column: &ColumnKey) -> Result<String, FormError> {
        let direction = match &self.sort {
            Some(current) if &current.column == column => current.direction.toggled(),
            _ => SortDirection::Asc,
        };
        let sort = Sort::new(column.clone(), direction);
        self.to_form(None, Some(&sort)).to_query_string()
    }
}
