//! Services assembling table view-models.

use crate::domain::table::{Column, TableDefinition, TableRecord};
use crate::domain::types::PageNumber;
use crate::dto::table::{CellView, ColumnView, RowView, TableView};
use crate::forms::FormError;
use crate::forms::table::{TableParams, TableQueryForm};
use crate::models::config::TableSettings;
use crate::pagination::Paginated;
use crate::repository::{TableQuery, TableReader};
use crate::services::ServiceResult;

fn link(base_path: &str, query: &str) -> String {
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

fn column_view(
    column: &Column,
    params: &TableParams,
    base_path: &str,
) -> Result<ColumnView, FormError> {
    let sorted = params
        .sort
        .as_ref()
        .filter(|sort| sort.column == column.key)
        .map(|sort| sort.direction);

    let sort_path = if column.sortable {
        Some(link(base_path, &params.sort_query_string(&column.key)?))
    } else {
        None
    };

    Ok(ColumnView {
        key: column.key.to_string(),
        label: column.label.clone(),
        sortable: column.sortable,
        sorted,
        sort_path,
    })
}

fn row_view<T: TableRecord>(definition: &TableDefinition, record: &T) -> RowView {
    RowView {
        cells: definition
            .columns()
            .iter()
            .map(|column| CellView {
                column: column.key.to_string(),
                text: record.cell(&column.key).to_string(),
            })
            .collect(),
    }
}

fn fetch_rows<R>(repo: &R, params: &TableParams) -> ServiceResult<(usize, Vec<R::Record>)>
where
    R: TableReader + ?Sized,
{
    let mut query = TableQuery::new().paginate(params.page, params.per_page);
    if let Some(term) = &params.search {
        query = query.search(term.clone());
    }
    if let Some(sort) = &params.sort {
        query = query.sort(sort.clone());
    }

    let rows = repo.list_rows(&query).map_err(|err| {
        log::error!("Failed to list table rows: {err}");
        err
    })?;
    Ok(rows)
}

/// Loads one page of a table and builds its view-model.
///
/// `base_path` is the path the table is served under; header and page links
/// append the table's query string to it.
pub fn load_table<R>(
    repo: &R,
    definition: &TableDefinition,
    settings: &TableSettings,
    form: TableQueryForm,
    base_path: &str,
) -> ServiceResult<TableView>
where
    R: TableReader + ?Sized,
    R::Record: TableRecord,
{
    let mut params = TableParams::from_form(form, definition, settings).map_err(|err| {
        log::error!("Failed to validate table query: {err}");
        err
    })?;

    let (mut total, mut records) = fetch_rows(repo, &params)?;

    // A page past the end is served as the last page.
    let last_page = params.per_page.total_pages(total);
    if last_page > 0 && params.page.get() > last_page {
        log::debug!(
            "Requested page {} is past the last page {last_page}",
            params.page.get()
        );
        params.page = PageNumber::new(last_page)?;
        (total, records) = fetch_rows(repo, &params)?;
    }

    let columns = definition
        .columns()
        .iter()
        .map(|column| column_view(column, &params, base_path))
        .collect::<Result<Vec<_>, FormError>>()?;

    let rows = records
        .iter()
        .map(|record| row_view(definition, record))
        .collect();

    let total_pages = params.per_page.total_pages(total);
    let rows = Paginated::try_new(rows, params.page.get(), total_pages, |page| {
        params
            .query_string(page)
            .map(|query| link(base_path, &query))
    })?;

    Ok(TableView {
        columns,
        rows,
        total,
        search_query: params.search,
    })
}
