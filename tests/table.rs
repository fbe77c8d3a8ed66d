use decor_pagination::forms::table::TableQueryForm;
use decor_pagination::models::config::TableSettings;
use decor_pagination::pagination::PageEntry;
use decor_pagination::services::ServiceError;
use decor_pagination::services::table::load_table;

mod common;

fn settings() -> TableSettings {
    TableSettings {
        default_per_page: 10,
        max_per_page: 50,
    }
}

#[test]
fn first_page_of_default_listing() {
    let table = common::product_table(95);

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        TableQueryForm::default(),
        "/products",
    )
    .unwrap();

    assert_eq!(view.total, 95);
    assert_eq!(view.rows.total_pages, 10);
    assert_eq!(view.rows.items.len(), 10);
    assert_eq!(view.rows.items[0].cells[0].text, "1");
    assert_eq!(view.rows.previous_path, None);
    assert_eq!(
        view.rows.next_path.as_deref(),
        Some("/products?sort=sku&dir=asc&page=2")
    );
    assert!(matches!(view.rows.pages[3], PageEntry::Ellipsis(_)));
}

#[test]
fn search_sort_and_page_combine() {
    let table = common::product_table(95);
    let form = TableQueryForm::parse("q=lamp&sort=name&dir=desc&page=2&per_page=5").unwrap();

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        form,
        "/products",
    )
    .unwrap();

    // Lamps are every third sku: 3, 6, ..., 93.
    assert_eq!(view.total, 31);
    assert_eq!(view.rows.total_pages, 7);
    let names: Vec<&str> = view
        .rows
        .items
        .iter()
        .map(|row| row.cells[1].text.as_str())
        .collect();
    // Names sort as text: "Lamp 93", "Lamp 90", "Lamp 9", "Lamp 87", "Lamp 84", ...
    assert_eq!(names, vec!["Lamp 81", "Lamp 78", "Lamp 75", "Lamp 72", "Lamp 69"]);
    assert_eq!(
        view.rows.previous_path.as_deref(),
        Some("/products?q=lamp&sort=name&dir=desc&page=1&per_page=5")
    );
}

#[test]
fn missing_category_renders_as_empty_cell() {
    let table = common::product_table(3);

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        TableQueryForm::default(),
        "/products",
    )
    .unwrap();

    assert_eq!(view.rows.items[0].cells[2].text, "");
    assert_eq!(view.rows.items[1].cells[2].text, "Indoor");
    assert_eq!(view.rows.pages.len(), 1);
}

#[test]
fn page_past_the_end_serves_last_page() {
    let table = common::product_table(25);
    let form = TableQueryForm::parse("page=9").unwrap();

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        form,
        "/products",
    )
    .unwrap();

    assert_eq!(view.rows.page, 3);
    let skus: Vec<&str> = view
        .rows
        .items
        .iter()
        .map(|row| row.cells[0].text.as_str())
        .collect();
    assert_eq!(skus, vec!["21", "22", "23", "24", "25"]);
    let current: Vec<usize> = view
        .rows
        .pages
        .iter()
        .flat_map(PageEntry::links)
        .filter(|link| link.current)
        .map(|link| link.index)
        .collect();
    assert_eq!(current, vec![3]);
    assert_eq!(
        view.rows.previous_path.as_deref(),
        Some("/products?sort=sku&dir=asc&page=2")
    );
    assert_eq!(view.rows.next_path, None);
}

#[test]
fn page_past_the_end_with_custom_page_size() {
    let table = common::product_table(30);
    let form = TableQueryForm::parse("page=9&per_page=20").unwrap();

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        form,
        "/products",
    )
    .unwrap();

    assert_eq!(view.rows.page, 2);
    assert_eq!(view.rows.total_pages, 2);
    assert_eq!(view.rows.items.len(), 10);
    assert_eq!(view.rows.items[0].cells[0].text, "21");
}

#[test]
fn empty_table_has_no_pages() {
    let table = common::product_table(0);

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        TableQueryForm::default(),
        "/products",
    )
    .unwrap();

    assert_eq!(view.total, 0);
    assert!(view.rows.pages.is_empty());
    assert_eq!(view.rows.next_path, None);
}

#[test]
fn oversized_search_is_rejected() {
    let table = common::product_table(5);
    let form = TableQueryForm {
        q: Some("x".repeat(201)),
        ..Default::default()
    };

    let result = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        form,
        "/products",
    );

    assert!(matches!(result, Err(ServiceError::Form(_))));
}

#[test]
fn view_serializes_for_templates() {
    let table = common::product_table(2);

    let view = load_table(
        &table,
        &common::product_definition(),
        &settings(),
        TableQueryForm::default(),
        "/products",
    )
    .unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["columns"][0]["sorted"], "asc");
    assert_eq!(json["columns"][0]["sort_path"], "/products?sort=sku&dir=desc");
    assert_eq!(json["rows"]["pages"][0]["kind"], "link");
    assert_eq!(json["rows"]["items"][1]["cells"][1]["text"], "Chair 2");
}
