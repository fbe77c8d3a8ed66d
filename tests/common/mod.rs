use decor_pagination::domain::table::{CellValue, Column, Sort, TableDefinition, TableRecord};
use decor_pagination::domain::types::ColumnKey;
use decor_pagination::repository::InMemoryTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub sku: i64,
    pub name: String,
    pub category: Option<String>,
}

impl TableRecord for Product {
    fn cell(&self, key: &ColumnKey) -> CellValue {
        match key.as_str() {
            "sku" => self.sku.into(),
            "name" => self.name.clone().into(),
            "category" => self.category.clone().into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn product_definition() -> TableDefinition {
    TableDefinition::new(vec![
        Column::new("sku", "SKU").unwrap().sortable(),
        Column::new("name", "Name").unwrap().sortable().searchable(),
        Column::new("category", "Category").unwrap().searchable(),
    ])
    .unwrap()
    .default_sort(Sort::asc(ColumnKey::new("sku").unwrap()))
    .unwrap()
}

/// `count` products; every third one is a "Lamp", the rest are "Chair"s.
pub fn product_table(count: i64) -> InMemoryTable<Product> {
    let products = (1..=count)
        .map(|sku| Product {
            sku,
            name: if sku % 3 == 0 {
                format!("Lamp {sku}")
            } else {
                format!("Chair {sku}")
            },
            category: (sku % 2 == 0).then(|| "Indoor".to_string()),
        })
        .collect();

    InMemoryTable::new(&product_definition(), products)
}
