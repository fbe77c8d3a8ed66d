//! Domain types shared by the table and pagination layers.

pub mod table;
pub mod types;
