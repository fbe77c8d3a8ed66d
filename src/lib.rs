//! Pagination and data-table view-models for server-rendered Decor pages.
//!
//! [`pagination`] computes which page links and ellipsis groups a pagination
//! control shows. The remaining modules turn table requests into validated
//! queries and serializable view-models.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "data")]
pub use pagination::{
    EllipsisGroup, PageEntry, PageLink, PageRangeCalculator, Paginated, compute_pages,
};
