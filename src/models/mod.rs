//! Data models backing configuration.

pub mod config;
