//! Concrete adapter implementations for ports.

pub mod builtin_catalog;
pub mod csv_catalog_adapter;
pub mod file_config_adapter;
