//! Port traits implemented by [`crate::adapters`].

pub mod catalog_port;
pub mod config_port;
