//! # Libris Shared Library
//!
//! This crate contains the data layer of the Libris catalog: connection
//! pooling, schema bootstrap, the `Author`/`Book` models, and the `Catalog`
//! gateway that request handlers talk to.
//!
//! ## Module Organization
//!
//! - `db`: SQLite pool management and schema creation
//! - `models`: Database models and their queries
//! - `catalog`: Gateway trait over the models, injected into the web layer

pub mod catalog;
pub mod db;
pub mod models;

/// Current version of the Libris shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
