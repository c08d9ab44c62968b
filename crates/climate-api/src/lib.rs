//! A read-only HTTP API over the Hawaii climate store.

pub mod error;
pub mod query;
pub mod routes;
pub mod state;
pub mod types;
