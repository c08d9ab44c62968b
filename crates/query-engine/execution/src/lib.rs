//! Query execution against the SQLite climate store.

pub mod error;
pub mod introspection;
pub mod metrics;
pub mod query;
pub mod session;

pub use error::Error;
pub use session::Session;
