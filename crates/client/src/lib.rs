//! HTTP client for the remote book collection.
//!
//! The collection lives behind a REST-ish API; this crate owns the wire
//! types, the error taxonomy, and the `RemoteCollection` seam the
//! application synchronizes through.

pub mod error;
pub mod models;
pub mod remote;

pub use error::ApiError;
pub use remote::{BooksApi, RemoteCollection};
