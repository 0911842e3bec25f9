//! SQLite backend for the Rolodex contact store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on the connection's
//! dedicated thread without blocking the async runtime.

mod connection;
mod encode;
mod error;
mod schema;
mod store;

pub use connection::{ConnectOptions, Connection, StoreLocation};
pub use rolodex_core::{Error, Result};
pub use store::SqliteRepository;
