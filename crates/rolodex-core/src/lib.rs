//! Core types and trait definitions for the Rolodex contact store.
//!
//! This crate is deliberately free of database dependencies. It holds the
//! contact model, the field-level validation rules, the sort-column
//! allowlist, and the [`ContactRepository`](store::ContactRepository)
//! abstraction that storage backends implement.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod error;
pub mod sort;
pub mod store;
pub mod validate;

pub use contact::{Contact, ContactId, NewContact};
pub use error::{Error, Result};
pub use sort::{SortColumn, SortDirection};
pub use validate::ValidationError;
