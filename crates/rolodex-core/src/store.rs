//! The `ContactRepository` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `rolodex-store-sqlite`). Collaborators such as the CLI depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  contact::{Contact, ContactId, NewContact},
  sort::{SortColumn, SortDirection},
};

/// Abstraction over a Rolodex contact store backend.
///
/// An implementation owns exactly one store connection and checks that it is
/// live before every operation; once the connection is gone every method
/// fails with [`Error::ConnectionLost`](crate::Error::ConnectionLost).
///
/// Implementations perform no internal locking. Callers issue one operation
/// at a time.
pub trait ContactRepository: Send + Sync {
  // ── Connection ────────────────────────────────────────────────────────

  /// Whether the underlying connection still answers.
  fn is_live(&self) -> impl Future<Output = bool> + Send + '_;

  /// Lightweight round-trip. Never errors; any failure reads as `false`.
  fn test_connection(&self) -> impl Future<Output = bool> + Send + '_;

  /// Create the contacts table and its indexes if absent. Idempotent and
  /// never destructive.
  fn ensure_schema(&self) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate and insert a contact, returning the store-assigned id.
  fn insert<'a>(
    &'a self,
    contact: &'a NewContact,
  ) -> impl Future<Output = Result<ContactId>> + Send + 'a;

  /// Validate and replace every field of contact `id`.
  ///
  /// Fails with [`Error::NotFound`](crate::Error::NotFound) when no row has
  /// that id.
  fn update<'a>(
    &'a self,
    id: ContactId,
    contact: &'a NewContact,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  /// Delete contact `id`; [`Error::NotFound`](crate::Error::NotFound) when
  /// no row has that id.
  fn delete(&self, id: ContactId) -> impl Future<Output = Result<()>> + Send + '_;

  /// Remove every contact. Returns the number of rows removed.
  fn delete_all(&self) -> impl Future<Output = Result<u64>> + Send + '_;

  /// Insert all of `contacts` in one transaction.
  ///
  /// Field validation is the caller's job here. Returns `true` when every
  /// record was committed and `false` when the transaction was rolled back;
  /// a partial import is impossible.
  fn import_bulk<'a>(
    &'a self,
    contacts: &'a [NewContact],
  ) -> impl Future<Output = bool> + Send + 'a;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Fetch a single contact. `Ok(None)` means no such row; a store fault is
  /// an `Err`.
  fn get_by_id(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  /// All contacts ordered by `(last_name, first_name)`.
  fn get_all(&self) -> impl Future<Output = Result<Vec<Contact>>> + Send + '_;

  /// Case-insensitive substring match over first name, last name, email
  /// and mobile, in [`get_all`](Self::get_all) order. An empty query is
  /// equivalent to `get_all`.
  fn search<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Contact>>> + Send + 'a;

  /// All contacts ordered by a single allowlisted column. Ties on that
  /// column come back in store order.
  fn get_sorted(
    &self,
    column: SortColumn,
    direction: SortDirection,
  ) -> impl Future<Output = Result<Vec<Contact>>> + Send + '_;

  /// Total number of contacts.
  fn count(&self) -> impl Future<Output = Result<u64>> + Send + '_;
}
