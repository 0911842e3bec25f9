//! Error types for `rolodex-core`.
//!
//! Every repository operation reports failures through [`Error`]. The
//! variants separate failures the caller can fix locally (validation, a
//! missing id) from failures of the store itself.

use thiserror::Error;

use crate::{contact::ContactId, validate::ValidationError};

#[derive(Debug, Error)]
pub enum Error {
  /// The store could not be opened. Fatal to the repository being built.
  #[error("database connection error: {0}")]
  Connection(String),

  /// The connection was live once but is not any more. Terminal for the
  /// repository instance; construct a new one to continue.
  #[error("database connection lost")]
  ConnectionLost,

  /// Caller-supplied data violates a field invariant. Nothing was written.
  #[error("invalid contact: {0}")]
  Validation(#[from] ValidationError),

  /// An update or delete targeted an id that does not exist.
  #[error("contact not found with id: {0}")]
  NotFound(ContactId),

  /// The store rejected a write (constraint violation, I/O fault, ...).
  #[error("write error: {0}")]
  Write(String),

  #[error("schema initialization error: {0}")]
  Schema(String),

  /// A read failed inside the store. Distinct from a lookup that simply
  /// found nothing.
  #[error("query error: {0}")]
  Read(String),
}

impl Error {
  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

  pub fn is_validation(&self) -> bool { matches!(self, Self::Validation(_)) }

  /// `true` for both failure to connect and loss of an established
  /// connection.
  pub fn is_connection(&self) -> bool {
    matches!(self, Self::Connection(_) | Self::ConnectionLost)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
