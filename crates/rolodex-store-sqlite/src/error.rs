//! Mapping of SQLite faults onto the core error taxonomy.
//!
//! Which variant a fault becomes depends on what was being attempted, so
//! every store call names its [`Op`]. The store's diagnostic text is kept.

use rolodex_core::Error;

/// The kind of store operation a fault occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
  Connect,
  Schema,
  Write,
  Read,
}

pub(crate) fn store_fault(op: Op, err: tokio_rusqlite::Error) -> Error {
  if let tokio_rusqlite::Error::ConnectionClosed = err {
    return Error::ConnectionLost;
  }
  let msg = err.to_string();
  match op {
    Op::Connect => Error::Connection(msg),
    Op::Schema => Error::Schema(msg),
    Op::Write => Error::Write(msg),
    Op::Read => Error::Read(msg),
  }
}
