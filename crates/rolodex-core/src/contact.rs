//! Contact records, the single entity held by the store.
//!
//! A [`Contact`] is always a persisted row: its [`ContactId`] was assigned by
//! the store on insert and never changes. Field values that have not been
//! written yet (or that are about to replace a row's values) travel as a
//! [`NewContact`].

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned row identifier.
///
/// `0` denotes "not yet persisted"; the store only ever hands out positive
/// ids.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
  pub const UNSAVED: Self = Self(0);

  pub fn is_persisted(self) -> bool { self.0 > 0 }
}

impl From<i64> for ContactId {
  fn from(value: i64) -> Self { Self(value) }
}

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// The writable fields of a contact.
///
/// Used for inserts, for the replacement values of an update, and as the
/// record shape of bulk import/export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
  pub first_name: String,
  pub last_name:  String,
  /// Optional; empty means "no email".
  pub email:      String,
  /// Free-form, no format constraint.
  pub mobile:     String,
}

impl NewContact {
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
    mobile: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      last_name:  last_name.into(),
      email:      email.into(),
      mobile:     mobile.into(),
    }
  }

  /// Attach a store-assigned id, producing the persisted record.
  pub fn with_id(self, id: ContactId) -> Contact {
    Contact {
      id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
      mobile: self.mobile,
    }
  }
}

/// A contact row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         ContactId,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub mobile:     String,
}

impl Contact {
  /// `"First Last"`, collapsing to whichever half is present.
  pub fn display_name(&self) -> String {
    match (self.first_name.is_empty(), self.last_name.is_empty()) {
      (false, false) => format!("{} {}", self.first_name, self.last_name),
      (false, true) => self.first_name.clone(),
      _ => self.last_name.clone(),
    }
  }

  /// Drop the id, keeping only the writable fields.
  pub fn into_fields(self) -> NewContact {
    NewContact {
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      mobile:     self.mobile,
    }
  }
}
