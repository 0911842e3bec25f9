//! Sort-column allowlist.
//!
//! A sort column is the only caller-influenced value that ends up inside a
//! SQL string, so it is modelled as a closed enum. Untrusted text is
//! converted exactly once, by [`SortColumn::resolve`]; anything outside the
//! allowlist becomes the default column instead of an error.

use std::fmt;

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
  Id,
  FirstName,
  #[default]
  LastName,
  Email,
  Mobile,
}

impl SortColumn {
  pub const ALL: [SortColumn; 5] = [
    SortColumn::Id,
    SortColumn::FirstName,
    SortColumn::LastName,
    SortColumn::Email,
    SortColumn::Mobile,
  ];

  /// Map untrusted input onto the allowlist.
  ///
  /// Exact, case-sensitive match against the column names; every other
  /// input yields [`SortColumn::LastName`].
  pub fn resolve(requested: &str) -> Self {
    Self::ALL
      .into_iter()
      .find(|c| c.as_sql() == requested)
      .unwrap_or_default()
  }

  /// The column identifier as it appears in SQL.
  pub const fn as_sql(self) -> &'static str {
    match self {
      SortColumn::Id => "id",
      SortColumn::FirstName => "first_name",
      SortColumn::LastName => "last_name",
      SortColumn::Email => "email",
      SortColumn::Mobile => "mobile",
    }
  }
}

impl fmt::Display for SortColumn {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_sql())
  }
}

/// Ordering direction for [`SortColumn`] listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending,
}

impl SortDirection {
  pub fn from_ascending(ascending: bool) -> Self {
    if ascending { Self::Ascending } else { Self::Descending }
  }

  pub const fn as_sql(self) -> &'static str {
    match self {
      SortDirection::Ascending => "ASC",
      SortDirection::Descending => "DESC",
    }
  }
}
