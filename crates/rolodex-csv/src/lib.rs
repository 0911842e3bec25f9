//! CSV codec for bulk contact exchange.
//!
//! The exchange format is a flat record list with one header line followed
//! by `first name, last name, email, mobile` rows. Pure synchronous; no
//! database dependencies. Validation of the parsed rows is left to the
//! caller.
//!
//! # Quick start
//!
//! ```no_run
//! let input = "First Name,Last Name,Email,Mobile\nAda,Lovelace,ada@example.com,+44123\n";
//! let parsed = rolodex_csv::parse(input).unwrap();
//! println!("{} rows, {} dropped", parsed.rows.len(), parsed.dropped());
//! ```

pub mod error;
mod parse;
mod serialize;

pub use error::{Error, Result};
use rolodex_core::{Contact, NewContact};

/// Header line written on export and expected (then skipped) on import.
pub const HEADER: &str = "First Name,Last Name,Email,Mobile";

// ─── Public types
// ─────────────────────────────────────────────────────────────

/// A parsed row and the line it started on (1-based, header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
  pub line:    usize,
  pub contact: NewContact,
}

/// The result of parsing an exchange file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedCsv {
  /// Rows with at least one name, in file order.
  pub rows:          Vec<CsvRow>,
  /// Lines of rows dropped because both names were empty.
  pub dropped_lines: Vec<usize>,
}

impl ParsedCsv {
  /// The kept contacts, in file order.
  pub fn contacts(&self) -> Vec<NewContact> {
    self.rows.iter().map(|r| r.contact.clone()).collect()
  }

  pub fn dropped(&self) -> usize { self.dropped_lines.len() }
}

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Parse an exchange file.
///
/// The first record is treated as the header and skipped. Blank lines are
/// ignored, fields are trimmed, missing trailing fields read as empty and
/// extra fields are ignored.
pub fn parse(input: &str) -> Result<ParsedCsv> { parse::parse(input) }

/// Serialize `contacts` as an exchange file, header first.
pub fn serialize(contacts: &[Contact]) -> String {
  serialize::serialize(contacts)
}

#[cfg(test)]
mod roundtrip_tests {
  use rolodex_core::ContactId;

  use super::*;

  #[test]
  fn export_then_import_preserves_awkward_fields() {
    let contacts = vec![
      NewContact::new("Ada", "Lovelace", "ada@example.com", "+44123")
        .with_id(ContactId(1)),
      NewContact::new("Multi", "Line\nName", "m@example.org", "")
        .with_id(ContactId(2)),
      NewContact::new("Smith, Jr.", "O'Neil", "", "555 \"home\"")
        .with_id(ContactId(3)),
    ];

    let text = serialize(&contacts);
    let parsed = parse(&text).unwrap();

    assert_eq!(parsed.dropped(), 0);
    let expected: Vec<_> = contacts.into_iter().map(Contact::into_fields).collect();
    assert_eq!(parsed.contacts(), expected);
    // The embedded newline pushes the following row down a line.
    let lines: Vec<_> = parsed.rows.iter().map(|r| r.line).collect();
    assert_eq!(lines, [2, 3, 5]);
  }
}
