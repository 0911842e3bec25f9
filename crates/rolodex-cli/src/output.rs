//! Rendering of command results, as plain text lines or JSON.

use std::fmt::Write as _;

use rolodex_core::{Contact, ContactId};
use serde::Serialize;

/// What a command produced.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
  SchemaReady,
  Ping { live: bool },
  Added { id: ContactId },
  Updated { id: ContactId },
  Deleted { id: ContactId },
  Contact { contact: Contact },
  Contacts { contacts: Vec<Contact> },
  Count { count: u64 },
  Cleared { removed: u64 },
  Imported {
    imported: usize,
    /// Lines skipped because both names were empty.
    skipped:  Vec<usize>,
  },
  Exported { exported: usize, path: String },
}

impl Outcome {
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  pub fn to_text(&self) -> String {
    match self {
      Outcome::SchemaReady => "schema ready".to_owned(),
      Outcome::Ping { live: true } => "ok".to_owned(),
      Outcome::Ping { live: false } => "unreachable".to_owned(),
      Outcome::Added { id } => format!("added contact {id}"),
      Outcome::Updated { id } => format!("updated contact {id}"),
      Outcome::Deleted { id } => format!("deleted contact {id}"),
      Outcome::Contact { contact } => contact_block(contact),
      Outcome::Contacts { contacts } => contact_table(contacts),
      Outcome::Count { count } => count.to_string(),
      Outcome::Cleared { removed } => format!("removed {removed} contacts"),
      Outcome::Imported { imported, skipped } => {
        let mut out = format!("imported {imported} contacts");
        if !skipped.is_empty() {
          let lines: Vec<_> = skipped.iter().map(usize::to_string).collect();
          let _ = write!(
            out,
            ", skipped {} nameless rows (lines {})",
            skipped.len(),
            lines.join(", ")
          );
        }
        out
      }
      Outcome::Exported { exported, path } => {
        format!("exported {exported} contacts to {path}")
      }
    }
  }
}

fn contact_block(c: &Contact) -> String {
  format!(
    "id:     {}\nname:   {}\nemail:  {}\nmobile: {}",
    c.id,
    c.display_name(),
    c.email,
    c.mobile
  )
}

fn contact_table(contacts: &[Contact]) -> String {
  contacts
    .iter()
    .map(|c| format!("{}\t{}\t{}\t{}", c.id, c.display_name(), c.email, c.mobile))
    .collect::<Vec<_>>()
    .join("\n")
}
