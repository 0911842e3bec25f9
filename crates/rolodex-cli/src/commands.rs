//! Subcommands and their execution against a [`ContactRepository`].

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::Subcommand;
use rolodex_core::{
  ContactId, Error, NewContact, SortColumn, SortDirection,
  store::ContactRepository, validate::validate,
};
use tracing::info;

use crate::output::Outcome;

// ─── Command line ────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Create the contacts table and indexes if they are missing.
  Init,
  /// Check that the store answers.
  Ping,
  /// Add a contact.
  Add {
    #[arg(long, default_value = "")]
    first:  String,
    #[arg(long, default_value = "")]
    last:   String,
    #[arg(long, default_value = "")]
    email:  String,
    #[arg(long, default_value = "")]
    mobile: String,
  },
  /// Change some fields of a contact; omitted fields keep their value.
  Update {
    id:     i64,
    #[arg(long)]
    first:  Option<String>,
    #[arg(long)]
    last:   Option<String>,
    #[arg(long)]
    email:  Option<String>,
    #[arg(long)]
    mobile: Option<String>,
  },
  Delete {
    id: i64,
  },
  Show {
    id: i64,
  },
  /// List contacts, by last name unless `--sort` names another column.
  List {
    /// One of id, first_name, last_name, email, mobile.
    #[arg(long)]
    sort: Option<String>,
    #[arg(long)]
    desc: bool,
  },
  /// Case-insensitive substring search over every field.
  Search {
    query: String,
  },
  Count,
  /// Delete every contact.
  Clear {
    /// Required; there is no undo.
    #[arg(long)]
    yes: bool,
  },
  /// Import a CSV file in a single transaction.
  Import {
    file: PathBuf,
  },
  /// Export every contact to a CSV file.
  Export {
    file: PathBuf,
  },
}

// ─── Execution ───────────────────────────────────────────────────────────────

pub async fn run<R: ContactRepository>(repo: &R, command: Command) -> anyhow::Result<Outcome> {
  let outcome = match command {
    Command::Init => {
      repo.ensure_schema().await?;
      Outcome::SchemaReady
    }
    Command::Ping => Outcome::Ping { live: repo.test_connection().await },
    Command::Add { first, last, email, mobile } => {
      let id = repo.insert(&NewContact::new(first, last, email, mobile)).await?;
      Outcome::Added { id }
    }
    Command::Update { id, first, last, email, mobile } => {
      let id = ContactId(id);
      let current = repo.get_by_id(id).await?.ok_or(Error::NotFound(id))?;
      let mut fields = current.into_fields();
      if let Some(v) = first {
        fields.first_name = v;
      }
      if let Some(v) = last {
        fields.last_name = v;
      }
      if let Some(v) = email {
        fields.email = v;
      }
      if let Some(v) = mobile {
        fields.mobile = v;
      }
      repo.update(id, &fields).await?;
      Outcome::Updated { id }
    }
    Command::Delete { id } => {
      let id = ContactId(id);
      repo.delete(id).await?;
      Outcome::Deleted { id }
    }
    Command::Show { id } => {
      let id = ContactId(id);
      let contact = repo.get_by_id(id).await?.ok_or(Error::NotFound(id))?;
      Outcome::Contact { contact }
    }
    Command::List { sort: None, desc: false } => {
      Outcome::Contacts { contacts: repo.get_all().await? }
    }
    Command::List { sort, desc } => {
      let column = sort.as_deref().map_or(SortColumn::default(), SortColumn::resolve);
      let direction = SortDirection::from_ascending(!desc);
      Outcome::Contacts { contacts: repo.get_sorted(column, direction).await? }
    }
    Command::Search { query } => {
      Outcome::Contacts { contacts: repo.search(&query).await? }
    }
    Command::Count => Outcome::Count { count: repo.count().await? },
    Command::Clear { yes } => {
      if !yes {
        bail!("refusing to delete every contact without --yes");
      }
      Outcome::Cleared { removed: repo.delete_all().await? }
    }
    Command::Import { file } => import(repo, file).await?,
    Command::Export { file } => {
      let contacts = repo.get_all().await?;
      std::fs::write(&file, rolodex_csv::serialize(&contacts))
        .with_context(|| format!("failed to write {}", file.display()))?;
      info!(count = contacts.len(), path = %file.display(), "contacts exported");
      Outcome::Exported {
        exported: contacts.len(),
        path:     file.display().to_string(),
      }
    }
  };
  Ok(outcome)
}

async fn import<R: ContactRepository>(repo: &R, file: PathBuf) -> anyhow::Result<Outcome> {
  let text = std::fs::read_to_string(&file)
    .with_context(|| format!("failed to read {}", file.display()))?;
  let parsed = rolodex_csv::parse(&text)
    .with_context(|| format!("failed to parse {}", file.display()))?;

  // The bulk path skips field validation, so rows are checked here first.
  let invalid: Vec<String> = parsed
    .rows
    .iter()
    .filter_map(|row| validate(&row.contact).err().map(|e| format!("line {}: {e}", row.line)))
    .collect();
  if !invalid.is_empty() {
    bail!("nothing imported, invalid rows:\n  {}", invalid.join("\n  "));
  }

  let contacts = parsed.contacts();
  if !repo.import_bulk(&contacts).await {
    bail!("import of {} failed and was rolled back", file.display());
  }
  Ok(Outcome::Imported {
    imported: contacts.len(),
    skipped:  parsed.dropped_lines,
  })
}
