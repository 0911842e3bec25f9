//! The SQLite implementation of [`ContactRepository`].

use std::path::Path;

use rolodex_core::{
  Contact, ContactId, Error, NewContact, Result, SortColumn, SortDirection,
  store::ContactRepository, validate::validate,
};
use rusqlite::{DropBehavior, OptionalExtension as _};
use tracing::{debug, info, warn};

use crate::{
  connection::{ConnectOptions, Connection},
  encode::{CONTACT_COLUMNS, DEFAULT_ORDER, decode_contact, like_pattern},
  error::Op,
  schema::SCHEMA,
};

const INSERT_SQL: &str =
  "INSERT INTO contacts (first_name, last_name, email, mobile) VALUES (?1, ?2, ?3, ?4)";

// ─── Repository ──────────────────────────────────────────────────────────────

/// A Rolodex contact store backed by a single SQLite connection.
///
/// The repository exclusively owns its [`Connection`]; the handle is released
/// when the repository is dropped.
pub struct SqliteRepository {
  conn: Connection,
}

impl SqliteRepository {
  /// Connect to the store without touching its schema.
  pub async fn connect(options: &ConnectOptions) -> Result<Self> {
    let conn = Connection::connect(options).await?;
    Ok(Self { conn })
  }

  /// Open (or create) a store at `path` and ensure its schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let repo = Self::connect(&ConnectOptions::file(path.as_ref())).await?;
    repo.ensure_schema().await?;
    Ok(repo)
  }

  /// Open an in-memory store with its schema in place. Mostly useful in tests.
  pub async fn open_in_memory() -> Result<Self> {
    let repo = Self::connect(&ConnectOptions::in_memory()).await?;
    repo.ensure_schema().await?;
    Ok(repo)
  }

  /// Release the connection. Every later operation fails with
  /// [`Error::ConnectionLost`].
  pub async fn close(&self) -> Result<()> { self.conn.close().await }

  #[cfg(test)]
  pub(crate) fn connection(&self) -> &Connection { &self.conn }

  /// Run a read query, logging store faults before handing them back.
  async fn read<F, R>(&self, what: &'static str, function: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R>
      + Send
      + 'static,
    R: Send + 'static,
  {
    self.conn.ensure_live().await?;
    self.conn.call(Op::Read, function).await.inspect_err(|e| {
      warn!(query = what, error = %e, "read failed");
    })
  }

  async fn query_contacts(
    &self,
    what: &'static str,
    sql: String,
    params: Vec<String>,
  ) -> Result<Vec<Contact>> {
    let contacts = self
      .read(what, move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), decode_contact)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    debug!(query = what, rows = contacts.len(), "contacts read");
    Ok(contacts)
  }
}

// ─── ContactRepository impl ──────────────────────────────────────────────────

impl ContactRepository for SqliteRepository {
  // ── Connection ────────────────────────────────────────────────────────────

  async fn is_live(&self) -> bool { self.conn.is_live().await }

  async fn test_connection(&self) -> bool {
    // The liveness probe is already a `SELECT 1` round-trip that swallows
    // every failure.
    self.conn.is_live().await
  }

  async fn ensure_schema(&self) -> Result<()> {
    self.conn.ensure_live().await?;
    self
      .conn
      .call(Op::Schema, |conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .inspect_err(|e| warn!(error = %e, "schema initialization failed"))?;
    info!("database schema initialized");
    Ok(())
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, contact: &NewContact) -> Result<ContactId> {
    validate(contact)?;
    self.conn.ensure_live().await?;

    let c = contact.clone();
    let id = self
      .conn
      .call(Op::Write, move |conn| {
        conn.execute(
          INSERT_SQL,
          rusqlite::params![c.first_name, c.last_name, c.email, c.mobile],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .inspect_err(|e| warn!(error = %e, "insert failed"))?;

    let id = ContactId(id);
    info!(%id, "contact inserted");
    Ok(id)
  }

  async fn update(&self, id: ContactId, contact: &NewContact) -> Result<()> {
    validate(contact)?;
    self.conn.ensure_live().await?;

    let c = contact.clone();
    let rows = self
      .conn
      .call(Op::Write, move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
              SET first_name = ?1, last_name = ?2, email = ?3, mobile = ?4
            WHERE id = ?5",
          rusqlite::params![c.first_name, c.last_name, c.email, c.mobile, id.0],
        )?)
      })
      .await
      .inspect_err(|e| warn!(%id, error = %e, "update failed"))?;

    if rows == 0 {
      return Err(Error::NotFound(id));
    }
    info!(%id, "contact updated");
    Ok(())
  }

  async fn delete(&self, id: ContactId) -> Result<()> {
    self.conn.ensure_live().await?;

    let rows = self
      .conn
      .call(Op::Write, move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id.0])?)
      })
      .await
      .inspect_err(|e| warn!(%id, error = %e, "delete failed"))?;

    if rows == 0 {
      return Err(Error::NotFound(id));
    }
    info!(%id, "contact deleted");
    Ok(())
  }

  async fn delete_all(&self) -> Result<u64> {
    self.conn.ensure_live().await?;

    let rows = self
      .conn
      .call(Op::Write, |conn| Ok(conn.execute("DELETE FROM contacts", [])?))
      .await
      .inspect_err(|e| warn!(error = %e, "delete all failed"))?;

    info!(rows, "all contacts deleted");
    Ok(rows as u64)
  }

  async fn import_bulk(&self, contacts: &[NewContact]) -> bool {
    if let Err(e) = self.conn.ensure_live().await {
      warn!(error = %e, "bulk import not started");
      return false;
    }

    let records = contacts.to_vec();
    let total = records.len();
    let result = self
      .conn
      .call(Op::Write, move |conn| {
        // The transaction rolls back when dropped uncommitted, so any early
        // return below leaves the table as it was and the connection back
        // in autocommit mode.
        let mut tx = conn.transaction()?;
        tx.set_drop_behavior(DropBehavior::Rollback);
        {
          let mut stmt = tx.prepare(INSERT_SQL)?;
          for c in &records {
            stmt.execute(rusqlite::params![
              c.first_name,
              c.last_name,
              c.email,
              c.mobile
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await;

    match result {
      Ok(()) => {
        info!(count = total, "contacts imported");
        true
      }
      Err(e) => {
        warn!(count = total, error = %e, "bulk import rolled back");
        false
      }
    }
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get_by_id(&self, id: ContactId) -> Result<Option<Contact>> {
    let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1");
    self
      .read("get_by_id", move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id.0], decode_contact)
            .optional()?,
        )
      })
      .await
  }

  async fn get_all(&self) -> Result<Vec<Contact>> {
    let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY {DEFAULT_ORDER}");
    self.query_contacts("get_all", sql, vec![]).await
  }

  async fn search(&self, query: &str) -> Result<Vec<Contact>> {
    if query.is_empty() {
      return self.get_all().await;
    }

    let sql = format!(
      r"SELECT {CONTACT_COLUMNS} FROM contacts
         WHERE fold(first_name) LIKE ?1 ESCAPE '\'
            OR fold(last_name)  LIKE ?1 ESCAPE '\'
            OR fold(email)      LIKE ?1 ESCAPE '\'
            OR fold(mobile)     LIKE ?1 ESCAPE '\'
         ORDER BY {DEFAULT_ORDER}"
    );
    self.query_contacts("search", sql, vec![like_pattern(query)]).await
  }

  async fn get_sorted(
    &self,
    column: SortColumn,
    direction: SortDirection,
  ) -> Result<Vec<Contact>> {
    // Both fragments are `&'static str` from closed enums; no caller text is
    // ever interpolated here.
    let order = column.as_sql();
    let dir = direction.as_sql();
    let sql = match column {
      SortColumn::Id => {
        format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY {order} {dir}")
      }
      _ => format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY fold({order}) {dir}, id {dir}"
      ),
    };
    self.query_contacts("get_sorted", sql, vec![]).await
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .read("count", |conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}
