//! Connection lifecycle for the SQLite store.
//!
//! A [`Connection`] is opened once and owned by exactly one repository for
//! that repository's lifetime. There is no pool and no reconnect: once the
//! connection is closed or lost, every call reports
//! [`Error::ConnectionLost`] and the owner has to be rebuilt.

use std::{path::PathBuf, time::Duration};

use rolodex_core::{Error, Result};
use tracing::{debug, info, warn};

use crate::{
  encode::register_fold,
  error::{Op, store_fault},
};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
  /// A database file, created on first open.
  File(PathBuf),
  /// A private in-memory database, discarded when the connection closes.
  Memory,
}

/// Everything needed to open a [`Connection`].
#[derive(Debug, Clone)]
pub struct ConnectOptions {
  pub location:     StoreLocation,
  /// How long a statement waits on a locked database before failing.
  pub busy_timeout: Duration,
}

impl ConnectOptions {
  pub fn file(path: impl Into<PathBuf>) -> Self {
    Self {
      location:     StoreLocation::File(path.into()),
      busy_timeout: Duration::from_secs(5),
    }
  }

  pub fn in_memory() -> Self {
    Self {
      location:     StoreLocation::Memory,
      busy_timeout: Duration::from_secs(5),
    }
  }

  pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
    self.busy_timeout = timeout;
    self
  }
}

// ─── Connection ──────────────────────────────────────────────────────────────

/// A single live handle to the store.
///
/// Deliberately not `Clone`: the handle has one owner.
pub struct Connection {
  inner: tokio_rusqlite::Connection,
}

impl Connection {
  /// Open the store described by `options`.
  ///
  /// Fails with [`Error::Connection`] if the database cannot be opened or
  /// does not answer a probe query.
  pub async fn connect(options: &ConnectOptions) -> Result<Self> {
    let inner = match &options.location {
      StoreLocation::File(path) => {
        tokio_rusqlite::Connection::open(path.clone()).await
      }
      StoreLocation::Memory => tokio_rusqlite::Connection::open_in_memory().await,
    }
    .map_err(|e| {
      warn!(location = ?options.location, error = %e, "database connection failed");
      Error::Connection(e.to_string())
    })?;

    let timeout = options.busy_timeout;
    inner
      .call(move |conn| {
        conn.busy_timeout(timeout)?;
        register_fold(conn)?;
        // Forces SQLite to actually read the file header, so a corrupt or
        // non-database file fails here instead of on first use.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |_| Ok(()))?;
        Ok(())
      })
      .await
      .map_err(|e| {
        warn!(location = ?options.location, error = %e, "database connection failed");
        store_fault(Op::Connect, e)
      })?;

    info!(location = ?options.location, "database connected");
    Ok(Self { inner })
  }

  /// Probe the connection with a trivial round-trip.
  pub async fn is_live(&self) -> bool {
    self
      .inner
      .call(|conn| Ok(conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?))
      .await
      .is_ok_and(|one| one == 1)
  }

  /// Fail fast with [`Error::ConnectionLost`] unless the connection is live.
  pub async fn ensure_live(&self) -> Result<()> {
    if self.is_live().await {
      Ok(())
    } else {
      debug!("liveness probe failed");
      Err(Error::ConnectionLost)
    }
  }

  /// Run `function` on the connection thread, mapping any fault according
  /// to `op`.
  pub(crate) async fn call<F, R>(&self, op: Op, function: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R>
      + Send
      + 'static,
    R: Send + 'static,
  {
    self
      .inner
      .call(function)
      .await
      .map_err(|e| store_fault(op, e))
  }

  /// Close the connection. Later calls fail with [`Error::ConnectionLost`].
  ///
  /// Closing an already-closed connection is a no-op.
  pub async fn close(&self) -> Result<()> {
    self
      .inner
      .clone()
      .close()
      .await
      .map_err(|e| Error::Connection(e.to_string()))?;
    info!("database connection closed");
    Ok(())
  }
}
