//! Encoding helpers between the contact model and SQL.
//!
//! Holds the shared column list, the row decoder, the `fold` SQL function
//! and the conversion of a free-text search query into a `LIKE` pattern.

use rolodex_core::{Contact, ContactId};
use rusqlite::functions::FunctionFlags;

/// Columns selected for every contact read, in [`decode_contact`] order.
pub const CONTACT_COLUMNS: &str = "id, first_name, last_name, email, mobile";

/// Listing order shared by `get_all` and `search`. The trailing `id` makes
/// the order total, so repeated reads agree even on duplicate names.
pub const DEFAULT_ORDER: &str = "fold(last_name) ASC, fold(first_name) ASC, id ASC";

/// Register `fold(text)`, the Unicode lowercase of its argument.
///
/// SQLite's `NOCASE` collation and `LIKE` only fold ASCII, so every
/// case-insensitive comparison or ordering goes through `fold` instead.
/// `NULL` folds to `NULL`.
pub fn register_fold(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    "fold",
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|s| s.to_lowercase())),
  )
}

pub fn decode_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
  Ok(Contact {
    id:         ContactId(row.get(0)?),
    first_name: row.get(1)?,
    last_name:  row.get(2)?,
    email:      row.get(3)?,
    mobile:     row.get(4)?,
  })
}

/// Escape character used with `LIKE ... ESCAPE`.
pub const LIKE_ESCAPE: char = '\\';

/// Wrap the folded `query` as `%query%`, escaping `LIKE` metacharacters so
/// the query matches as a literal substring of a `fold`ed column.
pub fn like_pattern(query: &str) -> String {
  let mut pattern = String::with_capacity(query.len() + 2);
  pattern.push('%');
  for c in query.to_lowercase().chars() {
    if matches!(c, '%' | '_' | LIKE_ESCAPE) {
      pattern.push(LIKE_ESCAPE);
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}
