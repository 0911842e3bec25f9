//! SQL schema for the Rolodex SQLite store.
//!
//! Applied by `SqliteRepository::ensure_schema` on every startup. Each
//! statement is `IF NOT EXISTS`, so re-running it never touches existing
//! rows. `PRAGMA user_version` records the schema version for future
//! migrations.

/// Full schema DDL; idempotent.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
    last_name   TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
    email       TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
    mobile      TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
    created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    -- Column widths.
    CHECK (length(first_name) <= 100),
    CHECK (length(last_name)  <= 100),
    CHECK (length(email)      <= 255),
    CHECK (length(mobile)     <= 50),
    -- A contact always has at least one name, even when written in bulk.
    -- Space, tab, CR and LF do not count as a name.
    CHECK (
        trim(first_name, ' ' || char(9, 10, 13)) <> ''
        OR trim(last_name, ' ' || char(9, 10, 13)) <> ''
    )
);

CREATE INDEX IF NOT EXISTS contacts_name_idx  ON contacts(first_name, last_name);
CREATE INDEX IF NOT EXISTS contacts_email_idx ON contacts(email);

-- Keep updated_at current on every row modification, unless the statement
-- set updated_at itself.
CREATE TRIGGER IF NOT EXISTS contacts_touch_updated_at
AFTER UPDATE ON contacts
FOR EACH ROW
WHEN NEW.updated_at = OLD.updated_at
BEGIN
    UPDATE contacts SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
END;

PRAGMA user_version = 1;
";

