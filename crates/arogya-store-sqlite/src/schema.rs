//! SQL schema for the appointment store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The status CHECK mirrors the enum enforced at the validation layer, so a
/// hand-edited database cannot smuggle in an unknown lifecycle state.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS appointments (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,   -- stored lowercased
    phone       TEXT NOT NULL,
    doctor      TEXT NOT NULL,   -- kebab-case practitioner identifier
    date        TEXT NOT NULL,   -- ISO 8601 calendar date
    time        TEXT NOT NULL,
    reason      TEXT NOT NULL,
    status      TEXT NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'confirmed', 'cancelled')),
    created_at  TEXT NOT NULL    -- RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS appointments_status_idx  ON appointments(status);
CREATE INDEX IF NOT EXISTS appointments_created_idx ON appointments(created_at);

PRAGMA user_version = 1;
";
