//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O. Every statement
//! takes its values as numbered parameters.

/// SQL statements to create the parts table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row again.
/// The explicit unique index also covers a `parts` table created without the
/// column constraint; it fails if that table already holds duplicates.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS parts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    part_number TEXT NOT NULL UNIQUE,
    extended_length INTEGER NOT NULL,
    stroke INTEGER NOT NULL,
    force TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS parts_part_number_key ON parts (part_number);
"#;

pub const INSERT_PART: &str = r#"
INSERT INTO parts (part_number, extended_length, stroke, force)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const INSERT_PART_IF_ABSENT: &str = r#"
INSERT OR IGNORE INTO parts (part_number, extended_length, stroke, force)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_PARTS: &str = r#"
SELECT id, part_number, extended_length, stroke, force
FROM parts
ORDER BY id ASC
"#;

pub const SELECT_PART_BY_ID: &str = r#"
SELECT id, part_number, extended_length, stroke, force
FROM parts
WHERE id = ?1
"#;

pub const UPDATE_PART: &str = r#"
UPDATE parts
SET part_number = ?2, extended_length = ?3, stroke = ?4, force = ?5
WHERE id = ?1
"#;

pub const DELETE_PART: &str = r#"
DELETE FROM parts
WHERE id = ?1
"#;
