//! SQLite row conversion functions.

use partstore_core::part::Part;
use rusqlite::Row;

/// Convert a SQLite row to a Part.
///
/// Expected columns: id, part_number, extended_length, stroke, force
pub fn row_to_part(row: &Row) -> rusqlite::Result<Part> {
    Ok(Part {
        id: row.get(0)?,
        part_number: row.get(1)?,
        extended_length: row.get(2)?,
        stroke: row.get(3)?,
        force: row.get(4)?,
    })
}
