//! PostgreSQL schema definitions and SQL query constants.

/// SQL statement to create the parts table.
///
/// `BIGSERIAL` ids come from a sequence and are never handed out twice.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS parts (
    id BIGSERIAL PRIMARY KEY,
    part_number TEXT NOT NULL UNIQUE,
    extended_length BIGINT NOT NULL,
    stroke BIGINT NOT NULL,
    force TEXT NOT NULL
)
"#;

/// Unique index on `part_number` for a `parts` table created without the
/// column constraint. A no-op when the constraint's own index already exists.
///
/// Kept apart from [`CREATE_TABLES`] because a prepared statement holds a
/// single command.
pub const CREATE_PART_NUMBER_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS parts_part_number_key ON parts (part_number)
"#;

pub const INSERT_PART: &str = r#"
INSERT INTO parts (part_number, extended_length, stroke, force)
VALUES ($1, $2, $3, $4)
RETURNING id
"#;

pub const INSERT_PART_IF_ABSENT: &str = r#"
INSERT INTO parts (part_number, extended_length, stroke, force)
VALUES ($1, $2, $3, $4)
ON CONFLICT (part_number) DO NOTHING
"#;

pub const SELECT_PARTS: &str = r#"
SELECT id, part_number, extended_length, stroke, force
FROM parts
ORDER BY id ASC
"#;

pub const SELECT_PART_BY_ID: &str = r#"
SELECT id, part_number, extended_length, stroke, force
FROM parts
WHERE id = $1
"#;

pub const UPDATE_PART: &str = r#"
UPDATE parts
SET part_number = $2, extended_length = $3, stroke = $4, force = $5
WHERE id = $1
"#;

pub const DELETE_PART: &str = r#"
DELETE FROM parts
WHERE id = $1
"#;
