//! Sample parts used to seed a fresh store.

use super::types::PartInput;

/// Returns the five sample gas struts seeded on startup.
///
/// Seeding is insert-if-absent keyed on `part_number`, so calling this on
/// every start is safe for persistent stores.
///
/// # Example
///
/// ```
/// use partstore_core::part::sample_parts;
///
/// let parts = sample_parts();
/// assert_eq!(parts.len(), 5);
/// assert_eq!(parts[0].part_number, "30101");
/// ```
pub fn sample_parts() -> Vec<PartInput> {
    vec![
        PartInput::new("30101", 650, 224, "350N"),
        PartInput::new("30102", 700, 250, "400N"),
        PartInput::new("30103", 600, 200, "300N"),
        PartInput::new("30104", 750, 300, "450N"),
        PartInput::new("30105", 800, 350, "500N"),
    ]
}
