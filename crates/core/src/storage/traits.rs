use async_trait::async_trait;

use crate::part::{Part, PartInput};

use super::Result;

/// Repository for part operations.
///
/// Every backend must behave identically: parameterized statements only,
/// `part_number` unique, ids never reused, and mutations report a change
/// count instead of failing when the id does not exist.
#[async_trait]
pub trait PartRepository: Send + Sync {
    /// Ensures the `parts` table exists. Safe to call repeatedly.
    async fn initialize(&self) -> Result<()>;

    /// Inserts each part whose `part_number` is not already stored.
    ///
    /// Returns the number of rows actually inserted.
    async fn seed(&self, parts: &[PartInput]) -> Result<u64>;

    /// Lists every part, ordered by id.
    async fn list_parts(&self) -> Result<Vec<Part>>;

    /// Gets a part by its id.
    async fn get_part(&self, id: i64) -> Result<Option<Part>>;

    /// Creates a part and returns its generated id.
    ///
    /// Fails with `ConstraintViolation` when the part number already exists.
    async fn create_part(&self, input: &PartInput) -> Result<i64>;

    /// Overwrites all business fields of a part. Returns the change count (0 or 1).
    async fn update_part(&self, id: i64, input: &PartInput) -> Result<u64>;

    /// Deletes a part. Returns the change count (0 or 1).
    async fn delete_part(&self, id: i64) -> Result<u64>;
}
