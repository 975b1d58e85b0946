//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use partstore_core::part::{Part, PartInput};
use partstore_core::storage::{PartRepository, RepositoryError, Result};

const UNIQUE_PART_NUMBER: &str = "UNIQUE constraint failed: parts.part_number";

#[derive(Debug)]
struct Table {
    parts: BTreeMap<i64, Part>,
    /// Next id to hand out. Only ever increases, so deleted ids are not reused.
    next_id: i64,
}

impl Table {
    fn part_number_taken(&self, part_number: &str, except: Option<i64>) -> bool {
        self.parts
            .values()
            .any(|p| p.part_number == part_number && Some(p.id) != except)
    }

    fn insert(&mut self, input: &PartInput) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.parts.insert(id, Part::from_input(id, input.clone()));
        id
    }
}

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                parts: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl PartRepository for InMemoryRepository {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn seed(&self, parts: &[PartInput]) -> Result<u64> {
        let mut table = self.table.write().await;
        let mut inserted = 0;
        for input in parts {
            if !table.part_number_taken(&input.part_number, None) {
                table.insert(input);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn list_parts(&self) -> Result<Vec<Part>> {
        let table = self.table.read().await;
        Ok(table.parts.values().cloned().collect())
    }

    async fn get_part(&self, id: i64) -> Result<Option<Part>> {
        let table = self.table.read().await;
        Ok(table.parts.get(&id).cloned())
    }

    async fn create_part(&self, input: &PartInput) -> Result<i64> {
        let mut table = self.table.write().await;
        if table.part_number_taken(&input.part_number, None) {
            return Err(RepositoryError::ConstraintViolation(
                UNIQUE_PART_NUMBER.to_string(),
            ));
        }
        Ok(table.insert(input))
    }

    async fn update_part(&self, id: i64, input: &PartInput) -> Result<u64> {
        let mut table = self.table.write().await;
        if !table.parts.contains_key(&id) {
            return Ok(0);
        }
        if table.part_number_taken(&input.part_number, Some(id)) {
            return Err(RepositoryError::ConstraintViolation(
                UNIQUE_PART_NUMBER.to_string(),
            ));
        }
        table.parts.insert(id, Part::from_input(id, input.clone()));
        Ok(1)
    }

    async fn delete_part(&self, id: i64) -> Result<u64> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.parts.remove(&id).is_some()))
    }
}
