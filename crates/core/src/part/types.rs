use serde::{Deserialize, Serialize};

/// A stored part record.
///
/// `id` is assigned by the storage backend on insert and never changes
/// afterwards. Ids of deleted parts are not handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub part_number: String,
    /// Extended length, in millimetres.
    pub extended_length: i64,
    /// Stroke, in millimetres.
    pub stroke: i64,
    /// Free-form force rating, e.g. `"350N"`.
    pub force: String,
}

impl Part {
    /// Builds a stored part from its id and business fields.
    pub fn from_input(id: i64, input: PartInput) -> Self {
        Self {
            id,
            part_number: input.part_number,
            extended_length: input.extended_length,
            stroke: input.stroke,
            force: input.force,
        }
    }

    /// Returns the business fields of this part.
    pub fn to_input(&self) -> PartInput {
        PartInput {
            part_number: self.part_number.clone(),
            extended_length: self.extended_length,
            stroke: self.stroke,
            force: self.force.clone(),
        }
    }
}

/// The four business fields of a part, as accepted by create and update.
///
/// All fields are required; there is no server-side defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartInput {
    pub part_number: String,
    pub extended_length: i64,
    pub stroke: i64,
    pub force: String,
}

impl PartInput {
    pub fn new(
        part_number: impl Into<String>,
        extended_length: i64,
        stroke: i64,
        force: impl Into<String>,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            extended_length,
            stroke,
            force: force.into(),
        }
    }
}
