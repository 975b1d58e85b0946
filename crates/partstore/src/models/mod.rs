mod part;

pub use part::{ApiMessage, ChangesResponse, CreatedResponse, DeletedResponse, ErrorResponse};
