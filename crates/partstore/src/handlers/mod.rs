pub mod error;
pub mod health;
pub mod parts;

pub use error::{AppError, ValidationError};
