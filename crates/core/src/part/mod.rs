mod sample;
mod types;

pub use sample::sample_parts;
pub use types::{Part, PartInput};
