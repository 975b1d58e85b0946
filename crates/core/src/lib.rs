//! Functional core for partstore.
//!
//! Pure domain types, sample data and the storage contract. Nothing in this
//! crate performs I/O; backends live in the `partstore` server crate.

pub mod part;
pub mod storage;
