//! haven-core
//!
//! Pure domain types shared by the Haven crates. No I/O — this is the
//! vocabulary for mood tracking that the instrument and aggregation crates
//! build on.

pub mod error;
pub mod models;
