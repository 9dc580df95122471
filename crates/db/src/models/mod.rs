//! Row structs and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A write DTO built from the validated inbound payload

pub mod breed;
pub mod dog;
