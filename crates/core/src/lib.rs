//! Domain rules for the kennel service.
//!
//! Nothing in this crate touches the database or HTTP. It owns the error
//! taxonomy, breed title normalization, the dog enum choice tables, the
//! inbound payload schemas and the search pattern builder, so the `db` and
//! `api` crates share one definition of every rule.

pub mod breed;
pub mod choices;
pub mod dog;
pub mod error;
pub mod search;
pub mod types;
pub mod validation;
