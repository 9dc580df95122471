//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! update, delete) for one resource. Handlers delegate to the corresponding
//! repository in `kennel_db` and map errors via [`AppError`](crate::error::AppError).

pub mod breed;
pub mod dog;
