//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO carrying the client-supplied fields, used for
//!   both inserts and full-record replacement

pub mod director;
pub mod genre;
pub mod movie;
