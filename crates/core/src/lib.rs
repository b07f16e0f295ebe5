//! Domain types shared by the database and HTTP layers.

pub mod error;
pub mod movie_query;
pub mod types;
