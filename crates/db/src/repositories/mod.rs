//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Every method runs a
//! single statement; nothing here opens a transaction.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
