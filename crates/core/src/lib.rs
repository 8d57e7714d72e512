//! Domain primitives shared by the GameFinder `db` and `api` crates.

pub mod error;
pub mod hashing;
pub mod tags;
pub mod types;
