//! HeartSignal domain logic.
//!
//! Pure building blocks shared by the persistence and HTTP crates:
//! geodesic distance, proximity filtering, and the domain error type.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod geo;
pub mod proximity;
pub mod types;
