//! Data model for the symmetric Euclidean TSP: the parsed instance record,
//! distance lookups, tour validation, and the core error type. No I/O
//! happens in this crate; parsing and printing belong to the caller.

pub mod error;
pub mod instance;
pub mod matrix;
pub mod tour;

pub use error::TspError;
pub use instance::Instance;
pub use matrix::DistanceMatrix;
pub use tour::{tour_length, verify_tour};
