use std::fmt;

/// Error type for the TSP core.
///
/// Every failure carries its kind plus enough context to act on it; nothing
/// here prints or logs. Degenerate but well-defined inputs (one or two
/// cities) are handled by the solvers and never surface as errors.
#[derive(Debug)]
pub enum TspError {
    /// Instance failed construction-time validation
    InvalidInstance(String),

    /// A tour does not satisfy the closed-permutation invariant
    InvalidTour(String),

    /// A table-driven solver would exceed its configured memory budget
    CapacityExceeded {
        states: u128,
        required_bytes: u128,
        budget_bytes: u64,
    },

    /// An internal graph invariant was breached; a defect, not an input error
    InvariantViolation(String),
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::InvalidInstance(msg) => {
                write!(f, "Invalid instance: {msg}")
            }
            TspError::InvalidTour(msg) => {
                write!(f, "Invalid tour: {msg}")
            }
            TspError::CapacityExceeded {
                states,
                required_bytes,
                budget_bytes,
            } => {
                write!(
                    f,
                    "Capacity exceeded: {states} states need {required_bytes} bytes, \
                     budget is {budget_bytes} bytes"
                )
            }
            TspError::InvariantViolation(msg) => {
                write!(f, "Internal invariant violated: {msg}")
            }
        }
    }
}

impl std::error::Error for TspError {}
