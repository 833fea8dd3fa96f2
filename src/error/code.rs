//! Registration code error types.

use thiserror::Error;

/// Error raised while generating or parsing registration codes.
#[derive(Error, Debug)]
pub enum CodeError {
    /// A stored code does not match the expected segment layout.
    ///
    /// Malformed codes are reported rather than silently repaired; the offending row
    /// has to be corrected before a transfer can rewrite its code.
    #[error("Malformed registration code {code:?}: {reason}")]
    MalformedCode {
        /// The code as found in the database.
        code: String,
        /// What made it unparseable.
        reason: String,
    },
    /// No unused campus code was found within the attempt budget.
    #[error("No unused campus code found for campus {campus_id} after {attempts} attempts")]
    CampusCodeExhausted {
        /// Campus the allocation was for.
        campus_id: i32,
        /// How many candidate codes were tried.
        attempts: u32,
    },
    /// Freshly allocated sequence numbers kept colliding with existing codes.
    ///
    /// The counter only moves forward, so sustained collisions point at rows written
    /// outside the allocator rather than at contention.
    #[error("Sequence allocation for counter {key:?} kept colliding after {attempts} attempts")]
    SequenceCollision {
        /// Counter key the sequence was drawn from.
        key: String,
        /// How many sequence values were tried.
        attempts: u32,
    },
}
