//! Unified error types for the trip planning core.
//!
//! Synchronous operations surface `Validation`, `TripNotFound`,
//! `ExpenseNotFound`, and `Forbidden` as distinct signals the routing layer
//! can branch on. `Generation` only ever occurs inside the background
//! regeneration task, where it is logged and never returned to a caller.

use thiserror::Error;

/// All errors produced by the trip planning core.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: bad date range, negative budget or companion count,
    /// unparseable amount, or an expense referenced through the wrong trip.
    /// Always rejected before any write.
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable description of the rejected input
        message: String,
    },

    /// The referenced trip id does not exist.
    #[error("trip not found with id: {id}")]
    TripNotFound {
        /// The trip id that was looked up
        id: i64,
    },

    /// The referenced expense id does not exist.
    #[error("expense not found with id: {id}")]
    ExpenseNotFound {
        /// The expense id that was looked up
        id: i64,
    },

    /// The entity exists but the requester is not its owner.
    #[error("forbidden: {message}")]
    Forbidden {
        /// Description of the denied access
        message: String,
    },

    /// The itinerary content generator failed. Only raised inside the
    /// background task; logged there, never surfaced to the original request.
    #[error("itinerary generation failed: {message}")]
    Generation {
        /// Description of the generator failure
        message: String,
    },

    /// Database error from the persistence layer.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error.
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
