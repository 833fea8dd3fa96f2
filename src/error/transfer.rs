//! Transfer workflow error types.

use thiserror::Error;

/// Error raised by the transfer request workflow.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The requested status change is not permitted from the current status.
    ///
    /// Approved, declined and cancelled requests are terminal; nothing moves them.
    #[error("Transfer request {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Transfer request being modified.
        id: i32,
        /// Status the request currently holds.
        from: String,
        /// Status the caller asked for.
        to: String,
    },
    /// Someone other than the requesting user tried to submit or cancel the request.
    #[error("Only the requesting user may modify transfer request {id}")]
    NotRequester {
        /// Transfer request being modified.
        id: i32,
    },
    /// Someone other than the receiving campus principal tried to decide the request.
    #[error("Only the receiving campus principal may decide transfer request {id}")]
    NotReceivingApprover {
        /// Transfer request being decided.
        id: i32,
    },
    /// The destination campus has nobody who can review inbound transfers.
    #[error("Campus {campus_id} has no principal to review inbound transfers")]
    NoReceivingApprover {
        /// Destination campus of the request.
        campus_id: i32,
    },
    /// The request would leave the subject exactly where they already are.
    #[error("Transfer does not change campus or shift")]
    NoDestinationChange,
    /// The subject never received a registration code, so there is nothing to rewrite.
    #[error("Subject of transfer request {id} has no registration code to rewrite")]
    SubjectNotCoded {
        /// Transfer request being approved.
        id: i32,
    },
}
