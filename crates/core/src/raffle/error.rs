use thiserror::Error;

use super::types::TicketStatus;

/// Error type for pool operations.
///
/// Every failure is recoverable at the call site: operations validate
/// before mutating, so an `Err` always leaves the pool untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolError {
    /// Unknown ticket id.
    #[error("Ticket not found: #{0}")]
    NotFound(u32),

    /// Operation not permitted from the ticket's current status.
    #[error("Cannot {operation} ticket #{ticket_id}: current status is {current_status}")]
    InvalidState {
        ticket_id: u32,
        current_status: TicketStatus,
        operation: &'static str,
    },

    /// Pool construction rejected its inputs.
    #[error("Invalid pool setup: {0}")]
    InvalidSetup(String),
}
