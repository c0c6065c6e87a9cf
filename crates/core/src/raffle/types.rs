//! Core raffle ticket data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale status of a single raffle ticket.
///
/// State machine flow:
/// ```text
/// Available -> PendingUser -> Sold -> Available (reset)
///                  |
///                  v
///              Available (reject)
///
/// SystemLockedPending / SystemLockedSold -> Available
///     (released one at a time on approve, or individually via reset)
/// ```
///
/// The two `SystemLocked*` statuses are artificial scarcity: they are
/// assigned at pool creation, never tied to a real buyer, and render to
/// the public exactly like their real counterparts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Open for reservation.
    Available,
    /// Reserved by a real user, waiting for admin confirmation.
    PendingUser,
    /// Real verified sale.
    Sold,
    /// Locked by the system, shown to the public as pending.
    SystemLockedPending,
    /// Locked by the system, shown to the public as sold.
    SystemLockedSold,
}

impl TicketStatus {
    /// Returns true for the two artificial-scarcity statuses.
    pub fn is_system_locked(&self) -> bool {
        matches!(
            self,
            TicketStatus::SystemLockedPending | TicketStatus::SystemLockedSold
        )
    }

    /// Projection seen by non-admin callers.
    pub fn public(&self) -> PublicStatus {
        match self {
            TicketStatus::Available => PublicStatus::Available,
            TicketStatus::PendingUser | TicketStatus::SystemLockedPending => PublicStatus::Pending,
            TicketStatus::Sold | TicketStatus::SystemLockedSold => PublicStatus::Sold,
        }
    }

    /// Returns the status as a string (for error messages and filtering).
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Available => "available",
            TicketStatus::PendingUser => "pending_user",
            TicketStatus::Sold => "sold",
            TicketStatus::SystemLockedPending => "system_locked_pending",
            TicketStatus::SystemLockedSold => "system_locked_sold",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the public sees for a ticket.
///
/// System-locked statuses must be indistinguishable from their real
/// counterparts here; only `Available` is actionable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PublicStatus {
    Available,
    Pending,
    Sold,
}

/// Buyer details recorded on reservation.
///
/// Present only while a ticket is `PendingUser` or `Sold`; modeling the
/// pair as one optional struct keeps half-cleared buyer info
/// unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Buyer {
    pub name: String,
    pub phone: String,
}

impl Buyer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// One raffle entry.
///
/// Identity (`id`, `name`) is fixed at pool creation; only `status`,
/// `buyer` and `updated_at` change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// 1-based position in the pool, stable for the pool lifetime.
    pub id: u32,

    /// Display name, fixed at creation.
    pub name: String,

    /// Current sale status.
    pub status: TicketStatus,

    /// Buyer details, present only while `PendingUser` or `Sold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Buyer>,

    /// Set when a reservation is recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Returns true if the ticket can be reserved.
    pub fn is_available(&self) -> bool {
        self.status == TicketStatus::Available
    }

    /// Public projection of the current status.
    pub fn public_status(&self) -> PublicStatus {
        self.status.public()
    }
}

/// Status counts for the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Tickets open for reservation.
    pub available: usize,
    /// Real reservations waiting for a decision.
    pub pending_user: usize,
    /// Artificially locked tickets (both locked statuses).
    pub system_locked: usize,
    /// Real verified sales.
    pub sold: usize,
}
