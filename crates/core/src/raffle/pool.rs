//! The ticket pool and its transition operations.
//!
//! The pool is a value: every operation takes `&self`, validates, and
//! returns a fresh snapshot. Callers that need randomness (creation,
//! approve) receive an injected `Rng` so outcomes are reproducible under
//! a seeded generator.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::error::PoolError;
use super::types::{Buyer, PoolStats, Ticket, TicketStatus};

/// Number of tickets in a standard raffle.
pub const POOL_SIZE: usize = 50;

/// Number of tickets locked by the system at creation.
pub const DEFAULT_LOCK_COUNT: usize = 25;

/// An immutable snapshot of the full ticket collection.
///
/// Tickets keep their creation order; `id` is the 1-based position. The
/// collection never grows or shrinks after construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pool {
    tickets: Vec<Ticket>,
}

impl Pool {
    /// Create a pool with `lock_count` tickets pre-locked by the system.
    ///
    /// Each ticket has equal probability of ending up in the locked set
    /// (unbiased shuffle of all positions, first `lock_count` taken), and
    /// each locked ticket lands on `SystemLockedSold` or
    /// `SystemLockedPending` by fair coin. This runs once per pool; a
    /// pool value cannot be re-seeded afterwards.
    pub fn new<R: Rng>(
        names: Vec<String>,
        lock_count: usize,
        rng: &mut R,
    ) -> Result<Self, PoolError> {
        if names.len() != POOL_SIZE {
            return Err(PoolError::InvalidSetup(format!(
                "expected {} ticket names, got {}",
                POOL_SIZE,
                names.len()
            )));
        }
        if lock_count > names.len() {
            return Err(PoolError::InvalidSetup(format!(
                "lock_count {} exceeds pool size {}",
                lock_count,
                names.len()
            )));
        }

        let mut tickets: Vec<Ticket> = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Ticket {
                id: idx as u32 + 1,
                name,
                status: TicketStatus::Available,
                buyer: None,
                updated_at: None,
            })
            .collect();

        let mut indices: Vec<usize> = (0..tickets.len()).collect();
        indices.shuffle(rng);

        for &idx in indices.iter().take(lock_count) {
            tickets[idx].status = if rng.gen_bool(0.5) {
                TicketStatus::SystemLockedSold
            } else {
                TicketStatus::SystemLockedPending
            };
        }

        let pool = Self { tickets };
        info!(
            locked = lock_count,
            available = pool.stats().available,
            "Pool initialized"
        );
        Ok(pool)
    }

    /// Number of tickets in the pool.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// All tickets in id order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Look up a ticket by id.
    pub fn get(&self, id: u32) -> Option<&Ticket> {
        // Ids are the 1-based positions, so indexing beats scanning.
        self.tickets.get(id.checked_sub(1)? as usize)
    }

    fn require(&self, id: u32) -> Result<&Ticket, PoolError> {
        self.get(id).ok_or(PoolError::NotFound(id))
    }

    /// Reserve an available ticket for a buyer.
    ///
    /// `Available -> PendingUser`; records buyer details and the
    /// reservation time. No other ticket is touched.
    pub fn reserve(
        &self,
        id: u32,
        buyer_name: impl Into<String>,
        buyer_phone: impl Into<String>,
    ) -> Result<Self, PoolError> {
        let ticket = self.require(id)?;
        if ticket.status != TicketStatus::Available {
            return Err(PoolError::InvalidState {
                ticket_id: id,
                current_status: ticket.status,
                operation: "reserve",
            });
        }

        let mut next = self.clone();
        let ticket = &mut next.tickets[id as usize - 1];
        ticket.status = TicketStatus::PendingUser;
        ticket.buyer = Some(Buyer::new(buyer_name, buyer_phone));
        ticket.updated_at = Some(Utc::now());

        info!(ticket_id = id, "Ticket reserved");
        Ok(next)
    }

    /// Approve a pending reservation.
    ///
    /// `PendingUser -> Sold` (buyer retained), then one system-locked
    /// ticket chosen uniformly at random is released to `Available`.
    /// When no locked ticket remains the release step is a no-op. The
    /// release keeps the publicly visible "taken" count stable while
    /// real sales gradually replace the artificial ones.
    pub fn approve<R: Rng>(&self, id: u32, rng: &mut R) -> Result<Self, PoolError> {
        let ticket = self.require(id)?;
        if ticket.status != TicketStatus::PendingUser {
            return Err(PoolError::InvalidState {
                ticket_id: id,
                current_status: ticket.status,
                operation: "approve",
            });
        }

        let mut next = self.clone();
        next.tickets[id as usize - 1].status = TicketStatus::Sold;

        let locked_ids: Vec<u32> = next
            .tickets
            .iter()
            .filter(|t| t.status.is_system_locked())
            .map(|t| t.id)
            .collect();

        match locked_ids.choose(rng) {
            Some(&released_id) => {
                let released = &mut next.tickets[released_id as usize - 1];
                released.status = TicketStatus::Available;
                released.buyer = None;
                info!(
                    ticket_id = id,
                    released_id, "Sale approved, released one locked ticket"
                );
            }
            None => {
                debug!(ticket_id = id, "Sale approved, no locked tickets left");
            }
        }

        Ok(next)
    }

    /// Reject a pending reservation: `PendingUser -> Available`, buyer
    /// cleared. No other ticket is touched.
    pub fn reject(&self, id: u32) -> Result<Self, PoolError> {
        let ticket = self.require(id)?;
        if ticket.status != TicketStatus::PendingUser {
            return Err(PoolError::InvalidState {
                ticket_id: id,
                current_status: ticket.status,
                operation: "reject",
            });
        }

        let mut next = self.clone();
        let ticket = &mut next.tickets[id as usize - 1];
        ticket.status = TicketStatus::Available;
        ticket.buyer = None;

        info!(ticket_id = id, "Reservation rejected");
        Ok(next)
    }

    /// Release a sold or system-locked ticket back to the pool.
    ///
    /// Valid from `Sold`, `SystemLockedPending` and `SystemLockedSold`
    /// only; an already-available ticket (or one still pending a
    /// decision) is an `InvalidState` error, not a no-op. Unlike
    /// [`approve`](Self::approve) there is no coupled release.
    pub fn reset(&self, id: u32) -> Result<Self, PoolError> {
        let ticket = self.require(id)?;
        let resettable = ticket.status == TicketStatus::Sold || ticket.status.is_system_locked();
        if !resettable {
            return Err(PoolError::InvalidState {
                ticket_id: id,
                current_status: ticket.status,
                operation: "reset",
            });
        }

        let mut next = self.clone();
        let ticket = &mut next.tickets[id as usize - 1];
        ticket.status = TicketStatus::Available;
        ticket.buyer = None;

        info!(ticket_id = id, "Ticket reset to available");
        Ok(next)
    }

    /// Status counts for the admin dashboard.
    pub fn stats(&self) -> PoolStats {
        let mut stats = PoolStats::default();
        for ticket in &self.tickets {
            match ticket.status {
                TicketStatus::Available => stats.available += 1,
                TicketStatus::PendingUser => stats.pending_user += 1,
                TicketStatus::Sold => stats.sold += 1,
                TicketStatus::SystemLockedPending | TicketStatus::SystemLockedSold => {
                    stats.system_locked += 1
                }
            }
        }
        stats
    }

    /// Count of tickets the public sees as sold (real and locked alike).
    pub fn public_sold_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| {
                matches!(
                    t.status,
                    TicketStatus::Sold | TicketStatus::SystemLockedSold
                )
            })
            .count()
    }

    /// Tickets in admin review order: real pending first, then real
    /// sales, then system-locked, then available.
    pub fn admin_order(&self) -> Vec<&Ticket> {
        fn rank(status: TicketStatus) -> u8 {
            match status {
                TicketStatus::PendingUser => 0,
                TicketStatus::Sold => 1,
                TicketStatus::SystemLockedPending | TicketStatus::SystemLockedSold => 2,
                TicketStatus::Available => 3,
            }
        }

        let mut tickets: Vec<&Ticket> = self.tickets.iter().collect();
        tickets.sort_by_key(|t| (rank(t.status), t.id));
        tickets
    }
}
