//! Raffle ticket pool: statuses, transitions and the scarcity policy.

mod error;
mod names;
mod pool;
mod types;

pub use error::PoolError;
pub use names::DEFAULT_NAMES;
pub use pool::{Pool, DEFAULT_LOCK_COUNT, POOL_SIZE};
pub use types::{Buyer, PoolStats, PublicStatus, Ticket, TicketStatus};
