//! End-to-end pool lifecycle scenarios against the public API.

use rifa_core::testing::{sample_names, seeded_rng};
use rifa_core::{Pool, PoolError, TicketStatus, DEFAULT_LOCK_COUNT, POOL_SIZE};

fn standard_pool(seed: u64) -> Pool {
    Pool::new(sample_names(), DEFAULT_LOCK_COUNT, &mut seeded_rng(seed)).unwrap()
}

fn an_available_id(pool: &Pool) -> u32 {
    pool.tickets()
        .iter()
        .find(|t| t.is_available())
        .expect("a standard pool starts with available tickets")
        .id
}

#[test]
fn reservation_approval_releases_scarcity() {
    let pool = standard_pool(100);
    let id = an_available_id(&pool);
    let initial_locked = pool.stats().system_locked;
    assert_eq!(initial_locked, DEFAULT_LOCK_COUNT);

    let reserved = pool.reserve(id, "Ana", "+5511999990000").unwrap();
    let ticket = reserved.get(id).unwrap();
    assert_eq!(ticket.status, TicketStatus::PendingUser);
    assert_eq!(ticket.buyer.as_ref().unwrap().name, "Ana");

    let approved = reserved.approve(id, &mut seeded_rng(101)).unwrap();
    assert_eq!(approved.get(id).unwrap().status, TicketStatus::Sold);
    assert_eq!(approved.stats().system_locked, initial_locked - 1);

    // Exactly one formerly locked ticket became available.
    let newly_available: Vec<u32> = reserved
        .tickets()
        .iter()
        .zip(approved.tickets())
        .filter(|(before, after)| {
            before.status.is_system_locked() && after.status == TicketStatus::Available
        })
        .map(|(before, _)| before.id)
        .collect();
    assert_eq!(newly_available.len(), 1);
}

#[test]
fn reservation_followed_by_rejection_restores_the_ticket() {
    let pool = standard_pool(200);
    let id = an_available_id(&pool);

    let reserved = pool.reserve(id, "Bia", "+5511888880000").unwrap();
    let rejected = reserved.reject(id).unwrap();

    let ticket = rejected.get(id).unwrap();
    assert_eq!(ticket.status, TicketStatus::Available);
    assert!(ticket.buyer.is_none());

    // No other ticket changed relative to the pre-reservation pool.
    for (before, after) in pool.tickets().iter().zip(rejected.tickets()) {
        if before.id != id {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn approving_an_available_ticket_fails_and_changes_nothing() {
    let pool = standard_pool(300);
    let id = an_available_id(&pool);
    let snapshot = pool.clone();

    let err = pool.approve(id, &mut seeded_rng(301)).unwrap_err();
    assert!(matches!(err, PoolError::InvalidState { .. }));
    assert_eq!(pool, snapshot);
}

#[test]
fn draining_all_scarcity_through_repeated_sales() {
    let mut pool = standard_pool(400);
    let mut rng = seeded_rng(401);

    // Sell tickets until every system lock has been released.
    let mut sales = 0;
    while pool.stats().system_locked > 0 {
        let id = an_available_id(&pool);
        pool = pool
            .reserve(id, format!("Comprador {}", sales), "+55")
            .unwrap()
            .approve(id, &mut rng)
            .unwrap();
        sales += 1;
    }
    assert_eq!(sales, DEFAULT_LOCK_COUNT);

    // Further sales succeed with a no-op release step.
    let id = an_available_id(&pool);
    pool = pool
        .reserve(id, "Último", "+55")
        .unwrap()
        .approve(id, &mut rng)
        .unwrap();

    let stats = pool.stats();
    assert_eq!(stats.system_locked, 0);
    assert_eq!(stats.sold, sales + 1);
    assert_eq!(pool.len(), POOL_SIZE);
}

#[test]
fn ticket_count_is_invariant_across_long_sequences() {
    let mut pool = standard_pool(500);
    let mut rng = seeded_rng(501);

    for round in 0..30u32 {
        let id = an_available_id(&pool);
        pool = pool.reserve(id, "Alguém", "+55").unwrap();
        pool = match round % 3 {
            0 => pool.approve(id, &mut rng).unwrap(),
            1 => pool.reject(id).unwrap(),
            _ => {
                let approved = pool.approve(id, &mut rng).unwrap();
                approved.reset(id).unwrap()
            }
        };

        assert_eq!(pool.len(), POOL_SIZE);
        let stats = pool.stats();
        assert_eq!(
            stats.available + stats.pending_user + stats.system_locked + stats.sold,
            POOL_SIZE
        );
    }
}

#[test]
fn public_projection_never_exposes_lock_statuses() {
    let pool = standard_pool(600);
    for ticket in pool.tickets() {
        let public = ticket.public_status();
        match ticket.status {
            TicketStatus::SystemLockedSold => {
                assert_eq!(public, TicketStatus::Sold.public());
            }
            TicketStatus::SystemLockedPending => {
                assert_eq!(public, TicketStatus::PendingUser.public());
            }
            _ => {}
        }
    }
}
