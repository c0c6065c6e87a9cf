//! Text rendering for the public board and the admin panel.
//!
//! Public output goes through [`PublicStatus`] only; the real statuses
//! of system-locked tickets appear solely in the admin panel.

use rifa_core::{Pool, PoolStats, PublicStatus, TicketStatus};

const GRID_COLUMNS: usize = 5;

fn public_marker(status: PublicStatus) -> &'static str {
    match status {
        PublicStatus::Available => " ",
        PublicStatus::Pending => "~",
        PublicStatus::Sold => "x",
    }
}

/// The public ticket grid: id, name and generic status marker.
pub fn board(pool: &Pool) -> String {
    let mut out = String::new();
    for row in pool.tickets().chunks(GRID_COLUMNS) {
        for ticket in row {
            out.push_str(&format!(
                "[{}] #{:02} {:<12} ",
                public_marker(ticket.public_status()),
                ticket.id,
                ticket.name
            ));
        }
        out.push('\n');
    }
    out.push_str("\n[ ] disponível   [~] pendente   [x] vendido\n");
    out.push_str(&progress(pool));
    out
}

/// Public sales progress line.
pub fn progress(pool: &Pool) -> String {
    let sold = pool.public_sold_count();
    let total = pool.len();
    let filled = if total == 0 { 0 } else { sold * 20 / total };
    format!(
        "[{}{}] {} de {} nomes vendidos\n",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        sold,
        total
    )
}

fn admin_status_label(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Available => "disponível",
        TicketStatus::PendingUser => "aguardando aprovação",
        TicketStatus::Sold => "vendido (real)",
        TicketStatus::SystemLockedPending => "travado (visual pendente)",
        TicketStatus::SystemLockedSold => "travado (visual vendido)",
    }
}

/// The admin table: real statuses and buyer info, review order.
pub fn panel(pool: &Pool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<14} {:<26} {}\n",
        "#", "nome", "status real", "comprador"
    ));
    for ticket in pool.admin_order() {
        let buyer = ticket
            .buyer
            .as_ref()
            .map(|b| format!("{} {}", b.name, b.phone))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<4} {:<14} {:<26} {}\n",
            ticket.id,
            ticket.name,
            admin_status_label(ticket.status),
            buyer
        ));
    }
    out
}

/// Status counts for the admin dashboard.
pub fn stats(stats: &PoolStats) -> String {
    format!(
        "disponíveis: {}  pendentes (real): {}  travados (sistema): {}  vendas reais: {}\n",
        stats.available, stats.pending_user, stats.system_locked, stats.sold
    )
}
