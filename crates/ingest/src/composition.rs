//! Case composition of a snapshot.

use types::{Composition, SnapshotRecord};

/// Shares of dead, cured and active cases in the confirmed total.
///
/// Active cases are `confirmed - dead - cured`, floored at zero. Shares are
/// normalized over the three parts, so they always sum to 100 even when
/// the API reports more resolved cases than confirmed ones. `None` when
/// there are no cases at all.
pub fn composition(record: &SnapshotRecord) -> Option<Composition> {
    let dead = record.dead_count;
    let cured = record.cured_count;
    let active = record.confirmed_count.saturating_sub(dead + cured);
    let total = dead + cured + active;
    if record.confirmed_count == 0 || total == 0 {
        return None;
    }
    let pct = |part: u64| part as f64 * 100.0 / total as f64;
    Some(Composition {
        dead_pct: pct(dead),
        cured_pct: pct(cured),
        active_pct: pct(active),
    })
}
