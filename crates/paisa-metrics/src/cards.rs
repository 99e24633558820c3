//! Credit card snapshot dedup and limit/due roll-ups.

use paisa_core::CreditCardSnapshot;
use serde::{Deserialize, Serialize};

/// Collapses snapshots to one per physical card.
///
/// Cards are identified by `(card_name, last_four_digits)`; the snapshot
/// with the newest `created_at` wins. Cards appear in the order their
/// first snapshot appears.
#[must_use]
pub fn unique_cards(snapshots: &[CreditCardSnapshot]) -> Vec<CreditCardSnapshot> {
    let mut cards: Vec<CreditCardSnapshot> = Vec::new();
    for snapshot in snapshots {
        match cards.iter_mut().find(|c| c.card_key() == snapshot.card_key()) {
            Some(existing) => {
                if snapshot.created_at >= existing.created_at {
                    *existing = snapshot.clone();
                }
            }
            None => cards.push(snapshot.clone()),
        }
    }
    cards
}

/// Limit, utilization and due totals across deduplicated cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CardTotals {
    /// Number of distinct cards.
    pub card_count: usize,
    /// Sum of card limits.
    pub total_limit: f64,
    /// Sum of utilized amounts.
    pub total_utilized: f64,
    /// Sum of statement dues.
    pub total_due: f64,
    /// Utilized as a percentage of the combined limit, zero when no
    /// limit is known.
    pub utilization_pct: f64,
}

impl CardTotals {
    /// Sums limits, utilization and dues over already-deduplicated cards.
    #[must_use]
    pub fn aggregate(cards: &[CreditCardSnapshot]) -> Self {
        let mut totals = CardTotals {
            card_count: cards.len(),
            ..CardTotals::default()
        };
        for card in cards {
            totals.total_limit += card.card_limit;
            totals.total_utilized += card.utilized_amount;
            totals.total_due += card.due_amount;
        }
        totals.utilization_pct = if totals.total_limit > 0.0 {
            totals.total_utilized / totals.total_limit * 100.0
        } else {
            0.0
        };
        totals
    }
}
