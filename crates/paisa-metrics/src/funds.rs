//! Per-fund position summaries derived from raw buy transactions.

use paisa_core::{Date, FundKind, FundTransaction};
use serde::{Deserialize, Serialize};

/// Aggregated position of one mutual fund or stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSummary {
    /// Identifier shared by the fund's transactions.
    pub fund_id: String,
    /// Display name of the fund.
    pub fund_name: String,
    /// Mutual fund or stock.
    pub fund_kind: FundKind,
    /// Total units held across all buys.
    pub total_quantity: f64,
    /// Sum of `quantity * bought_price` over all buys.
    pub total_invested: f64,
    /// Market value at the latest known price.
    pub total_current_value: f64,
    /// Snapshot price of the most recent purchase.
    pub current_price: f64,
    /// Invested amount divided by units held, zero when nothing is held.
    pub avg_bought_price: f64,
    /// `current_value - invested`.
    pub profit_loss: f64,
    /// Profit/loss relative to invested, in percent. Zero when nothing
    /// was invested.
    pub profit_loss_pct: f64,
    /// Earliest purchase date.
    pub first_purchase_date: Date,
    /// Latest purchase date.
    pub last_purchase_date: Date,
    /// Number of buy transactions folded in.
    pub transaction_count: usize,
}

impl FundSummary {
    /// Folds one fund's transactions into a summary.
    ///
    /// Returns `None` for an empty slice. The current price is taken from
    /// the transaction with the latest `purchase_date`; on a date tie the
    /// later entry in the slice wins.
    #[must_use]
    pub fn from_transactions(transactions: &[FundTransaction]) -> Option<Self> {
        let first = transactions.first()?;

        let mut total_quantity = 0.0;
        let mut total_invested = 0.0;
        let mut latest = first;
        let mut first_purchase_date = first.purchase_date;

        for tx in transactions {
            total_quantity += tx.quantity;
            total_invested += tx.quantity * tx.bought_price;
            if tx.purchase_date >= latest.purchase_date {
                latest = tx;
            }
            if tx.purchase_date < first_purchase_date {
                first_purchase_date = tx.purchase_date;
            }
        }

        let current_price = latest.current_price;
        let total_current_value = total_quantity * current_price;
        let profit_loss = total_current_value - total_invested;
        let profit_loss_pct = if total_invested > 0.0 {
            profit_loss / total_invested * 100.0
        } else {
            0.0
        };
        let avg_bought_price = if total_quantity > 0.0 {
            total_invested / total_quantity
        } else {
            0.0
        };

        Some(FundSummary {
            fund_id: first.fund_id.clone(),
            fund_name: first.fund_name.clone(),
            fund_kind: first.fund_kind,
            total_quantity,
            total_invested,
            total_current_value,
            current_price,
            avg_bought_price,
            profit_loss,
            profit_loss_pct,
            first_purchase_date,
            last_purchase_date: latest.purchase_date,
            transaction_count: transactions.len(),
        })
    }
}

/// Summarizes a mixed transaction list, one summary per fund.
///
/// Funds appear in the order their first transaction appears.
#[must_use]
pub fn summarize_all(transactions: &[FundTransaction]) -> Vec<FundSummary> {
    let mut groups: Vec<(&str, Vec<FundTransaction>)> = Vec::new();
    for tx in transactions {
        match groups.iter_mut().find(|(id, _)| *id == tx.fund_id) {
            Some((_, txs)) => txs.push(tx.clone()),
            None => groups.push((&tx.fund_id, vec![tx.clone()])),
        }
    }
    groups
        .into_iter()
        .filter_map(|(_, txs)| FundSummary::from_transactions(&txs))
        .collect()
}
