//! Persisted record shapes consumed by the metrics engine.
//!
//! These mirror the rows of the hosted table store one-to-one. All of them
//! are immutable inputs here: create/update/delete belongs to the store,
//! the engine only reads. Field names follow the store's snake_case
//! columns so serde round-trips without rename maps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Date, MonthYear};

/// Whether a budget entry adds to or subtracts from the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// Billing cadence of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    /// Billed every month.
    #[default]
    Monthly,
    /// Billed every three months.
    Quarterly,
    /// Billed once a year.
    Yearly,
}

impl BillingCycle {
    /// Returns the number of months covered by one billing.
    #[must_use]
    pub fn months_per_billing(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::Yearly => 12,
        }
    }
}

/// Kind of a tradeable fund position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundKind {
    /// Mutual fund units.
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    /// Directly held stock.
    Stock,
}

/// A loan as persisted: EMI terms, not a principal amount.
///
/// The principal is always derived (reverse-EMI); the store only keeps
/// what the user actually knows from their bank statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Row identifier.
    pub id: String,
    /// Display name, e.g. "Car loan".
    pub loan_name: String,
    /// Display emoji.
    pub emoji: String,
    /// Fixed monthly installment.
    pub monthly_emi: f64,
    /// Annual interest rate in percent (e.g. 12.0 for 12% p.a.).
    pub interest: f64,
    /// Total scheduled repayment periods, in months.
    pub total_tenure: u32,
    /// Installments already paid.
    pub paid_months: u32,
    /// Day of month the installment is due (1-31).
    pub monthly_due_date: u32,
}

impl LoanRecord {
    /// Months left on the loan, clamped to zero.
    ///
    /// `paid_months` exceeding `total_tenure` is a data error upstream;
    /// computations must degrade to zero rather than go negative.
    #[must_use]
    pub fn remaining_months(&self) -> u32 {
        self.total_tenure.saturating_sub(self.paid_months)
    }
}

/// One income or expense line in a month's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Row identifier.
    pub id: String,
    /// Display name of the entry.
    pub expense_name: String,
    /// Display emoji.
    pub emoji: String,
    /// Amount, always non-negative; direction comes from `entry_type`.
    pub amount: f64,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Spending category; missing rows aggregate under "Other".
    #[serde(default)]
    pub category: Option<String>,
    /// Bank account the entry settles against.
    pub bank_account: String,
    /// Month bucket, persisted as `"MMM YYYY"`.
    pub month_year: MonthYear,
    /// Flagged to be re-created in the following month.
    #[serde(default)]
    pub carry_forward: bool,
    /// Whether the expense has been settled.
    #[serde(default)]
    pub mark_as_paid: bool,
}

/// One contribution event into a post-office scheme.
///
/// Several rows share a `scheme_id`: successive top-ups into the same
/// scheme, each compounding independently from its own paid date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeContribution {
    /// Row identifier.
    pub id: String,
    /// Grouping key shared by all contributions to one scheme.
    pub scheme_id: String,
    /// Display name of the scheme.
    pub scheme_name: String,
    /// Amount contributed in this event.
    pub principal_amount: f64,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
    /// Term of the scheme in months.
    pub maturity_months: u32,
    /// Date this contribution was paid in.
    pub paid_date: Date,
}

/// One buy transaction of a mutual fund or stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTransaction {
    /// Row identifier.
    pub id: String,
    /// Grouping key shared by all buys of one fund.
    pub fund_id: String,
    /// Display name of the fund.
    pub fund_name: String,
    /// Mutual fund or stock.
    pub fund_kind: FundKind,
    /// Units bought, non-negative.
    pub quantity: f64,
    /// Price per unit at purchase.
    pub bought_price: f64,
    /// Latest known price per unit, as entered with this row.
    pub current_price: f64,
    /// Date of purchase.
    pub purchase_date: Date,
}

/// Monthly snapshot of a credit card's limit and dues.
///
/// One row per month per card; the pair `(card_name, last_four_digits)`
/// identifies the card, the newest `created_at` row is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardSnapshot {
    /// Row identifier.
    pub id: String,
    /// Card display name.
    pub card_name: String,
    /// Last four digits, kept as a string to preserve leading zeros.
    pub last_four_digits: String,
    /// Credit limit.
    pub card_limit: f64,
    /// Amount currently utilized.
    pub utilized_amount: f64,
    /// Amount due this cycle.
    pub due_amount: f64,
    /// Row creation timestamp; tie-break for the monthly dedup.
    pub created_at: DateTime<Utc>,
}

impl CreditCardSnapshot {
    /// The dedup key identifying a physical card across monthly rows.
    #[must_use]
    pub fn card_key(&self) -> (String, String) {
        (self.card_name.clone(), self.last_four_digits.clone())
    }
}

/// A recurring subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Row identifier.
    pub id: String,
    /// Display name of the service.
    pub name: String,
    /// Amount charged per billing.
    pub billing_amount: f64,
    /// Billing cadence.
    pub billing_cycle: BillingCycle,
    /// Next billing date.
    pub billing_date: Date,
    /// Inactive subscriptions are excluded from totals.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A recurring gold/silver purchase plan.
///
/// The dashboard values these by the committed monthly amount; there is
/// no market-price revaluation for physical metal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldInvestment {
    /// Row identifier.
    pub id: String,
    /// Display name of the plan.
    pub name: String,
    /// Amount invested each month.
    pub monthly_amount: f64,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_months_clamps() {
        let mut loan = LoanRecord {
            id: "l1".into(),
            loan_name: "Car loan".into(),
            emoji: "🚗".into(),
            monthly_emi: 10_000.0,
            interest: 9.5,
            total_tenure: 60,
            paid_months: 12,
            monthly_due_date: 5,
        };
        assert_eq!(loan.remaining_months(), 48);

        // Data error upstream: must clamp, not underflow
        loan.paid_months = 75;
        assert_eq!(loan.remaining_months(), 0);
    }

    #[test]
    fn test_entry_type_serde_matches_store() {
        assert_eq!(
            serde_json::to_string(&EntryType::Income).unwrap(),
            "\"income\""
        );
        let t: EntryType = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(t, EntryType::Expense);
    }

    #[test]
    fn test_fund_kind_serde_matches_store() {
        assert_eq!(
            serde_json::to_string(&FundKind::MutualFund).unwrap(),
            "\"Mutual Fund\""
        );
    }

    #[test]
    fn test_budget_entry_round_trip() {
        let json = r#"{
            "id": "b1",
            "expense_name": "Rent",
            "emoji": "🏠",
            "amount": 25000.0,
            "type": "expense",
            "category": "Family",
            "bank_account": "HDFC",
            "month_year": "Sep 2026",
            "carry_forward": true
        }"#;
        let entry: BudgetEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Expense);
        assert_eq!(entry.month_year.label(), "Sep 2026");
        assert!(entry.carry_forward);
        assert!(!entry.mark_as_paid);
    }

    #[test]
    fn test_billing_cycle_months() {
        assert_eq!(BillingCycle::Monthly.months_per_billing(), 1);
        assert_eq!(BillingCycle::Quarterly.months_per_billing(), 3);
        assert_eq!(BillingCycle::Yearly.months_per_billing(), 12);
    }
}
