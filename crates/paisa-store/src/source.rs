//! The backend seam: one async fetch per collection.

use async_trait::async_trait;
use paisa_core::{
    BudgetEntry, CreditCardSnapshot, FundTransaction, GoldInvestment, LoanRecord, MonthYear,
    SchemeContribution, Subscription,
};

use crate::error::StoreResult;
use crate::ids::UserId;

/// Fetches a user's raw record collections from the backing store.
///
/// Implementations talk to whatever holds the data. Each method returns
/// the full collection for the user; filtering and aggregation happen in
/// the metrics layer. Budget entries are the one exception: they are
/// keyed by month and fetched for an explicit window.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// All loans of the user.
    async fn loans(&self, user: UserId) -> StoreResult<Vec<LoanRecord>>;

    /// Budget entries of the given months.
    async fn budget_entries(
        &self,
        user: UserId,
        months: &[MonthYear],
    ) -> StoreResult<Vec<BudgetEntry>>;

    /// All credit card snapshots of the user, one row per card per month.
    async fn cards(&self, user: UserId) -> StoreResult<Vec<CreditCardSnapshot>>;

    /// All subscriptions of the user, active or not.
    async fn subscriptions(&self, user: UserId) -> StoreResult<Vec<Subscription>>;

    /// All recurring gold investments of the user.
    async fn gold_investments(&self, user: UserId) -> StoreResult<Vec<GoldInvestment>>;

    /// All fund/stock buy transactions of the user.
    async fn fund_transactions(&self, user: UserId) -> StoreResult<Vec<FundTransaction>>;

    /// All post-office scheme contribution rows of the user.
    async fn scheme_contributions(&self, user: UserId) -> StoreResult<Vec<SchemeContribution>>;
}
