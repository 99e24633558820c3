//! Per-user in-memory cache over a [`RecordSource`].

use std::sync::Arc;

use dashmap::DashMap;
use paisa_core::{
    BudgetEntry, CreditCardSnapshot, FundTransaction, GoldInvestment, LoanRecord, MonthYear,
    SchemeContribution, Subscription,
};
use tracing::{debug, trace};

use crate::error::StoreResult;
use crate::ids::UserId;
use crate::source::RecordSource;

/// Caches each user's collections after the first fetch.
///
/// Entries live until [`invalidate`](Self::invalidate) or
/// [`clear`](Self::clear); there is no TTL. A failed fetch caches nothing
/// and the next call retries the source. Concurrent first fetches for the
/// same user may both hit the source; the fetches are idempotent so the
/// duplicate work is harmless.
pub struct AppDataCache<S> {
    source: S,
    loans: DashMap<UserId, Arc<Vec<LoanRecord>>>,
    budget_entries: DashMap<(UserId, MonthYear), Arc<Vec<BudgetEntry>>>,
    cards: DashMap<UserId, Arc<Vec<CreditCardSnapshot>>>,
    subscriptions: DashMap<UserId, Arc<Vec<Subscription>>>,
    gold_investments: DashMap<UserId, Arc<Vec<GoldInvestment>>>,
    fund_transactions: DashMap<UserId, Arc<Vec<FundTransaction>>>,
    scheme_contributions: DashMap<UserId, Arc<Vec<SchemeContribution>>>,
}

macro_rules! cached_collection {
    ($(#[$doc:meta])* $name:ident, $record:ty) => {
        $(#[$doc])*
        pub async fn $name(&self, user: UserId) -> StoreResult<Arc<Vec<$record>>> {
            if let Some(cached) = self.$name.get(&user) {
                trace!(%user, collection = stringify!($name), "cache hit");
                return Ok(Arc::clone(&cached));
            }
            debug!(%user, collection = stringify!($name), "cache miss, fetching");
            let records = Arc::new(self.source.$name(user).await?);
            self.$name.insert(user, Arc::clone(&records));
            Ok(records)
        }
    };
}

impl<S: RecordSource> AppDataCache<S> {
    /// Wraps a source with empty caches.
    pub fn new(source: S) -> Self {
        Self {
            source,
            loans: DashMap::new(),
            budget_entries: DashMap::new(),
            cards: DashMap::new(),
            subscriptions: DashMap::new(),
            gold_investments: DashMap::new(),
            fund_transactions: DashMap::new(),
            scheme_contributions: DashMap::new(),
        }
    }

    cached_collection!(
        /// The user's loans, fetched once.
        loans,
        LoanRecord
    );
    cached_collection!(
        /// The user's card snapshots, fetched once.
        cards,
        CreditCardSnapshot
    );
    cached_collection!(
        /// The user's subscriptions, fetched once.
        subscriptions,
        Subscription
    );
    cached_collection!(
        /// The user's gold investments, fetched once.
        gold_investments,
        GoldInvestment
    );
    cached_collection!(
        /// The user's fund transactions, fetched once.
        fund_transactions,
        FundTransaction
    );
    cached_collection!(
        /// The user's scheme contributions, fetched once.
        scheme_contributions,
        SchemeContribution
    );

    /// Budget entries of the given months, in the order of `months`.
    ///
    /// Cached per month, so widening the window only fetches the months
    /// not yet seen.
    pub async fn budget_entries(
        &self,
        user: UserId,
        months: &[MonthYear],
    ) -> StoreResult<Vec<BudgetEntry>> {
        let missing: Vec<MonthYear> = months
            .iter()
            .copied()
            .filter(|m| !self.budget_entries.contains_key(&(user, *m)))
            .collect();

        if !missing.is_empty() {
            debug!(%user, months = missing.len(), "fetching budget months");
            let fetched = self.source.budget_entries(user, &missing).await?;
            for month in &missing {
                let rows: Vec<BudgetEntry> = fetched
                    .iter()
                    .filter(|e| e.month_year == *month)
                    .cloned()
                    .collect();
                self.budget_entries.insert((user, *month), Arc::new(rows));
            }
        }

        let mut entries = Vec::new();
        for month in months {
            if let Some(rows) = self.budget_entries.get(&(user, *month)) {
                entries.extend(rows.iter().cloned());
            }
        }
        Ok(entries)
    }

    /// Drops everything cached for one user. Call after any write.
    pub fn invalidate(&self, user: UserId) {
        debug!(%user, "invalidating cached collections");
        self.loans.remove(&user);
        self.budget_entries.retain(|(u, _), _| *u != user);
        self.cards.remove(&user);
        self.subscriptions.remove(&user);
        self.gold_investments.remove(&user);
        self.fund_transactions.remove(&user);
        self.scheme_contributions.remove(&user);
    }

    /// Drops everything for every user.
    pub fn clear(&self) {
        self.loans.clear();
        self.budget_entries.clear();
        self.cards.clear();
        self.subscriptions.clear();
        self.gold_investments.clear();
        self.fund_transactions.clear();
        self.scheme_contributions.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::StoreError;

    #[derive(Default)]
    struct CountingSource {
        loan_fetches: AtomicUsize,
        budget_fetches: AtomicUsize,
        fail_loans: bool,
    }

    fn loan(id: &str) -> LoanRecord {
        LoanRecord {
            id: id.to_string(),
            loan_name: "Car loan".into(),
            emoji: "🚗".into(),
            monthly_emi: 10_000.0,
            interest: 9.5,
            total_tenure: 60,
            paid_months: 12,
            monthly_due_date: 5,
        }
    }

    fn budget_entry(name: &str, month: MonthYear) -> BudgetEntry {
        BudgetEntry {
            id: name.to_string(),
            expense_name: name.to_string(),
            emoji: "💳".into(),
            amount: 1_000.0,
            entry_type: paisa_core::EntryType::Expense,
            category: None,
            bank_account: "HDFC".into(),
            month_year: month,
            carry_forward: false,
            mark_as_paid: false,
        }
    }

    #[async_trait]
    impl RecordSource for CountingSource {
        async fn loans(&self, _user: UserId) -> StoreResult<Vec<LoanRecord>> {
            self.loan_fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_loans {
                return Err(StoreError::fetch("loans", "backend down"));
            }
            Ok(vec![loan("l1"), loan("l2")])
        }

        async fn budget_entries(
            &self,
            _user: UserId,
            months: &[MonthYear],
        ) -> StoreResult<Vec<BudgetEntry>> {
            self.budget_fetches.fetch_add(1, Ordering::SeqCst);
            Ok(months
                .iter()
                .map(|m| budget_entry(&format!("rent {m}"), *m))
                .collect())
        }

        async fn cards(&self, _user: UserId) -> StoreResult<Vec<CreditCardSnapshot>> {
            Ok(Vec::new())
        }

        async fn subscriptions(&self, _user: UserId) -> StoreResult<Vec<Subscription>> {
            Ok(Vec::new())
        }

        async fn gold_investments(&self, _user: UserId) -> StoreResult<Vec<GoldInvestment>> {
            Ok(Vec::new())
        }

        async fn fund_transactions(&self, _user: UserId) -> StoreResult<Vec<FundTransaction>> {
            Ok(Vec::new())
        }

        async fn scheme_contributions(
            &self,
            _user: UserId,
        ) -> StoreResult<Vec<SchemeContribution>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_second_read_hits_cache() {
        let cache = AppDataCache::new(CountingSource::default());
        let user = UserId::random();

        let first = cache.loans(user).await.unwrap();
        let second = cache.loans(user).await.unwrap();
        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.source.loan_fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_users_cached_independently() {
        let cache = AppDataCache::new(CountingSource::default());
        let alice = UserId::random();
        let bob = UserId::random();

        cache.loans(alice).await.unwrap();
        cache.loans(bob).await.unwrap();
        assert_eq!(cache.source.loan_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = AppDataCache::new(CountingSource::default());
        let user = UserId::random();

        cache.loans(user).await.unwrap();
        cache.invalidate(user);
        cache.loans(user).await.unwrap();
        assert_eq!(cache.source.loan_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_only_touches_that_user() {
        let cache = AppDataCache::new(CountingSource::default());
        let alice = UserId::random();
        let bob = UserId::random();

        cache.loans(alice).await.unwrap();
        cache.loans(bob).await.unwrap();
        cache.invalidate(alice);
        cache.loans(bob).await.unwrap();
        assert_eq!(cache.source.loan_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache = AppDataCache::new(CountingSource {
            fail_loans: true,
            ..CountingSource::default()
        });
        let user = UserId::random();

        assert!(cache.loans(user).await.is_err());
        assert!(cache.loans(user).await.is_err());
        assert_eq!(cache.source.loan_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_budget_window_fetches_only_missing_months() {
        let cache = AppDataCache::new(CountingSource::default());
        let user = UserId::random();
        let aug = MonthYear::new(2026, 8).unwrap();
        let jul = MonthYear::new(2026, 7).unwrap();
        let jun = MonthYear::new(2026, 6).unwrap();

        let window = cache.budget_entries(user, &[jul, aug]).await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(cache.source.budget_fetches.load(Ordering::SeqCst), 1);

        // Widening the window fetches June only
        let wider = cache.budget_entries(user, &[jun, jul, aug]).await.unwrap();
        assert_eq!(wider.len(), 3);
        assert_eq!(wider[0].month_year, jun);
        assert_eq!(cache.source.budget_fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clear_drops_all_users() {
        let cache = AppDataCache::new(CountingSource::default());
        let user = UserId::random();

        cache.loans(user).await.unwrap();
        cache.clear();
        cache.loans(user).await.unwrap();
        assert_eq!(cache.source.loan_fetches.load(Ordering::SeqCst), 2);
    }
}
