//! Net worth and the dashboard roll-up.

use crate::budget::{last_n_month_series, series_averages, MonthSeriesPoint, SeriesAverages};
use crate::cards::{unique_cards, CardTotals};
use crate::funds::{summarize_all, FundSummary};
use crate::loans::LoanPortfolioSummary;
use crate::schemes::{aggregate_all, SchemeAggregate};
use crate::subscriptions;
use paisa_core::{
    BudgetEntry, CreditCardSnapshot, Date, FundTransaction, GoldInvestment, LoanRecord,
    SchemeContribution, Subscription,
};
use serde::{Deserialize, Serialize};

/// Months of budget history shown on the dashboard chart.
pub const DASHBOARD_SERIES_MONTHS: usize = 5;

/// The four components net worth is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NetWorthInputs {
    /// Current value of all investments.
    pub total_investments: f64,
    /// Savings of the current month.
    pub monthly_savings: f64,
    /// Outstanding principal across loans.
    pub total_outstanding_loans: f64,
    /// Statement dues across credit cards.
    pub total_credit_card_due: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `(investments + savings) - (loans + card dues)`.
///
/// Each component is coerced to zero when it is NaN or infinite, so one
/// corrupt collection never poisons the headline number.
#[must_use]
pub fn net_worth(inputs: &NetWorthInputs) -> f64 {
    let assets = finite_or_zero(inputs.total_investments) + finite_or_zero(inputs.monthly_savings);
    let liabilities = finite_or_zero(inputs.total_outstanding_loans)
        + finite_or_zero(inputs.total_credit_card_due);
    assets - liabilities
}

/// Everything the dashboard screen shows, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Loan counts, outstanding and EMI totals.
    pub loans: LoanPortfolioSummary,
    /// Deduplicated card limit/due totals.
    pub cards: CardTotals,
    /// Combined monthly subscription cost, active only.
    pub subscription_monthly_total: f64,
    /// Active subscriptions renewing within a week.
    pub upcoming_renewal_count: usize,
    /// Per-fund position summaries.
    pub funds: Vec<FundSummary>,
    /// Per-scheme deposit aggregates.
    pub schemes: Vec<SchemeAggregate>,
    /// Committed monthly gold purchases.
    pub gold_monthly_total: f64,
    /// Budget history ending at the current month, oldest first.
    pub budget_series: Vec<MonthSeriesPoint>,
    /// Averages over that history.
    pub budget_averages: SeriesAverages,
    /// Components the net worth was computed from.
    pub net_worth_inputs: NetWorthInputs,
    /// The headline number.
    pub net_worth: f64,
}

impl DashboardSummary {
    /// Derives all dashboard tiles from the raw per-user collections.
    ///
    /// Investments count fund holdings at current value, scheme deposits
    /// at principal and gold plans at their monthly amount. Savings are
    /// the current month's income minus expenses.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        loans: &[LoanRecord],
        entries: &[BudgetEntry],
        card_snapshots: &[CreditCardSnapshot],
        subscriptions: &[Subscription],
        gold: &[GoldInvestment],
        fund_transactions: &[FundTransaction],
        scheme_contributions: &[SchemeContribution],
        today: Date,
    ) -> Self {
        let loan_summary = LoanPortfolioSummary::aggregate(loans);
        let cards = CardTotals::aggregate(&unique_cards(card_snapshots));
        let funds = summarize_all(fund_transactions);
        let schemes = aggregate_all(scheme_contributions, today);

        let budget_series = last_n_month_series(entries, DASHBOARD_SERIES_MONTHS, today);
        let budget_averages = series_averages(&budget_series);
        let monthly_savings = budget_series
            .last()
            .map_or(0.0, |point| point.totals.savings);

        let fund_value: f64 = funds.iter().map(|f| f.total_current_value).sum();
        let scheme_principal: f64 = schemes.iter().map(|s| s.total_principal).sum();
        let gold_monthly_total: f64 = gold.iter().map(|g| finite_or_zero(g.monthly_amount)).sum();

        let net_worth_inputs = NetWorthInputs {
            total_investments: fund_value + scheme_principal + gold_monthly_total,
            monthly_savings,
            total_outstanding_loans: loan_summary.total_outstanding,
            total_credit_card_due: cards.total_due,
        };

        DashboardSummary {
            loans: loan_summary,
            cards,
            subscription_monthly_total: subscriptions::monthly_total(subscriptions),
            upcoming_renewal_count: subscriptions::upcoming(subscriptions, today).len(),
            funds,
            schemes,
            gold_monthly_total,
            budget_series,
            budget_averages,
            net_worth: net_worth(&net_worth_inputs),
            net_worth_inputs,
        }
    }
}
