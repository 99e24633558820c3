//! # Paisa Metrics
//!
//! The derived-financial-metrics engine: pure calculation rules that turn
//! raw persisted records into the amounts, schedules and aggregates the
//! dashboard displays.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every operation is stateless with explicit inputs;
//!   callers pass already-fetched, in-memory collections
//! - **Total functions**: nothing here errors or panics on malformed
//!   numeric input - degenerate values degrade to zero or clamped results
//!   so one bad record cannot abort rendering a whole dashboard
//! - **Order independence**: aggregations give the same answer for any
//!   input ordering, except where a comparison key is explicitly defined
//!   (e.g. latest purchase date wins for a fund's current price)
//!
//! ## Module Overview
//!
//! - [`loans`] - Reverse-EMI principals, amortization schedules, portfolio totals
//! - [`schemes`] - Compound-interest maturity for post-office schemes
//! - [`budget`] - Month totals, category breakdown, last-N-month series
//! - [`funds`] - Fund/stock position summaries
//! - [`cards`] - Credit-card snapshot dedup and totals
//! - [`subscriptions`] - Subscription normalization to monthly cost
//! - [`networth`] - Asset/liability roll-up and the dashboard summary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod budget;
pub mod cards;
pub mod funds;
pub mod loans;
pub mod networth;
pub mod schemes;
pub mod subscriptions;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::budget::{
        carry_forward_entries, expenses_by_category, last_n_month_series, monthly_totals,
        series_averages, CategoryBreakdown, MonthSeriesPoint, MonthlyTotals, SeriesAverages,
    };
    pub use crate::cards::{unique_cards, CardTotals};
    pub use crate::funds::{summarize_all, FundSummary};
    pub use crate::loans::{
        remaining_principal, total_principal, AmortizationSchedule, LoanPortfolioSummary,
        ScheduleRow,
    };
    pub use crate::networth::{net_worth, DashboardSummary, NetWorthInputs};
    pub use crate::schemes::{aggregate_all, group_by_scheme, maturity_value, SchemeAggregate};
    pub use crate::subscriptions::{active_count, days_left, monthly_total, upcoming};
}
