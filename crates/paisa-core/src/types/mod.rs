//! Domain types for personal finance analytics.
//!
//! This module provides type-safe representations of the concepts the
//! metrics engine consumes:
//!
//! - [`Date`]: Calendar date with the fixed-length year/month conventions
//! - [`MonthYear`]: The `"MMM YYYY"` bucket budget entries are keyed by
//! - Record types: the raw rows fetched from the hosted table store

mod date;
mod month_year;
mod records;

pub use date::Date;
pub use month_year::MonthYear;
pub use records::{
    BillingCycle, BudgetEntry, CreditCardSnapshot, EntryType, FundKind, FundTransaction,
    GoldInvestment, LoanRecord, SchemeContribution, Subscription,
};
