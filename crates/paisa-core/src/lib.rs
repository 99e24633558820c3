//! # Paisa Core
//!
//! Core types and persisted-record shapes for the Paisa personal finance
//! analytics library.
//!
//! This crate provides the foundational building blocks used throughout Paisa:
//!
//! - **Types**: Domain-specific types like [`Date`] and [`MonthYear`]
//! - **Records**: The raw collections the hosted table store persists
//!   (loans, budget entries, scheme contributions, fund transactions, ...)
//!
//! ## Design Philosophy
//!
//! - **Records are immutable inputs**: lifecycle (create/update/delete)
//!   belongs to the backing store, never to this library
//! - **Explicit over implicit**: clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use paisa_core::prelude::*;
//!
//! let month = MonthYear::parse("Sep 2026").unwrap();
//! assert_eq!(month.key(), "Sep2026");
//! assert_eq!(month.next().label(), "Oct 2026");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod error;
pub mod types;

pub use error::{PaisaError, PaisaResult};
pub use types::{
    BillingCycle, BudgetEntry, CreditCardSnapshot, Date, EntryType, FundKind, FundTransaction,
    GoldInvestment, LoanRecord, MonthYear, SchemeContribution, Subscription,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PaisaError, PaisaResult};
    pub use crate::types::{
        BillingCycle, BudgetEntry, CreditCardSnapshot, Date, EntryType, FundKind, FundTransaction,
        GoldInvestment, LoanRecord, MonthYear, SchemeContribution, Subscription,
    };
}
