//! Loan metrics: reverse-EMI principals and amortization schedules.
//!
//! Loans are persisted as EMI terms (installment, rate, tenure), never as
//! a principal amount - the principal is always derived by inverting the
//! EMI formula. The same inversion applied to the remaining tenure gives
//! the outstanding balance. This fresh-tenure treatment of the remainder
//! does not match true amortization math once installments have been paid,
//! but it is the defined, reproducible behavior users' balances are built
//! on, so it is kept as-is.

use paisa_core::{Date, LoanRecord, MonthYear};
use serde::{Deserialize, Serialize};

/// Converts an annual percentage rate to a monthly fractional rate.
fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 12.0 / 100.0
}

/// Derives the loan principal from its EMI terms (reverse-EMI formula).
///
/// Returns the principal rounded to the nearest whole currency unit.
/// Degenerate input (non-positive or non-finite EMI, zero tenure,
/// non-finite rate) yields `0.0` rather than an error.
///
/// At a zero rate the formula degenerates to `emi * tenure`.
#[must_use]
pub fn total_principal(monthly_emi: f64, annual_rate_pct: f64, tenure_months: u32) -> f64 {
    if !(monthly_emi > 0.0) || tenure_months == 0 {
        return 0.0;
    }
    let r = monthly_rate(annual_rate_pct);
    if !r.is_finite() {
        return 0.0;
    }
    if r == 0.0 {
        return (monthly_emi * f64::from(tenure_months)).round();
    }

    let growth = (1.0 + r).powi(tenure_months as i32);
    let principal = monthly_emi * (growth - 1.0) / (r * growth);
    if principal.is_finite() {
        principal.round()
    } else {
        0.0
    }
}

/// Outstanding balance of a loan: the reverse-EMI principal over the
/// months still to pay.
///
/// Monotonically non-increasing in `paid_months`, reaching `0.0` once the
/// loan is fully paid; `paid_months` past the tenure clamps to zero months
/// rather than going negative.
#[must_use]
pub fn remaining_principal(loan: &LoanRecord) -> f64 {
    total_principal(loan.monthly_emi, loan.interest, loan.remaining_months())
}

/// One month of a loan's projected repayment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Calendar month this installment falls in, e.g. `"Sep 2026"`.
    pub month_label: String,
    /// Balance at the start of the month.
    pub opening_balance: f64,
    /// Interest portion of the installment.
    pub interest: f64,
    /// Principal portion of the installment.
    pub principal: f64,
    /// Optional prepayment on top of the EMI; zero as built.
    pub extra_payment: f64,
    /// Principal retired this month (`principal + extra_payment`).
    pub total_principal: f64,
    /// Balance carried into the next month, floored at zero.
    pub closing_balance: f64,
}

impl ScheduleRow {
    /// Zeroes every amount, keeping the month label.
    ///
    /// Used once a prepayment retires the loan mid-schedule: the remaining
    /// calendar months stay visible with nothing left to pay.
    fn clear_amounts(&mut self) {
        self.opening_balance = 0.0;
        self.interest = 0.0;
        self.principal = 0.0;
        self.extra_payment = 0.0;
        self.total_principal = 0.0;
        self.closing_balance = 0.0;
    }
}

/// Projected month-by-month repayment of a loan's remaining balance.
///
/// Built purely from the loan record and an as-of date: rebuilding with
/// the same inputs always yields the same rows. The schedule is finite -
/// one row per remaining month, stopping early if the balance hits zero.
///
/// # Example
///
/// ```rust
/// use paisa_core::{Date, LoanRecord};
/// use paisa_metrics::loans::AmortizationSchedule;
///
/// let loan = LoanRecord {
///     id: "l1".into(),
///     loan_name: "Bike loan".into(),
///     emoji: "🏍️".into(),
///     monthly_emi: 1_000.0,
///     interest: 0.0,
///     total_tenure: 10,
///     paid_months: 0,
///     monthly_due_date: 5,
/// };
/// let today = Date::from_ymd(2026, 9, 1).unwrap();
/// let schedule = AmortizationSchedule::build(&loan, today);
/// assert_eq!(schedule.rows().len(), 10);
/// assert_eq!(schedule.rows().last().unwrap().closing_balance, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    rows: Vec<ScheduleRow>,
    monthly_emi: f64,
    monthly_rate: f64,
}

impl AmortizationSchedule {
    /// Builds the schedule for a loan's remaining months as of `today`.
    #[must_use]
    pub fn build(loan: &LoanRecord, today: Date) -> Self {
        let rate = monthly_rate(loan.interest);
        let rate = if rate.is_finite() { rate } else { 0.0 };
        let emi = if loan.monthly_emi.is_finite() {
            loan.monthly_emi
        } else {
            0.0
        };

        let remaining = loan.remaining_months();
        let mut rows = Vec::with_capacity(remaining as usize);
        let mut balance = remaining_principal(loan);

        for i in 0..remaining {
            if balance <= 0.0 {
                break;
            }
            let interest = (balance * rate).round();
            let principal = (emi - interest).round();
            let total_principal = principal;
            let closing_balance = ((balance - total_principal).round()).max(0.0);

            rows.push(ScheduleRow {
                month_label: MonthYear::from_date(today.add_months(i as i32)).label(),
                opening_balance: balance,
                interest,
                principal,
                extra_payment: 0.0,
                total_principal,
                closing_balance,
            });
            balance = closing_balance;
        }

        Self {
            rows,
            monthly_emi: emi,
            monthly_rate: rate,
        }
    }

    /// The schedule rows, oldest month first.
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Sets the extra payment of row `index` and recomputes the tail.
    ///
    /// The edited row keeps its existing interest/principal split - only
    /// its `total_principal` and `closing_balance` are rederived. Every
    /// later row recomputes its opening balance from the previous row's
    /// closing balance; once an opening balance reaches zero the loan is
    /// retired and that row and all rows after it are cleared.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_extra_payment(&mut self, index: usize, amount: f64) {
        if index >= self.rows.len() {
            return;
        }
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        self.rows[index].extra_payment = amount;

        // Edited row: rederive totals from its (possibly stale) split.
        let row = &mut self.rows[index];
        row.total_principal = row.principal + row.extra_payment;
        row.closing_balance = ((row.opening_balance - row.total_principal).round()).max(0.0);

        let mut retired = false;
        for i in index + 1..self.rows.len() {
            let opening = self.rows[i - 1].closing_balance;
            if retired || opening <= 0.0 {
                retired = true;
                self.rows[i].clear_amounts();
                continue;
            }
            let interest = (opening * self.monthly_rate).round();
            let principal = (self.monthly_emi - interest).round();
            let row = &mut self.rows[i];
            row.opening_balance = opening;
            row.interest = interest;
            row.principal = principal;
            row.total_principal = principal + row.extra_payment;
            row.closing_balance = ((opening - row.total_principal).round()).max(0.0);
        }
    }
}

/// Aggregate view over all of a user's loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPortfolioSummary {
    /// Number of loans.
    pub loan_count: usize,
    /// Sum of outstanding reverse-EMI balances.
    pub total_outstanding: f64,
    /// Combined monthly installment across all loans.
    pub total_monthly_emi: f64,
    /// Interest rate averaged with outstanding balance as the weight;
    /// zero when nothing is outstanding.
    pub weighted_avg_interest: f64,
    /// Sum of months still to pay across all loans.
    pub total_remaining_months: u32,
}

impl LoanPortfolioSummary {
    /// Aggregates a slice of loans. Order-independent.
    #[must_use]
    pub fn aggregate(loans: &[LoanRecord]) -> Self {
        let mut total_outstanding = 0.0;
        let mut total_monthly_emi = 0.0;
        let mut weighted_interest = 0.0;
        let mut total_remaining_months = 0u32;

        for loan in loans {
            let outstanding = remaining_principal(loan);
            total_outstanding += outstanding;
            if loan.monthly_emi.is_finite() && loan.monthly_emi > 0.0 {
                total_monthly_emi += loan.monthly_emi;
            }
            if loan.interest.is_finite() {
                weighted_interest += loan.interest * outstanding;
            }
            total_remaining_months += loan.remaining_months();
        }

        let weighted_avg_interest = if total_outstanding > 0.0 {
            weighted_interest / total_outstanding
        } else {
            0.0
        };

        Self {
            loan_count: loans.len(),
            total_outstanding,
            total_monthly_emi,
            weighted_avg_interest,
            total_remaining_months,
        }
    }
}
