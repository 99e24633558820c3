//! Post-office scheme metrics: compound-interest maturity projections.
//!
//! A scheme is a group of contribution rows sharing one `scheme_id`. Each
//! contribution compounds independently from its own paid date; the scheme
//! term runs from the earliest contribution. Elapsed time uses the fixed
//! 365.25-day year and 30.44-day month conventions, not calendar months.

use paisa_core::{Date, SchemeContribution};
use serde::{Deserialize, Serialize};

/// Current value of a principal compounding annually at the given rate.
///
/// The exponent is the fractional number of average years elapsed - growth
/// accrues continuously rather than stepping once per anniversary. Result
/// is rounded to two decimal places; degenerate input yields `0.0`.
#[must_use]
pub fn maturity_value(principal: f64, annual_rate_pct: f64, years_elapsed: f64) -> f64 {
    if !principal.is_finite() || !annual_rate_pct.is_finite() || !years_elapsed.is_finite() {
        return 0.0;
    }
    let value = principal * (1.0 + annual_rate_pct / 100.0).powf(years_elapsed);
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        0.0
    }
}

/// Current compounded value of one contribution as of `today`.
#[must_use]
pub fn maturity_value_of(contribution: &SchemeContribution, today: Date) -> f64 {
    maturity_value(
        contribution.principal_amount,
        contribution.interest_rate,
        today.years_since(contribution.paid_date),
    )
}

/// Interest accrued so far on one contribution as of `today`.
#[must_use]
pub fn interest_of(contribution: &SchemeContribution, today: Date) -> f64 {
    maturity_value_of(contribution, today) - contribution.principal_amount
}

/// Aggregated state of one scheme across all its contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeAggregate {
    /// Grouping key of the scheme.
    pub scheme_id: String,
    /// Display name, taken from the first contribution row.
    pub scheme_name: String,
    /// Number of contribution rows in the group.
    pub contribution_count: usize,
    /// Sum of contributed principals.
    pub total_principal: f64,
    /// Sum of each contribution's independently compounded current value.
    pub total_maturity_value: f64,
    /// `total_maturity_value - total_principal`.
    pub total_interest: f64,
    /// Earliest paid date across the group.
    pub first_invested_date: Date,
    /// Scheme term in months, taken from the first contribution row.
    pub maturity_months: u32,
    /// `first_invested_date` plus the scheme term.
    pub maturity_date: Date,
    /// Months elapsed since the first contribution, counted with the
    /// 30.44-day convention, at least 1 once invested, capped at the term.
    pub months_elapsed: u32,
    /// Months left until maturity, floored at zero.
    pub remaining_months: u32,
}

impl SchemeAggregate {
    /// Aggregates the contribution rows of one scheme as of `today`.
    ///
    /// Returns `None` for an empty group - a scheme only exists through
    /// its contributions. The scheme term is read from the first row;
    /// rows are assumed to share it.
    #[must_use]
    pub fn from_contributions(contributions: &[SchemeContribution], today: Date) -> Option<Self> {
        let first_row = contributions.first()?;

        let first_invested_date = contributions
            .iter()
            .map(|c| c.paid_date)
            .min()
            .unwrap_or(first_row.paid_date);

        let total_principal: f64 = contributions
            .iter()
            .map(|c| {
                if c.principal_amount.is_finite() {
                    c.principal_amount
                } else {
                    0.0
                }
            })
            .sum();
        let total_maturity_value: f64 = contributions
            .iter()
            .map(|c| maturity_value_of(c, today))
            .sum();

        let maturity_months = first_row.maturity_months;
        let months_elapsed = elapsed_months(first_invested_date, today, maturity_months);

        Some(Self {
            scheme_id: first_row.scheme_id.clone(),
            scheme_name: first_row.scheme_name.clone(),
            contribution_count: contributions.len(),
            total_principal,
            total_maturity_value,
            total_interest: total_maturity_value - total_principal,
            first_invested_date,
            maturity_months,
            maturity_date: first_invested_date.add_months(maturity_months as i32),
            months_elapsed,
            remaining_months: maturity_months.saturating_sub(months_elapsed),
        })
    }
}

/// Months run on a scheme: partial months round up, at least one month
/// counts once the first contribution is in the past, capped at the term.
fn elapsed_months(first_invested: Date, today: Date, maturity_months: u32) -> u32 {
    let floor: i64 = i64::from(today.days_since(first_invested) >= 0);
    let months = today.months_since_ceil(first_invested);
    months.min(i64::from(maturity_months)).max(floor) as u32
}

/// Groups contribution rows by `scheme_id`, preserving first-seen order.
#[must_use]
pub fn group_by_scheme(
    contributions: &[SchemeContribution],
) -> Vec<(String, Vec<&SchemeContribution>)> {
    let mut groups: Vec<(String, Vec<&SchemeContribution>)> = Vec::new();
    for contribution in contributions {
        match groups.iter_mut().find(|(id, _)| *id == contribution.scheme_id) {
            Some((_, rows)) => rows.push(contribution),
            None => groups.push((contribution.scheme_id.clone(), vec![contribution])),
        }
    }
    groups
}

/// Aggregates every scheme present in the rows, first-seen order.
#[must_use]
pub fn aggregate_all(contributions: &[SchemeContribution], today: Date) -> Vec<SchemeAggregate> {
    group_by_scheme(contributions)
        .into_iter()
        .filter_map(|(_, rows)| {
            let owned: Vec<SchemeContribution> = rows.into_iter().cloned().collect();
            SchemeAggregate::from_contributions(&owned, today)
        })
        .collect()
}
