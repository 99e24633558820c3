//! Subscription cost normalization and renewal reminders.

use paisa_core::{Date, Subscription};

/// Renewals within this many days count as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Combined monthly cost of active subscriptions.
///
/// Yearly billing contributes a twelfth, quarterly a third. Inactive
/// subscriptions cost nothing.
#[must_use]
pub fn monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|s| s.is_active)
        .map(|s| s.billing_amount / f64::from(s.billing_cycle.months_per_billing()))
        .sum()
}

/// Number of active subscriptions.
#[must_use]
pub fn active_count(subscriptions: &[Subscription]) -> usize {
    subscriptions.iter().filter(|s| s.is_active).count()
}

/// Days until `billing_date`, negative once it has passed.
#[must_use]
pub fn days_left(billing_date: Date, today: Date) -> i64 {
    -today.days_since(billing_date)
}

/// Active subscriptions renewing within the next week, today included.
#[must_use]
pub fn upcoming(subscriptions: &[Subscription], today: Date) -> Vec<&Subscription> {
    subscriptions
        .iter()
        .filter(|s| {
            if !s.is_active {
                return false;
            }
            let days = days_left(s.billing_date, today);
            (0..=UPCOMING_WINDOW_DAYS).contains(&days)
        })
        .collect()
}
