//! Budget aggregation: month totals, category breakdown, chart series.
//!
//! All operations are filter/sum reductions over budget entries and are
//! order-independent, with one deliberate exception: the category palette
//! assigns colors in first-seen order, so the breakdown is deterministic
//! for a given input order.

use paisa_core::{BudgetEntry, Date, EntryType, MonthYear};
use serde::{Deserialize, Serialize};

/// Category used when an entry carries none.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Fixed 12-color palette cycled over categories in first-seen order.
pub const CATEGORY_PALETTE: [&str; 12] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6B6B", "#C9CBCF",
    "#4BC0C0", "#FF6384", "#36A2EB", "#FFCE56",
];

/// Income, expenses and savings of one month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Sum of income entries.
    pub income: f64,
    /// Sum of expense entries.
    pub expenses: f64,
    /// `income - expenses`; negative when the month overspent.
    pub savings: f64,
}

/// Sums a month's entries into income, expenses and savings.
///
/// Entries of other months are ignored; non-finite amounts count as zero.
/// Shuffling the input never changes the result.
#[must_use]
pub fn monthly_totals(entries: &[BudgetEntry], month: &MonthYear) -> MonthlyTotals {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for entry in entries.iter().filter(|e| e.month_year == *month) {
        let amount = if entry.amount.is_finite() {
            entry.amount
        } else {
            0.0
        };
        match entry.entry_type {
            EntryType::Income => income += amount,
            EntryType::Expense => expenses += amount,
        }
    }
    MonthlyTotals {
        income,
        expenses,
        savings: income - expenses,
    }
}

/// Chart-ready per-category expense totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category names, first-seen order.
    pub labels: Vec<String>,
    /// Summed expense amount per category, parallel to `labels`.
    pub totals: Vec<f64>,
    /// Palette color per category, parallel to `labels`.
    pub colors: Vec<String>,
}

/// Groups expense entries by category, summing amounts.
///
/// Entries without a category land under [`DEFAULT_CATEGORY`]. Each newly
/// seen category takes the next palette slot, so the same first-seen
/// order always produces the same coloring. The palette repeats some
/// colors internally, so two categories can share a color even before
/// the 12-slot cycle wraps.
#[must_use]
pub fn expenses_by_category(entries: &[BudgetEntry]) -> CategoryBreakdown {
    let mut labels: Vec<String> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();

    for entry in entries.iter().filter(|e| e.entry_type == EntryType::Expense) {
        let category = entry
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let amount = if entry.amount.is_finite() {
            entry.amount
        } else {
            0.0
        };
        match labels.iter().position(|l| l == category) {
            Some(i) => totals[i] += amount,
            None => {
                labels.push(category.to_string());
                totals.push(amount);
            }
        }
    }

    let colors = (0..labels.len())
        .map(|i| CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()].to_string())
        .collect();

    CategoryBreakdown {
        labels,
        totals,
        colors,
    }
}

/// One month's point in the income/expenses/savings chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSeriesPoint {
    /// The month this point covers.
    pub month: MonthYear,
    /// Totals of that month.
    pub totals: MonthlyTotals,
}

impl MonthSeriesPoint {
    /// Chart label of the month, e.g. `"Sep 2026"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// Income/expense/savings series over the `n` months ending at `today`'s
/// month, oldest first.
#[must_use]
pub fn last_n_month_series(entries: &[BudgetEntry], n: usize, today: Date) -> Vec<MonthSeriesPoint> {
    MonthYear::last_n(n, today)
        .into_iter()
        .map(|month| MonthSeriesPoint {
            totals: monthly_totals(entries, &month),
            month,
        })
        .collect()
}

/// Per-month averages over a series window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesAverages {
    /// Average monthly income.
    pub income: f64,
    /// Average monthly expenses.
    pub expenses: f64,
    /// `income - expenses` of the averages.
    pub savings: f64,
}

/// Averages a chart series; an empty window averages to zero.
#[must_use]
pub fn series_averages(series: &[MonthSeriesPoint]) -> SeriesAverages {
    if series.is_empty() {
        return SeriesAverages::default();
    }
    let n = series.len() as f64;
    let income = series.iter().map(|p| p.totals.income).sum::<f64>() / n;
    let expenses = series.iter().map(|p| p.totals.expenses).sum::<f64>() / n;
    SeriesAverages {
        income,
        expenses,
        savings: income - expenses,
    }
}

/// Entries of `month` flagged to be re-created in the following month.
///
/// Both income and expense entries participate; the caller re-inserts them
/// under the next month once the user confirms.
#[must_use]
pub fn carry_forward_entries<'a>(
    entries: &'a [BudgetEntry],
    month: &MonthYear,
) -> Vec<&'a BudgetEntry> {
    entries
        .iter()
        .filter(|e| e.carry_forward && e.month_year == *month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entry(name: &str, amount: f64, entry_type: EntryType, month: &str) -> BudgetEntry {
        BudgetEntry {
            id: name.to_string(),
            expense_name: name.to_string(),
            emoji: "💳".into(),
            amount,
            entry_type,
            category: None,
            bank_account: "HDFC".into(),
            month_year: MonthYear::parse(month).unwrap(),
            carry_forward: false,
            mark_as_paid: false,
        }
    }

    fn expense_in_category(name: &str, amount: f64, category: Option<&str>) -> BudgetEntry {
        let mut e = entry(name, amount, EntryType::Expense, "Aug 2026");
        e.category = category.map(String::from);
        e
    }

    #[test]
    fn test_monthly_totals() {
        let entries = vec![
            entry("Salary", 90_000.0, EntryType::Income, "Aug 2026"),
            entry("Rent", 25_000.0, EntryType::Expense, "Aug 2026"),
            entry("Food", 12_000.0, EntryType::Expense, "Aug 2026"),
            entry("Old rent", 24_000.0, EntryType::Expense, "Jul 2026"),
        ];
        let month = MonthYear::parse("Aug 2026").unwrap();
        let totals = monthly_totals(&entries, &month);
        assert_relative_eq!(totals.income, 90_000.0);
        assert_relative_eq!(totals.expenses, 37_000.0);
        assert_relative_eq!(totals.savings, 53_000.0);
    }

    #[test]
    fn test_monthly_totals_order_independent() {
        let mut entries = vec![
            entry("Salary", 90_000.0, EntryType::Income, "Aug 2026"),
            entry("Rent", 25_000.0, EntryType::Expense, "Aug 2026"),
            entry("Food", 12_000.0, EntryType::Expense, "Aug 2026"),
        ];
        let month = MonthYear::parse("Aug 2026").unwrap();
        let forward = monthly_totals(&entries, &month);
        entries.reverse();
        let reversed = monthly_totals(&entries, &month);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_monthly_totals_ignores_non_finite_amounts() {
        let entries = vec![
            entry("Salary", 90_000.0, EntryType::Income, "Aug 2026"),
            entry("Broken", f64::NAN, EntryType::Income, "Aug 2026"),
        ];
        let month = MonthYear::parse("Aug 2026").unwrap();
        let totals = monthly_totals(&entries, &month);
        assert_relative_eq!(totals.income, 90_000.0);
        assert!(totals.savings.is_finite());
    }

    #[test]
    fn test_expenses_by_category_groups_and_sums() {
        let entries = vec![
            expense_in_category("Rent", 25_000.0, Some("Family")),
            expense_in_category("Groceries", 8_000.0, Some("Food")),
            expense_in_category("Dining", 4_000.0, Some("Food")),
            expense_in_category("Misc", 1_500.0, None),
        ];
        let breakdown = expenses_by_category(&entries);
        assert_eq!(breakdown.labels, vec!["Family", "Food", "Other"]);
        assert_relative_eq!(breakdown.totals[1], 12_000.0);
        assert_eq!(breakdown.colors.len(), 3);
    }

    #[test]
    fn test_category_colors_stable_across_calls() {
        let entries = vec![
            expense_in_category("Rent", 25_000.0, Some("Family")),
            expense_in_category("Groceries", 8_000.0, Some("Food")),
        ];
        let first = expenses_by_category(&entries);
        let second = expenses_by_category(&entries);
        assert_eq!(first.colors, second.colors);
    }

    #[test]
    fn test_palette_cycles_after_twelve_categories() {
        let entries: Vec<BudgetEntry> = (0..14)
            .map(|i| expense_in_category(&format!("e{i}"), 100.0, Some(&format!("cat{i}"))))
            .collect();
        let breakdown = expenses_by_category(&entries);
        // The 13th category restarts the 12-slot cycle
        assert_eq!(breakdown.colors[12], breakdown.colors[0]);
        assert_eq!(breakdown.colors[13], breakdown.colors[1]);
        // The palette itself carries repeats, e.g. slots 3 and 8
        assert_eq!(breakdown.colors[3], breakdown.colors[8]);
    }

    #[test]
    fn test_income_excluded_from_category_breakdown() {
        let entries = vec![
            entry("Salary", 90_000.0, EntryType::Income, "Aug 2026"),
            expense_in_category("Rent", 25_000.0, Some("Family")),
        ];
        let breakdown = expenses_by_category(&entries);
        assert_eq!(breakdown.labels, vec!["Family"]);
    }

    #[test]
    fn test_last_n_month_series_oldest_first() {
        let today = Date::from_ymd(2026, 8, 31).unwrap();
        let entries = vec![
            entry("Salary", 90_000.0, EntryType::Income, "Aug 2026"),
            entry("Salary", 85_000.0, EntryType::Income, "Jul 2026"),
        ];
        let series = last_n_month_series(&entries, 5, today);
        assert_eq!(series.len(), 5);
        assert_eq!(series[0].label(), "Apr 2026");
        assert_eq!(series[4].label(), "Aug 2026");
        assert_relative_eq!(series[3].totals.income, 85_000.0);
        assert_relative_eq!(series[4].totals.income, 90_000.0);
        assert_relative_eq!(series[0].totals.income, 0.0);
    }

    #[test]
    fn test_series_averages() {
        let today = Date::from_ymd(2026, 8, 31).unwrap();
        let entries = vec![
            entry("Salary", 50_000.0, EntryType::Income, "Aug 2026"),
            entry("Salary", 100_000.0, EntryType::Income, "Jul 2026"),
            entry("Rent", 30_000.0, EntryType::Expense, "Aug 2026"),
        ];
        let series = last_n_month_series(&entries, 2, today);
        let averages = series_averages(&series);
        assert_relative_eq!(averages.income, 75_000.0);
        assert_relative_eq!(averages.expenses, 15_000.0);
        assert_relative_eq!(averages.savings, 60_000.0);
    }

    #[test]
    fn test_series_averages_empty_window() {
        assert_eq!(series_averages(&[]), SeriesAverages::default());
    }

    #[test]
    fn test_carry_forward_entries() {
        let mut rent = entry("Rent", 25_000.0, EntryType::Expense, "Aug 2026");
        rent.carry_forward = true;
        let mut salary = entry("Salary", 90_000.0, EntryType::Income, "Aug 2026");
        salary.carry_forward = true;
        let food = entry("Food", 8_000.0, EntryType::Expense, "Aug 2026");
        let mut old = entry("Old", 1_000.0, EntryType::Expense, "Jul 2026");
        old.carry_forward = true;

        let entries = vec![rent, salary, food, old];
        let month = MonthYear::parse("Aug 2026").unwrap();
        let flagged = carry_forward_entries(&entries, &month);
        assert_eq!(flagged.len(), 2);
        assert!(flagged.iter().all(|e| e.carry_forward));
    }
}
