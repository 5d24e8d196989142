//! Cost and profit aggregation for a dog's financial report.
//!
//! The backend owns these numbers. The functions here reproduce its rules so
//! a caller (or a test) can recompute a report and check it against what was
//! received:
//!
//! - total cost is the sum of every expense amount;
//! - profit is the sale amount, or zero without a sale, minus total cost.
//!
//! The kennel-wide summary applies the same rule across every dog, limited to
//! entries dated on or after the start of a rolling window.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{Expense, FinanceSummary, FinancialReport, SaleRecord};

/// Length of the summary window, in days.
pub const SUMMARY_WINDOW_DAYS: u64 = 30;

/// A stored report field disagreeing with its recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportMismatch {
    #[error("total cost is {reported}, expenses sum to {computed}")]
    TotalCost { reported: Decimal, computed: Decimal },

    #[error("profit is {reported}, recomputed profit is {computed}")]
    Profit { reported: Decimal, computed: Decimal },
}

pub fn total_cost(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn profit(sale: Option<&SaleRecord>, total_cost: Decimal) -> Decimal {
    sale.map_or(Decimal::ZERO, |s| s.amount) - total_cost
}

impl FinancialReport {
    /// Build a report from an expense history and an optional sale.
    pub fn from_history(expenses: Vec<Expense>, sale: Option<SaleRecord>) -> Self {
        let total_cost = total_cost(&expenses);
        let profit = profit(sale.as_ref(), total_cost);
        Self {
            dog_id: None,
            dog_name: None,
            expenses,
            total_cost,
            sale,
            profit,
        }
    }

    /// Recompute totals from `expenses` and `sale` and compare with the
    /// stored values.
    pub fn verify(&self) -> Result<(), ReportMismatch> {
        let computed_cost = total_cost(&self.expenses);
        if computed_cost != self.total_cost {
            return Err(ReportMismatch::TotalCost {
                reported: self.total_cost,
                computed: computed_cost,
            });
        }
        let computed_profit = profit(self.sale.as_ref(), computed_cost);
        if computed_profit != self.profit {
            return Err(ReportMismatch::Profit {
                reported: self.profit,
                computed: computed_profit,
            });
        }
        Ok(())
    }

    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }
}

/// First day counted by a summary taken on `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(SUMMARY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

impl FinanceSummary {
    /// Sum sales and expenses dated on or after `since`.
    pub fn since(sales: &[SaleRecord], expenses: &[Expense], since: NaiveDate) -> Self {
        let revenue: Decimal = sales.iter().filter(|s| s.date >= since).map(|s| s.amount).sum();
        let spent: Decimal = expenses.iter().filter(|e| e.date >= since).map(|e| e.amount).sum();
        Self {
            revenue,
            expenses: spent,
            profit: revenue - spent,
        }
    }

    /// Check that profit is revenue minus expenses.
    pub fn verify(&self) -> Result<(), ReportMismatch> {
        let computed = self.revenue - self.expenses;
        if computed != self.profit {
            return Err(ReportMismatch::Profit {
                reported: self.profit,
                computed,
            });
        }
        Ok(())
    }
}
