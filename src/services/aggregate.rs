//! Aggregations over a transaction list
//!
//! Pure functions: the running balance and the per-month deposit and
//! withdrawal sums that feed the bar chart. Records that can't be
//! interpreted (unusable amount, unparseable date) are skipped rather than
//! reported.

use std::collections::BTreeMap;

use crate::models::{MonthKey, MonthNames, Money, Transaction, TransactionType};

/// Per-month sums, index-aligned and in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyData {
    /// Month of each column
    pub months: Vec<MonthKey>,
    /// "Mon YYYY" label of each column
    pub labels: Vec<String>,
    /// Sum of deposits per month
    pub deposits: Vec<Money>,
    /// Sum of withdrawals per month, as a positive magnitude
    pub withdrawals: Vec<Money>,
}

impl MonthlyData {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, deposits, withdrawals)` rows
    pub fn rows(&self) -> impl Iterator<Item = (&str, Money, Money)> + '_ {
        self.labels
            .iter()
            .zip(&self.deposits)
            .zip(&self.withdrawals)
            .map(|((label, deposit), withdrawal)| (label.as_str(), *deposit, *withdrawal))
    }
}

#[derive(Default)]
struct MonthTotals {
    deposits: Money,
    withdrawals: Money,
}

/// Signed balance: deposits minus withdrawals
///
/// Records with an unusable amount or an unknown type contribute nothing.
pub fn calculate_total(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter_map(|txn| {
            let amount = txn.amount.value()?;
            match txn.kind {
                TransactionType::Deposit => Some(amount),
                TransactionType::Withdrawal => Some(-amount),
                TransactionType::Other(_) => None,
            }
        })
        .sum()
}

/// Deposits and withdrawals summed per calendar month
///
/// Months are ordered by `(year, month)`; labels are derived from that key
/// after sorting. Records with an unparseable date or an unusable amount are
/// skipped entirely. A record of unknown type still opens its month with
/// zero sums.
pub fn monthly_data(transactions: &[Transaction], names: MonthNames) -> MonthlyData {
    let mut by_month: BTreeMap<MonthKey, MonthTotals> = BTreeMap::new();

    for txn in transactions {
        let Some(date) = txn.calendar_date() else {
            continue;
        };
        let Some(amount) = txn.amount.value() else {
            continue;
        };

        let totals = by_month.entry(MonthKey::from_date(date)).or_default();
        match txn.kind {
            TransactionType::Deposit => totals.deposits += amount,
            TransactionType::Withdrawal => totals.withdrawals += amount,
            TransactionType::Other(_) => {}
        }
    }

    let mut data = MonthlyData::default();
    for (month, totals) in by_month {
        data.months.push(month);
        data.labels.push(names.label(month));
        data.deposits.push(totals.deposits);
        data.withdrawals.push(totals.withdrawals);
    }
    data
}
