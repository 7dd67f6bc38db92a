// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categorizer::Categorizer;
use crate::error::{ExpenseError, ValidationError};
use crate::models::{CategoryTotal, Expense};
use crate::store::RecordStore;
use crate::utils::{parse_amount, parse_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub type Result<T> = std::result::Result<T, ExpenseError>;

#[derive(Debug, Clone)]
pub struct Ledger {
    store: RecordStore,
    categorizer: Categorizer,
}

impl Ledger {
    pub fn new(store: RecordStore, categorizer: Categorizer) -> Self {
        Self { store, categorizer }
    }

    /// Ledger over `data/expenses.csv` with the built-in keyword rules.
    pub fn open_default() -> Self {
        Self::new(RecordStore::open_default(), Categorizer::default())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn categorizer(&self) -> &Categorizer {
        &self.categorizer
    }

    pub fn add_expense(&self, date: &str, description: &str, amount: &str) -> Result<Expense> {
        self.add_expense_with_category(date, description, amount, None)
    }

    /// Validates and records one expense. A non-blank `category` overrides the
    /// keyword rules.
    pub fn add_expense_with_category(
        &self,
        date: &str,
        description: &str,
        amount: &str,
        category: Option<&str>,
    ) -> Result<Expense> {
        let today = chrono::Local::now().date_naive();
        let expense = self
            .build_expense(today, date, description, amount, category)
            .inspect_err(|err| tracing::warn!(%err, "rejected expense"))?;
        self.store.append(&expense)?;
        tracing::info!(
            date = %expense.date,
            amount = %expense.amount,
            category = %expense.category,
            "recorded expense"
        );
        Ok(expense)
    }

    fn build_expense(
        &self,
        today: NaiveDate,
        date: &str,
        description: &str,
        amount: &str,
        category: Option<&str>,
    ) -> std::result::Result<Expense, ValidationError> {
        let date = parse_date(date)?;
        if date > today {
            return Err(ValidationError::FutureDate(date));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = parse_amount(amount)?;
        let category = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => c.to_string(),
            None => self.categorizer.classify(description),
        };
        Ok(Expense {
            date,
            description: description.to_string(),
            amount,
            category,
        })
    }

    pub fn list_all(&self) -> Result<Vec<Expense>> {
        Ok(self.store.load_all()?)
    }

    /// Sum per category. Categories without entries are absent.
    pub fn totals_by_category(&self) -> Result<BTreeMap<String, Decimal>> {
        totals_of(&self.store.load_all()?)
    }

    /// Totals ordered by highest spend, ties by category name.
    pub fn ranked_totals(&self) -> Result<Vec<CategoryTotal>> {
        let mut items: Vec<CategoryTotal> = self
            .totals_by_category()?
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        items.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
        Ok(items)
    }

    pub fn grand_total(&self) -> Result<Decimal> {
        checked_sum(self.store.load_all()?.iter().map(|e| e.amount))
    }
}

/// Sum per category, failing instead of overflowing.
pub fn totals_of(expenses: &[Expense]) -> Result<BTreeMap<String, Decimal>> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        let slot = agg.entry(e.category.clone()).or_insert(Decimal::ZERO);
        *slot = slot
            .checked_add(e.amount)
            .ok_or_else(|| ExpenseError::TotalOverflow(e.category.clone()))?;
    }
    Ok(agg)
}

pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or_else(|| ExpenseError::TotalOverflow("all categories".into()))
    })
}
