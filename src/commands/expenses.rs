// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Expense;
use crate::utils::{align_right, fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    sub.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("Missing argument '{}'", name))
}

pub fn add(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = required(sub, "date")?;
    let description = required(sub, "description")?;
    let amount = required(sub, "amount")?;
    let category = sub.get_one::<String>("category").map(String::as_str);

    let expense = ledger
        .add_expense_with_category(date, description, amount, category)
        .with_context(|| format!("Could not record expense '{}'", description.trim()))?;
    println!(
        "Recorded {} on {} '{}' [{}]",
        fmt_money(&expense.amount),
        expense.date,
        expense.description,
        expense.category
    );
    Ok(())
}

pub fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = ledger.list_all().context("Could not load expenses")?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }
    let mut table = pretty_table(&["Date", "Description", "Amount", "Category"], rows(&data));
    align_right(&mut table, &[2]);
    println!("{}", table);
    Ok(())
}

pub fn rows(data: &[Expense]) -> Vec<Vec<String>> {
    data.iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.description.clone(),
                fmt_money(&e.amount),
                e.category.clone(),
            ]
        })
        .collect()
}
