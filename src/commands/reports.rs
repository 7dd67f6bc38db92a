// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{Ledger, checked_sum};
use crate::models::CategoryTotal;
use crate::utils::{align_right, fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn totals(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let items = ledger
        .ranked_totals()
        .context("Could not compute totals by category")?;
    if maybe_print_json(json_flag, jsonl_flag, &items)? {
        return Ok(());
    }
    if items.is_empty() {
        println!("No expenses to summarise yet.");
        return Ok(());
    }
    let mut table = pretty_table(&["Category", "Total"], rows(&items)?);
    align_right(&mut table, &[1]);
    println!("{}", table);
    Ok(())
}

/// One row per category plus a trailing grand total.
pub fn rows(items: &[CategoryTotal]) -> Result<Vec<Vec<String>>> {
    let grand = checked_sum(items.iter().map(|t| t.total))?;
    let mut data: Vec<Vec<String>> = items
        .iter()
        .map(|t| vec![t.category.clone(), fmt_money(&t.total)])
        .collect();
    data.push(vec!["Total".into(), fmt_money(&grand)]);
    Ok(data)
}
