// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categorizer::FALLBACK_CATEGORY;
use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(ledger: &Ledger) -> Result<()> {
    let data: Vec<Vec<String>> = ledger
        .categorizer()
        .rules()
        .iter()
        .enumerate()
        .map(|(i, r)| vec![(i + 1).to_string(), r.keyword.clone(), r.category.clone()])
        .collect();
    println!("{}", pretty_table(&["#", "Keyword", "Category"], data));
    println!("Descriptions matching no keyword are filed under '{}'.", FALLBACK_CATEGORY);
    Ok(())
}
