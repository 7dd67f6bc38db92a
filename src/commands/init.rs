// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{Context, Result};

pub fn handle(ledger: &Ledger) -> Result<()> {
    let store = ledger.store();
    let created = store
        .ensure_exists()
        .context("Could not initialise the expense file")?;
    if created {
        println!("Expense file created at {}", store.path().display());
    } else {
        println!("Expense file already exists at {}", store.path().display());
    }
    Ok(())
}
