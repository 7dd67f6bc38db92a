// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use expense_tracker::{cli, commands, ledger::Ledger, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let ledger = Ledger::open_default();

    match matches.subcommand() {
        Some(("init", _)) => commands::init::handle(&ledger)?,
        Some(("add", sub)) => commands::expenses::add(&ledger, sub)?,
        Some(("list", sub)) => commands::expenses::list(&ledger, sub)?,
        Some(("totals", sub)) => commands::reports::totals(&ledger, sub)?,
        Some(("rules", _)) => commands::rules::handle(&ledger)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
