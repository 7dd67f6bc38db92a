// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("expense-tracker")
        .version(crate_version!())
        .about("Record expenses, auto-categorise them and report totals by category")
        .subcommand(Command::new("init").about("Create the expense file if it does not exist"))
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(
                    Arg::new("date")
                        .required(true)
                        .help("Date of the expense (YYYY-MM-DD)"),
                )
                .arg(
                    Arg::new("description")
                        .required(true)
                        .help("What the money was spent on"),
                )
                .arg(
                    Arg::new("amount")
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Amount spent, e.g. 9.99"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("Category to use instead of the keyword rules"),
                ),
        )
        .subcommand(output_flags(
            Command::new("list").about("List all recorded expenses"),
        ))
        .subcommand(output_flags(
            Command::new("totals").about("Show total spend per category"),
        ))
        .subcommand(Command::new("rules").about("Show the keyword rules used to pick categories"))
}
