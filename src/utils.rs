// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Once;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest single amount accepted: 999,999,999,999.99.
// `Decimal::new` is not const; these parts encode 99_999_999_999_999 with scale 2.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, 2);

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. Logs go to stderr; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Parses a positive amount, accepting thousands separators, rounded to cents.
pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    let raw = cleaned
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))?;
    let amount = round_cents(raw);
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount, MAX_AMOUNT));
    }
    Ok(amount)
}

pub fn round_cents(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Right-aligns the given columns, for money.
pub fn align_right(t: &mut Table, columns: &[usize]) {
    for idx in columns {
        if let Some(col) = t.column_mut(*idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
