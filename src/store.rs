// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat CSV file holding every recorded expense, one per line.

use crate::error::StorageError;
use crate::models::Expense;
use crate::utils::{DATE_FORMAT, MAX_AMOUNT, fmt_money};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

static DATA_FILE: Lazy<(&str, &str)> = Lazy::new(|| ("data", "expenses.csv"));

pub const HEADER: [&str; 4] = ["date", "description", "amount", "category"];

/// Location of the expense file, relative to the working directory.
pub fn data_path() -> PathBuf {
    Path::new(DATA_FILE.0).join(DATA_FILE.1)
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Self {
        Self::new(data_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and a header-only file when missing.
    /// Returns `true` if the file was created.
    pub fn ensure_exists(&self) -> Result<bool, StorageError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StorageError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let header = encode_record(HEADER).map_err(|source| self.write_err(source))?;
        fs::write(&self.path, header).map_err(|source| self.write_err(source))?;
        tracing::debug!(path = %self.path.display(), "created expense file");
        Ok(true)
    }

    /// Appends one expense. The whole line goes out in a single write.
    pub fn append(&self, expense: &Expense) -> Result<(), StorageError> {
        self.ensure_exists()?;
        let mut line = encode_record([
            expense.date.format(DATE_FORMAT).to_string(),
            expense.description.clone(),
            fmt_money(&expense.amount),
            expense.category.clone(),
        ])
        .map_err(|source| self.write_err(source))?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StorageError::Open {
                path: self.path.clone(),
                source,
            })?;
        if !ends_with_newline(&mut file).map_err(|source| self.write_err(source))? {
            line.insert(0, b'\n');
        }
        file.write_all(&line)
            .and_then(|_| file.flush())
            .map_err(|source| self.write_err(source))?;
        tracing::debug!(
            path = %self.path.display(),
            date = %expense.date,
            category = %expense.category,
            "appended expense"
        );
        Ok(())
    }

    /// All expenses in insertion order. A missing file reads as empty.
    pub fn load_all(&self) -> Result<Vec<Expense>, StorageError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no expense file yet");
            return Ok(Vec::new());
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_path(&self.path)
            .map_err(|source| self.read_err(source))?;

        let mut out = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let rec = result.map_err(|source| self.read_err(source))?;
            if idx == 0 && is_header(&rec) {
                continue;
            }
            let line = rec.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);
            let expense = decode_record(&rec).map_err(|reason| StorageError::Corrupt {
                path: self.path.clone(),
                line,
                reason,
            })?;
            out.push(expense);
        }
        tracing::debug!(path = %self.path.display(), count = out.len(), "loaded expenses");
        Ok(out)
    }

    fn write_err(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn read_err(&self, source: csv::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

fn encode_record<I, T>(fields: I) -> io::Result<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(fields)?;
    wtr.into_inner().map_err(|e| e.into_error())
}

fn ends_with_newline(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn is_header(rec: &StringRecord) -> bool {
    rec.len() == HEADER.len()
        && rec
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

fn decode_record(rec: &StringRecord) -> Result<Expense, String> {
    if rec.len() != HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            rec.len()
        ));
    }
    let date_raw = &rec[0];
    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}'", date_raw))?;
    let description = rec[1].to_string();
    if description.is_empty() {
        return Err("empty description".into());
    }
    let amount_raw = &rec[2];
    let amount = amount_raw
        .parse::<Decimal>()
        .map_err(|_| format!("invalid amount '{}'", amount_raw))?;
    if amount <= Decimal::ZERO {
        return Err(format!("non-positive amount '{}'", amount_raw));
    }
    if amount > MAX_AMOUNT {
        return Err(format!("amount '{}' exceeds {}", amount_raw, MAX_AMOUNT));
    }
    let category = rec[3].to_string();
    if category.is_empty() {
        return Err("empty category".into());
    }
    Ok(Expense {
        date,
        description,
        amount,
        category,
    })
}
