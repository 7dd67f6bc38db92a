// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword based categorisation of expense descriptions.
//!
//! Rules are checked in order and the first keyword found anywhere in the
//! description (ignoring case) decides the category.

use crate::models::CategoryRule;

pub const FALLBACK_CATEGORY: &str = "Other";

const BUILTIN_RULES: &[(&str, &str)] = &[
    ("tesco", "Groceries"),
    ("sainsbury", "Groceries"),
    ("aldi", "Groceries"),
    ("uber", "Transport"),
    ("tfl", "Transport"),
    ("bus", "Transport"),
    ("train", "Transport"),
    ("netflix", "Entertainment"),
    ("prime", "Entertainment"),
    ("cinema", "Entertainment"),
    ("gym", "Health"),
    ("pharmacy", "Health"),
    ("boots", "Health"),
];

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Categorizer {
    /// Blank keywords or categories are dropped, they would match everything
    /// or produce an empty label.
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter(|r| !r.keyword.trim().is_empty() && !r.category.trim().is_empty())
            .map(|r| CategoryRule::new(r.keyword.trim(), r.category.trim()))
            .collect();
        Self { rules }
    }

    pub fn classify(&self, description: &str) -> String {
        let hay = description.to_lowercase();
        self.rules
            .iter()
            .find(|r| hay.contains(&r.keyword))
            .map(|r| r.category.clone())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(
            BUILTIN_RULES
                .iter()
                .map(|(kw, cat)| CategoryRule::new(kw, cat))
                .collect(),
        )
    }
}
