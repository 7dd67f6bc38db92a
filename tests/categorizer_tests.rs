// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expense_tracker::categorizer::{Categorizer, FALLBACK_CATEGORY};
use expense_tracker::models::CategoryRule;

#[test]
fn builtin_rules_classify_known_vendors() {
    let c = Categorizer::default();
    assert_eq!(c.classify("Tesco run"), "Groceries");
    assert_eq!(c.classify("Uber ride"), "Transport");
    assert_eq!(c.classify("mystery vendor"), "Other");
}

#[test]
fn matching_ignores_case_and_position() {
    let c = Categorizer::default();
    assert_eq!(c.classify("weekly SAINSBURY'S shop"), "Groceries");
    assert_eq!(c.classify("monthly netflix"), "Entertainment");
    assert_eq!(c.classify("Boots meal deal"), "Health");
}

#[test]
fn first_matching_rule_wins() {
    let c = Categorizer::new(vec![
        CategoryRule::new("coffee", "Eating Out"),
        CategoryRule::new("tesco", "Groceries"),
    ]);
    assert_eq!(c.classify("Tesco coffee"), "Eating Out");

    let builtin = Categorizer::default();
    // "tesco" comes before "train" in the built-in table
    assert_eq!(builtin.classify("tesco at the train station"), "Groceries");
}

#[test]
fn empty_description_falls_back() {
    let c = Categorizer::default();
    assert_eq!(c.classify(""), FALLBACK_CATEGORY);
}

#[test]
fn blank_rules_are_ignored() {
    let c = Categorizer::new(vec![
        CategoryRule::new("", "Everything"),
        CategoryRule::new("rent", "  "),
        CategoryRule::new(" Rent ", "Housing"),
    ]);
    assert_eq!(c.rules().len(), 1);
    assert_eq!(c.rules()[0].keyword, "rent");
    assert_eq!(c.classify("March RENT"), "Housing");
    assert_eq!(c.classify("groceries"), FALLBACK_CATEGORY);
}

#[test]
fn builtin_rules_keep_their_order() {
    let c = Categorizer::default();
    let keywords: Vec<&str> = c.rules().iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(keywords.first(), Some(&"tesco"));
    assert_eq!(keywords.last(), Some(&"boots"));
    assert_eq!(keywords.len(), 13);
}
