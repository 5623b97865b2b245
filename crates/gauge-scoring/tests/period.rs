mod common;

use std::cmp::Ordering;

use common::*;
use gauge_scoring::period::{
    available_periods, compare_periods, department_history, latest_for_department, parse_period,
};
use proptest::prelude::*;

#[test]
fn quarters_order_within_a_year() {
    assert_eq!(compare_periods("Q1 2024", "Q2 2024"), Ordering::Less);
    assert_eq!(compare_periods("Q4 2024", "Q2 2024"), Ordering::Greater);
}

#[test]
fn year_takes_precedence_over_quarter() {
    assert_eq!(compare_periods("Q4 2023", "Q1 2024"), Ordering::Less);
    assert_eq!(compare_periods("Q1 2025", "Q4 2024"), Ordering::Greater);
}

#[test]
fn identical_periods_are_equal() {
    assert_eq!(compare_periods("Q1 2024", "Q1 2024"), Ordering::Equal);
}

#[test]
fn parses_quarter_and_year() {
    assert_eq!(parse_period("Q3 2025"), Some((3, 2025)));
    assert_eq!(parse_period("  Q3   2025 "), Some((3, 2025)));
    assert_eq!(parse_period("FY 2025"), None);
    assert_eq!(parse_period("Q3"), None);
    assert_eq!(parse_period("Q+3 2025"), None);
    assert_eq!(parse_period("Q3 2025 extra"), None);
}

#[test]
fn malformed_labels_compare_as_strings() {
    assert_eq!(compare_periods("alpha", "beta"), Ordering::Less);
    assert_eq!(compare_periods("beta", "alpha"), Ordering::Greater);
    assert_eq!(compare_periods("H1 2024", "H1 2024"), Ordering::Equal);
}

#[test]
fn malformed_labels_sort_after_well_formed_ones() {
    let mut labels = vec!["Q10 2024", "Q1x", "Q2 2024", "H2 2023"];
    labels.sort_by(|a, b| compare_periods(a, b));
    assert_eq!(labels, ["Q2 2024", "Q10 2024", "H2 2023", "Q1x"]);
}

#[test]
fn mixed_comparison_puts_malformed_label_last_either_way() {
    assert_eq!(compare_periods("Annual", "Q1 2024"), Ordering::Greater);
    assert_eq!(compare_periods("Q1 2024", "Annual"), Ordering::Less);
    // "0" would sort first as a string, but it is not a period.
    assert_eq!(compare_periods("0", "Q4 2099"), Ordering::Greater);
}

#[test]
fn available_periods_are_distinct_and_newest_first() {
    let assessments = vec![
        assessment("a1", "Finance", "Q2 2024", "t", vec![]),
        assessment("a2", "Finance", "Q4 2023", "t", vec![]),
        assessment("a3", "HR", "Q2 2024", "t", vec![]),
        assessment("a4", "HR", "Q1 2025", "t", vec![]),
    ];
    assert_eq!(
        available_periods(&assessments),
        ["Q1 2025", "Q2 2024", "Q4 2023"]
    );
}

#[test]
fn department_history_is_chronological() {
    let assessments = vec![
        assessment("a1", "Finance", "Q3 2024", "t", vec![]),
        assessment("a2", "HR", "Q1 2024", "t", vec![]),
        assessment("a3", "Finance", "Q1 2024", "t", vec![]),
        assessment("a4", "Finance", "Q4 2023", "t", vec![]),
    ];
    let ids: Vec<&str> = department_history(&assessments, "Finance")
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, ["a4", "a3", "a1"]);

    assert_eq!(
        latest_for_department(&assessments, "Finance").map(|a| a.id.as_str()),
        Some("a1")
    );
    assert!(latest_for_department(&assessments, "Legal").is_none());
}

fn period_label() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..=4, 2000u32..2100).prop_map(|(q, y)| format!("Q{q} {y}")),
        "[A-Za-z0-9 ]{0,8}",
    ]
}

proptest! {
    #[test]
    fn comparison_is_antisymmetric(a in period_label(), b in period_label()) {
        prop_assert_eq!(compare_periods(&a, &b), compare_periods(&b, &a).reverse());
    }

    #[test]
    fn comparison_is_transitive(a in period_label(), b in period_label(), c in period_label()) {
        if compare_periods(&a, &b) != Ordering::Greater
            && compare_periods(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(compare_periods(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn well_formed_periods_follow_year_then_quarter(
        q1 in 1u32..=4, y1 in 2000u32..2100, q2 in 1u32..=4, y2 in 2000u32..2100
    ) {
        let expected = (y1, q1).cmp(&(y2, q2));
        prop_assert_eq!(
            compare_periods(&format!("Q{q1} {y1}"), &format!("Q{q2} {y2}")),
            expected
        );
    }
}
