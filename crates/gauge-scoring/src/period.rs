//! Reporting period labels ("Q3 2025") and chronological ordering.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use gauge_core::models::assessment::Assessment;

/// Sort key for a period label.
///
/// Well-formed labels order by year then quarter. Labels that do not parse
/// order lexicographically among themselves and after every well-formed
/// label, which keeps the ordering total when the two kinds are mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PeriodKey<'a> {
    Quarter { year: u32, quarter: u32 },
    Unparsed(&'a str),
}

impl<'a> PeriodKey<'a> {
    fn of(label: &'a str) -> Self {
        match parse_period(label) {
            Some((quarter, year)) => PeriodKey::Quarter { year, quarter },
            None => PeriodKey::Unparsed(label),
        }
    }
}

/// Parse `"Q<n> <year>"` into `(quarter, year)`.
pub fn parse_period(label: &str) -> Option<(u32, u32)> {
    let mut parts = label.split_whitespace();
    let quarter = parts.next()?.strip_prefix('Q')?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((parse_digits(quarter)?, parse_digits(year)?))
}

fn parse_digits(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Chronological comparison of two period labels: year first, then quarter.
///
/// Never fails. When both labels are malformed they compare as plain
/// strings. A malformed label always sorts after a well-formed one, so in a
/// mixed list every `Q<n> <year>` label comes first, then the rest
/// lexicographically.
pub fn compare_periods(a: &str, b: &str) -> Ordering {
    PeriodKey::of(a).cmp(&PeriodKey::of(b))
}

/// Distinct period labels across `assessments`, newest first.
pub fn available_periods(assessments: &[Assessment]) -> Vec<String> {
    let distinct: BTreeSet<&str> = assessments.iter().map(|a| a.period.as_str()).collect();
    let mut periods: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    periods.sort_by(|a, b| compare_periods(b, a));
    periods
}

/// A department's assessments, oldest period first.
pub fn department_history<'a>(
    assessments: &'a [Assessment],
    department_name: &str,
) -> Vec<&'a Assessment> {
    let mut history: Vec<&Assessment> = assessments
        .iter()
        .filter(|a| a.department_name == department_name)
        .collect();
    sort_chronologically(&mut history);
    history
}

/// The department's assessment for its most recent period.
pub fn latest_for_department<'a>(
    assessments: &'a [Assessment],
    department_name: &str,
) -> Option<&'a Assessment> {
    department_history(assessments, department_name).pop()
}

/// Stable in-place sort by period, oldest first.
pub fn sort_chronologically(assessments: &mut [&Assessment]) {
    assessments.sort_by(|a, b| compare_periods(&a.period, &b.period));
}
