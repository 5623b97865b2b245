use gauge_core::models::assessment::Assessment;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Completion statistics for a department head's assessment history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DepartmentStats {
    pub completed_count: usize,
    /// Fastest completion, in seconds.
    pub best_time: Option<u64>,
    /// Mean completion time, in seconds.
    pub average_time: Option<f64>,
    /// Percentage of completed assessments with a due date that were last
    /// saved on or before it.
    pub on_time_rate: Option<f64>,
}

impl DepartmentStats {
    /// Completed means Submitted or Locked with a recorded, non-zero duration.
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a Assessment>) -> Self {
        let completed: Vec<&Assessment> = history
            .into_iter()
            .filter(|a| a.status.is_completed() && a.duration.is_some_and(|d| d > 0))
            .collect();

        let durations: Vec<u64> = completed.iter().filter_map(|a| a.duration).collect();
        let best_time = durations.iter().copied().min();
        let average_time = (!durations.is_empty())
            .then(|| durations.iter().sum::<u64>() as f64 / durations.len() as f64);

        let with_due_dates: Vec<_> = completed
            .iter()
            .filter_map(|a| a.due_date.map(|due| (a.last_saved, due)))
            .collect();
        let on_time = with_due_dates
            .iter()
            .filter(|(saved, due)| saved <= due)
            .count();
        let on_time_rate = (!with_due_dates.is_empty())
            .then(|| on_time as f64 / with_due_dates.len() as f64 * 100.0);

        Self {
            completed_count: completed.len(),
            best_time,
            average_time,
            on_time_rate,
        }
    }
}
