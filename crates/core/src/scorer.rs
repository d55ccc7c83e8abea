//! Symptom overlap scoring.
//!
//! Each illness profile is scored by counting how many of the chosen symptoms appear in its
//! symptom list. The count walks the chosen sequence, so a symptom chosen twice is counted
//! twice and `percent` can go above 100. Callers that want set semantics must deduplicate
//! their input first.

use crate::constants::NO_SYMPTOMS_MESSAGE;
use crate::IllnessProfile;
use serde::Serialize;

/// Score of a single illness profile against a selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredResult {
    pub name: String,
    pub match_count: usize,
    pub total: usize,
    pub percent: f64,
}

/// Everything the presentation layer needs to render a scoring request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Echo of the submitted selection, in submitted order.
    pub chosen: Vec<String>,
    /// Illnesses with at least one match, best first.
    pub results: Vec<ScoredResult>,
    /// Illnesses tied on the highest positive match count, in table order.
    pub best: Vec<String>,
    /// Empty, or an advisory when nothing was selected.
    pub message: String,
}

impl ScoreReport {
    fn no_selection() -> Self {
        Self {
            chosen: Vec::new(),
            results: Vec::new(),
            best: Vec::new(),
            message: NO_SYMPTOMS_MESSAGE.to_string(),
        }
    }

    /// True when the report comes from an empty selection rather than from scoring.
    pub fn is_no_selection(&self) -> bool {
        !self.message.is_empty()
    }
}

/// `match_count / total * 100` rounded to one decimal place, halves to even.
pub fn match_percent(match_count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = match_count as f64 / total as f64 * 100.0;
    (percent * 10.0).round_ties_even() / 10.0
}

/// Scores every profile against `chosen` and ranks the matches.
///
/// An empty selection short-circuits to the no-selection report without looking at the
/// profiles. Otherwise every profile is visited in table order: profiles with no match are left
/// out of `results`, and `best` collects the profiles sharing the highest positive match count.
/// Results are sorted by `(match_count, percent)` descending; the sort is stable so equal keys
/// keep table order.
pub fn score<S: AsRef<str>>(chosen: &[S], profiles: &[IllnessProfile]) -> ScoreReport {
    if chosen.is_empty() {
        tracing::debug!("no symptoms selected");
        return ScoreReport::no_selection();
    }

    let mut results = Vec::new();
    let mut best_score = 0usize;
    let mut best_list: Vec<String> = Vec::new();

    for profile in profiles {
        let match_count = chosen
            .iter()
            .filter(|s| profile.has_symptom(s.as_ref()))
            .count();
        let total = profile.total();
        let percent = match_percent(match_count, total);

        if match_count > 0 {
            results.push(ScoredResult {
                name: profile.name.to_string(),
                match_count,
                total,
                percent,
            });
        }

        if match_count > best_score {
            best_score = match_count;
            best_list = if match_count != 0 {
                vec![profile.name.to_string()]
            } else {
                Vec::new()
            };
        } else if match_count == best_score && match_count != 0 {
            best_list.push(profile.name.to_string());
        }
    }

    results.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then(b.percent.total_cmp(&a.percent))
    });

    tracing::debug!(
        chosen = chosen.len(),
        matched = results.len(),
        best = ?best_list,
        "scored selection"
    );

    ScoreReport {
        chosen: chosen.iter().map(|s| s.as_ref().to_string()).collect(),
        results,
        best: best_list,
        message: String::new(),
    }
}
