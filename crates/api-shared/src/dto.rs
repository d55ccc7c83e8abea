//! Request and response bodies.
//!
//! These mirror the core types with owned strings and OpenAPI schemas so they can be
//! serialised by axum handlers and documented by utoipa.

use serde::{Deserialize, Serialize};
use symptom_core::{IllnessProfile, ScoreReport, ScoredResult};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomsRes {
    pub symptoms: Vec<String>,
}

impl SymptomsRes {
    pub fn from_catalog(catalog: &[&str]) -> Self {
        Self {
            symptoms: catalog.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IllnessRes {
    pub name: String,
    pub symptoms: Vec<String>,
}

impl From<&IllnessProfile> for IllnessRes {
    fn from(profile: &IllnessProfile) -> Self {
        Self {
            name: profile.name.to_string(),
            symptoms: profile.symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IllnessesRes {
    pub illnesses: Vec<IllnessRes>,
}

/// Symptoms selected by the user, in submitted order. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreReq {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredIllness {
    pub name: String,
    pub match_count: usize,
    pub total: usize,
    pub percent: f64,
}

impl From<ScoredResult> for ScoredIllness {
    fn from(r: ScoredResult) -> Self {
        Self {
            name: r.name,
            match_count: r.match_count,
            total: r.total,
            percent: r.percent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreRes {
    pub chosen: Vec<String>,
    pub results: Vec<ScoredIllness>,
    pub best: Vec<String>,
    pub message: String,
}

impl From<ScoreReport> for ScoreRes {
    fn from(report: ScoreReport) -> Self {
        Self {
            chosen: report.chosen,
            results: report.results.into_iter().map(Into::into).collect(),
            best: report.best,
            message: report.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_core::{SymptomChecker, NO_SYMPTOMS_MESSAGE};

    #[test]
    fn test_score_res_keeps_report_order() {
        let report = SymptomChecker::default().score(&["Sneezing", "Runny or stuffy nose"]);
        let res = ScoreRes::from(report);

        assert_eq!(res.chosen, vec!["Sneezing", "Runny or stuffy nose"]);
        assert_eq!(res.results[0].name, "Allergies");
        assert_eq!(res.results[1].name, "Common Cold");
        assert_eq!(res.best, vec!["Common Cold", "Allergies"]);
        assert_eq!(res.message, "");
    }

    #[test]
    fn test_score_res_carries_no_selection_message() {
        let empty: [&str; 0] = [];
        let res = ScoreRes::from(SymptomChecker::default().score(&empty));
        assert!(res.results.is_empty());
        assert_eq!(res.message, NO_SYMPTOMS_MESSAGE);
    }

    #[test]
    fn test_score_req_defaults_missing_symptoms() {
        let req: ScoreReq = serde_json::from_str("{}").unwrap();
        assert!(req.symptoms.is_empty());
    }

    #[test]
    fn test_illness_res_from_profile() {
        let checker = SymptomChecker::default();
        let res = IllnessRes::from(checker.profile("Allergies").unwrap());
        assert_eq!(res.symptoms.len(), 4);
        assert_eq!(res.symptoms[2], "Itchy or watery eyes");
    }
}
