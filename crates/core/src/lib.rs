//! # Symptom Core
//!
//! Core logic for the symptom checker.
//!
//! This crate contains the fixed data tables and pure operations on them:
//! - the symptom catalog and the illness profile table
//! - the overlap scorer and its ranking rules
//! - startup configuration and table validation
//!
//! **No API concerns**: HTTP routing, HTML rendering and CLI parsing belong in `api-rest`,
//! `api-shared` or `symptom-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod scorer;
pub mod validation;

pub use config::{rest_addr_from_env_value, CheckerConfig};
pub use constants::{DEFAULT_REST_ADDR, ILLNESS_PROFILES, NO_SYMPTOMS_MESSAGE, SYMPTOM_CATALOG};
pub use error::{CheckerError, CheckerResult};
pub use scorer::{match_percent, score, ScoreReport, ScoredResult};

/// A named illness and the symptoms associated with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllnessProfile {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
}

impl IllnessProfile {
    /// Number of symptoms listed for the illness, duplicates included.
    pub fn total(&self) -> usize {
        self.symptoms.len()
    }

    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.contains(&symptom)
    }
}

/// Scoring service over a validated configuration.
///
/// Cheap to clone; the tables it reads are `'static`.
#[derive(Clone, Debug, Default)]
pub struct SymptomChecker {
    cfg: CheckerConfig,
}

impl SymptomChecker {
    /// Creates a checker over the given configuration.
    pub fn new(cfg: CheckerConfig) -> Self {
        Self { cfg }
    }

    /// The symptoms offered for selection, in display order.
    pub fn catalog(&self) -> &'static [&'static str] {
        self.cfg.catalog()
    }

    /// The illness profiles, in table order.
    pub fn profiles(&self) -> &'static [IllnessProfile] {
        self.cfg.profiles()
    }

    /// Looks up a profile by exact name.
    pub fn profile(&self, name: &str) -> Option<&'static IllnessProfile> {
        self.cfg.profiles().iter().find(|p| p.name == name)
    }

    /// Scores `chosen` against the configured profiles.
    ///
    /// See [`scorer::score`] for the ranking rules.
    pub fn score<S: AsRef<str>>(&self, chosen: &[S]) -> ScoreReport {
        scorer::score(chosen, self.cfg.profiles())
    }
}
