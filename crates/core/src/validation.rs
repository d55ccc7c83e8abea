//! Table validation.
//!
//! The scorer accepts any profile table. These checks enforce the invariants the reference
//! tables are written to: every profile symptom comes from the catalog, nothing is listed
//! twice, and illness names are unique. They run once, when a [`crate::CheckerConfig`] is built.

use crate::{CheckerError, CheckerResult, IllnessProfile};
use std::collections::HashSet;

/// Validates a catalog and profile table, returning the first violation found.
///
/// # Errors
///
/// Returns a `CheckerError` if:
/// - the catalog is empty or repeats a label,
/// - a profile has no symptoms,
/// - two profiles share a name,
/// - a profile repeats a symptom, or
/// - a profile lists a symptom missing from the catalog.
pub fn validate_tables(catalog: &[&str], profiles: &[IllnessProfile]) -> CheckerResult<()> {
    if catalog.is_empty() {
        return Err(CheckerError::EmptyCatalog);
    }

    let mut known = HashSet::with_capacity(catalog.len());
    for symptom in catalog {
        if !known.insert(*symptom) {
            return Err(CheckerError::DuplicateCatalogSymptom(symptom.to_string()));
        }
    }

    let mut names = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if profile.symptoms.is_empty() {
            return Err(CheckerError::EmptyProfile(profile.name.to_string()));
        }
        if !names.insert(profile.name) {
            return Err(CheckerError::DuplicateIllness(profile.name.to_string()));
        }

        let mut seen = HashSet::with_capacity(profile.symptoms.len());
        for symptom in profile.symptoms {
            if !seen.insert(*symptom) {
                return Err(CheckerError::DuplicateSymptom {
                    illness: profile.name.to_string(),
                    symptom: symptom.to_string(),
                });
            }
            if !known.contains(symptom) {
                return Err(CheckerError::UnknownSymptom {
                    illness: profile.name.to_string(),
                    symptom: symptom.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ILLNESS_PROFILES, SYMPTOM_CATALOG};

    #[test]
    fn test_validate_tables_accepts_reference_data() {
        assert!(validate_tables(SYMPTOM_CATALOG, ILLNESS_PROFILES).is_ok());
    }

    #[test]
    fn test_validate_tables_rejects_empty_catalog() {
        let err = validate_tables(&[], ILLNESS_PROFILES).expect_err("should reject empty");
        assert!(matches!(err, CheckerError::EmptyCatalog));
    }

    #[test]
    fn test_validate_tables_rejects_duplicate_catalog_label() {
        let err = validate_tables(&["Fever", "Fever"], &[]).expect_err("should reject duplicate");
        assert!(matches!(err, CheckerError::DuplicateCatalogSymptom(s) if s == "Fever"));
    }

    #[test]
    fn test_validate_tables_rejects_unknown_symptom() {
        let profiles = [IllnessProfile {
            name: "Hay Fever",
            symptoms: &["Sneezing", "Itchy nose"],
        }];
        let err = validate_tables(SYMPTOM_CATALOG, &profiles).expect_err("should reject unknown");
        assert!(matches!(
            err,
            CheckerError::UnknownSymptom { illness, symptom }
                if illness == "Hay Fever" && symptom == "Itchy nose"
        ));
    }

    #[test]
    fn test_validate_tables_rejects_duplicate_symptom() {
        let profiles = [IllnessProfile {
            name: "Cold",
            symptoms: &["Cough", "Cough"],
        }];
        let err = validate_tables(SYMPTOM_CATALOG, &profiles).expect_err("should reject dup");
        assert!(matches!(err, CheckerError::DuplicateSymptom { symptom, .. } if symptom == "Cough"));
    }

    #[test]
    fn test_validate_tables_rejects_duplicate_illness() {
        let profiles = [
            IllnessProfile {
                name: "Flu",
                symptoms: &["Fever"],
            },
            IllnessProfile {
                name: "Flu",
                symptoms: &["Chills"],
            },
        ];
        let err = validate_tables(SYMPTOM_CATALOG, &profiles).expect_err("should reject dup");
        assert!(matches!(err, CheckerError::DuplicateIllness(name) if name == "Flu"));
    }

    #[test]
    fn test_validate_tables_rejects_empty_profile() {
        let profiles = [IllnessProfile {
            name: "Nothing",
            symptoms: &[],
        }];
        let err = validate_tables(SYMPTOM_CATALOG, &profiles).expect_err("should reject empty");
        assert!(matches!(err, CheckerError::EmptyProfile(name) if name == "Nothing"));
    }
}
