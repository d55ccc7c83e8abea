//! Constants used throughout the symptom checker core crate.
//!
//! The symptom catalog and the illness profile table are fixed at compile time. Nothing in the
//! workspace mutates them; services hold `&'static` references to these slices.

use crate::IllnessProfile;

/// Default bind address for the HTTP server when none is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Message returned when the caller selected no symptoms.
pub const NO_SYMPTOMS_MESSAGE: &str = "No symptoms were selected. Go back and choose at least one.";

/// The symptoms offered to users, in display order.
pub const SYMPTOM_CATALOG: &[&str] = &[
    "Fever",
    "Cough",
    "Sore throat",
    "Runny or stuffy nose",
    "Sneezing",
    "Shortness of breath",
    "Chest pain",
    "Fatigue",
    "Headache",
    "Body aches",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Stomach pain",
    "Loss of appetite",
    "Dizziness",
    "Rash",
    "Itchy or watery eyes",
    "Loss of taste or smell",
    "Chills",
];

/// Reference illness profiles. Table order decides tie order in rankings.
pub const ILLNESS_PROFILES: &[IllnessProfile] = &[
    IllnessProfile {
        name: "Common Cold",
        symptoms: &[
            "Cough",
            "Sore throat",
            "Runny or stuffy nose",
            "Sneezing",
            "Fatigue",
            "Headache",
        ],
    },
    IllnessProfile {
        name: "Flu",
        symptoms: &[
            "Fever",
            "Chills",
            "Body aches",
            "Fatigue",
            "Cough",
            "Headache",
        ],
    },
    IllnessProfile {
        name: "Allergies",
        symptoms: &[
            "Sneezing",
            "Runny or stuffy nose",
            "Itchy or watery eyes",
            "Sore throat",
        ],
    },
    IllnessProfile {
        name: "Stomach Bug",
        symptoms: &[
            "Nausea",
            "Vomiting",
            "Diarrhea",
            "Stomach pain",
            "Loss of appetite",
            "Fever",
        ],
    },
    IllnessProfile {
        name: "COVID-like Illness",
        symptoms: &[
            "Fever",
            "Cough",
            "Fatigue",
            "Loss of taste or smell",
            "Shortness of breath",
            "Headache",
        ],
    },
];
