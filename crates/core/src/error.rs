#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("symptom catalog is empty")]
    EmptyCatalog,
    #[error("symptom catalog lists {0:?} more than once")]
    DuplicateCatalogSymptom(String),
    #[error("illness {0:?} has no symptoms")]
    EmptyProfile(String),
    #[error("illness {0:?} is defined more than once")]
    DuplicateIllness(String),
    #[error("illness {illness:?} lists symptom {symptom:?} more than once")]
    DuplicateSymptom { illness: String, symptom: String },
    #[error("illness {illness:?} lists symptom {symptom:?} which is not in the catalog")]
    UnknownSymptom { illness: String, symptom: String },
    #[error("failed to parse socket address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
}

pub type CheckerResult<T> = std::result::Result<T, CheckerError>;
