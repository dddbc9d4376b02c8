use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Aggregation itself never fails; errors only arise while loading a dataset,
/// parsing identifiers, or resolving a selection against the loaded companies.
#[derive(Debug, Error)]
pub enum EsgError {
    /// The dataset document could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset parsed but failed schema validation.
    #[error("dataset validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// A pillar identifier did not match `environmental`, `social` or `governance`.
    #[error("unknown pillar: {0}")]
    UnknownPillar(String),

    /// A risk label did not match `Low Risk`, `Medium Risk` or `High Risk`.
    #[error("unknown risk tier: {0}")]
    UnknownRiskTier(String),

    /// A company name was not present in the dataset.
    #[error("unknown company: {0}")]
    UnknownCompany(String),
}
