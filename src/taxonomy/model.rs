use serde::{Deserialize, Serialize};

/// A single named, weighted scoring factor within a pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique within its pillar; companies key their raw scores by this name.
    pub name: String,
    /// Maximum points the criterion nominally contributes.
    pub weight: f64,
    /// Short explanation shown in the criteria view.
    pub description: String,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            description: description.into(),
        }
    }
}
