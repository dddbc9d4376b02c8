use serde::{Deserialize, Serialize};

/// Descriptive header of a scoring dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Methodology {
    /// Name of the scoring standard, e.g. `"SIG's Standard"`.
    pub name: String,
    /// Industry the taxonomy was written for.
    pub industry: String,
    /// Publication year of the scores.
    pub year: u16,
    /// Free-form methodology notes shown alongside the criteria.
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Controls how strictly a dataset is validated while loading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadOptions {
    /// Promote every validation warning to an error.
    pub strict: bool,
    /// Required ceiling per pillar, in [`crate::Pillar::ALL`] order.
    pub expected_ceilings: Option<[f64; 3]>,
}

impl LoadOptions {
    /// Options used for the bundled energy-sector dataset: ceilings 60 / 30 / 10.
    #[must_use]
    pub const fn energy() -> Self {
        Self {
            strict: false,
            expected_ceilings: Some([60.0, 30.0, 10.0]),
        }
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn expected_ceilings(mut self, ceilings: [f64; 3]) -> Self {
        self.expected_ceilings = Some(ceilings);
        self
    }
}

/// Outcome of the schema-validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn error(&mut self, msg: String) {
        self.errors.push(msg);
    }

    pub(crate) fn warn(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
