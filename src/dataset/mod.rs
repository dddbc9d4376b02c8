mod model;
mod validate;
mod wire;

pub use model::{LoadOptions, Methodology, ValidationReport};
pub use validate::validate;

use std::io::Read;
use std::path::Path;

use crate::aggregate::ScoreAggregator;
use crate::company::CompanyRecord;
use crate::core::{EsgError, Pillar, ScorecardConfig};
use crate::taxonomy::{Taxonomy, TaxonomyBuilder};
use wire::{CriteriaNode, DatasetDoc};

/// The bundled energy-sector reference dataset.
const REFERENCE_JSON: &str = include_str!("../../data/energy_esg.json");

/// An immutable, validated scoring table: methodology, taxonomy and companies.
///
/// Datasets are loaded once, validated, and never mutated afterwards. Company
/// order is preserved from the source document and is the display order.
///
/// # Example
///
/// ```
/// use esg_scorecard::{Dataset, Pillar};
///
/// let dataset = Dataset::reference()?;
/// let shell = dataset.company("Shell").expect("bundled company");
/// let agg = dataset.aggregator();
/// assert_eq!(agg.compute_pillar_total(shell, Pillar::Environmental), 49.0);
/// # Ok::<(), esg_scorecard::EsgError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    methodology: Methodology,
    taxonomy: Taxonomy,
    companies: Vec<CompanyRecord>,
    warnings: Vec<String>,
}

impl Dataset {
    /// Loads the bundled energy-sector dataset with [`LoadOptions::energy`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled document fails to parse or validate.
    pub fn reference() -> Result<Self, EsgError> {
        Self::from_json_str_with(REFERENCE_JSON, &LoadOptions::energy())
    }

    /// Assembles a dataset from parts and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Validation`] if any validation error is found.
    pub fn new(
        methodology: Methodology,
        taxonomy: Taxonomy,
        companies: Vec<CompanyRecord>,
        options: &LoadOptions,
    ) -> Result<Self, EsgError> {
        let mut dataset = Self {
            methodology,
            taxonomy,
            companies,
            warnings: Vec::new(),
        };
        let report = validate(&dataset, options);
        if !report.is_valid() {
            return Err(EsgError::Validation(report.errors));
        }

        #[cfg(feature = "tracing")]
        for warning in &report.warnings {
            tracing::warn!(%warning, "dataset validation warning");
        }

        dataset.warnings = report.warnings;
        Ok(dataset)
    }

    /// Parses and validates a JSON dataset with default options.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Json`] for malformed documents and
    /// [`EsgError::Validation`] for documents that fail validation.
    pub fn from_json_str(json: &str) -> Result<Self, EsgError> {
        Self::from_json_str_with(json, &LoadOptions::default())
    }

    /// Parses and validates a JSON dataset.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_json_str`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(json), err, fields(bytes = json.len())))]
    pub fn from_json_str_with(json: &str, options: &LoadOptions) -> Result<Self, EsgError> {
        let doc: DatasetDoc = serde_json::from_str(json)?;
        Self::from_doc(doc, options)
    }

    /// Reads, parses and validates a JSON dataset from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Io`] if reading fails, otherwise as [`Dataset::from_json_str`].
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, EsgError> {
        let doc: DatasetDoc = serde_json::from_reader(reader)?;
        Self::from_doc(doc, options)
    }

    /// Reads, parses and validates a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Io`] if the file cannot be read, otherwise as
    /// [`Dataset::from_json_str`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(path = %path.as_ref().display()))
    )]
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, EsgError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str_with(&json, options)
    }

    fn from_doc(doc: DatasetDoc, options: &LoadOptions) -> Result<Self, EsgError> {
        let DatasetDoc {
            methodology,
            criteria,
            companies,
        } = doc;
        Self::new(methodology, taxonomy_from_wire(criteria), companies, options)
    }

    /// Serializes the dataset back into its JSON document shape.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, EsgError> {
        let doc = DatasetDoc {
            methodology: self.methodology.clone(),
            criteria: CriteriaNode {
                environmental: self.taxonomy.criteria(Pillar::Environmental).to_vec(),
                social: self.taxonomy.criteria(Pillar::Social).to_vec(),
                governance: self.taxonomy.criteria(Pillar::Governance).to_vec(),
            },
            companies: self.companies.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    #[must_use]
    pub const fn methodology(&self) -> &Methodology {
        &self.methodology
    }

    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Companies in document order.
    #[must_use]
    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    /// Looks up a company by its exact name.
    #[must_use]
    pub fn company(&self, name: &str) -> Option<&CompanyRecord> {
        self.companies.iter().find(|c| c.name == name)
    }

    /// Warnings produced while the dataset was validated.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// An aggregator over this dataset's taxonomy with the default configuration.
    #[must_use]
    pub fn aggregator(&self) -> ScoreAggregator<'_> {
        ScoreAggregator::new(&self.taxonomy)
    }

    /// An aggregator over this dataset's taxonomy with a custom configuration.
    #[must_use]
    pub const fn aggregator_with(&self, config: ScorecardConfig) -> ScoreAggregator<'_> {
        ScoreAggregator::with_config(&self.taxonomy, config)
    }
}

fn taxonomy_from_wire(node: CriteriaNode) -> Taxonomy {
    let mut builder = TaxonomyBuilder::default();
    let CriteriaNode {
        environmental,
        social,
        governance,
    } = node;
    for (pillar, criteria) in Pillar::ALL.into_iter().zip([environmental, social, governance]) {
        for criterion in criteria {
            builder.push(pillar, criterion);
        }
    }
    builder.build()
}
