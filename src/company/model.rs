use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Pillar, RiskTier};

/// Raw criterion scores of one company, keyed by criterion name per pillar.
///
/// Keys other than the three pillar names are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PillarScores {
    #[serde(default)]
    pub environmental: BTreeMap<String, f64>,
    #[serde(default)]
    pub social: BTreeMap<String, f64>,
    #[serde(default)]
    pub governance: BTreeMap<String, f64>,
}

impl PillarScores {
    /// All raw scores recorded under `pillar`.
    #[must_use]
    pub const fn pillar(&self, pillar: Pillar) -> &BTreeMap<String, f64> {
        match pillar {
            Pillar::Environmental => &self.environmental,
            Pillar::Social => &self.social,
            Pillar::Governance => &self.governance,
        }
    }

    /// The raw score for one criterion, if the company has an entry for it.
    #[must_use]
    pub fn get(&self, pillar: Pillar, criterion: &str) -> Option<f64> {
        self.pillar(pillar).get(criterion).copied()
    }

    /// Records a raw score, returning the previous value if any.
    pub fn insert(&mut self, pillar: Pillar, criterion: impl Into<String>, score: f64) -> Option<f64> {
        let map = match pillar {
            Pillar::Environmental => &mut self.environmental,
            Pillar::Social => &mut self.social,
            Pillar::Governance => &mut self.governance,
        };
        map.insert(criterion.into(), score)
    }

    /// Every `(pillar, criterion, score)` entry in pillar order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, &str, f64)> + '_ {
        Pillar::ALL.into_iter().flat_map(move |p| {
            self.pillar(p)
                .iter()
                .map(move |(name, score)| (p, name.as_str(), *score))
        })
    }
}

/// One scored company as loaded from a dataset.
///
/// `total_score` and `risk` are stored values. They are kept exactly as loaded
/// even when they disagree with what the aggregator computes from `scores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: String,
    /// Sector tag such as `"Oil & Gas"` or `"Renewable"`.
    #[serde(rename = "type")]
    pub category: String,
    pub scores: PillarScores,
    pub total_score: f64,
    pub risk: RiskTier,
    /// Display color as `#RRGGBB`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
