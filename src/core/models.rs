use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::EsgError;
use crate::core::constants::{LOW_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};

/* ----- PILLARS (shared by taxonomy/, company/, aggregate/) ----- */

/// One of the three ESG dimensions criteria are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    /// Emissions, energy transition, water, waste and biodiversity.
    Environmental,
    /// Worker safety, communities, labor and energy access.
    Social,
    /// Disclosure, board structure and compensation alignment.
    Governance,
}

impl Pillar {
    /// All pillars in canonical enumeration order.
    pub const ALL: [Self; 3] = [Self::Environmental, Self::Social, Self::Governance];

    /// The lowercase identifier used in dataset documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Environmental => "environmental",
            Self::Social => "social",
            Self::Governance => "governance",
        }
    }

    /// Single-letter series key (`E`, `S`, `G`) used by comparison charts.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Environmental => 'E',
            Self::Social => 'S',
            Self::Governance => 'G',
        }
    }

    /// Position of the pillar in [`Pillar::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Environmental => 0,
            Self::Social => 1,
            Self::Governance => 2,
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = EsgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EsgError::UnknownPillar(s.to_string()))
    }
}

/* ----- RISK ----- */

/// Qualitative classification derived from a total score.
///
/// Serializes as its label. Deserialization goes through [`FromStr`], so it
/// accepts the same case-insensitive, trimmed labels as `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskTier {
    /// Human-readable label, e.g. `"Medium Risk"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = EsgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Low, Self::Medium, Self::High]
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EsgError::UnknownRiskTier(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for RiskTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Lower bounds of the `Low` and `Medium` tiers.
///
/// Anything below `medium` is `High`. The comparisons are plain `>=`, so the
/// mapping is total: negative totals land in `High`, and so does `NaN`
/// because every comparison against it is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: LOW_RISK_THRESHOLD,
            medium: MEDIUM_RISK_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    /// Maps a total score to its tier.
    #[must_use]
    pub fn classify(&self, total: f64) -> RiskTier {
        if total >= self.low {
            RiskTier::Low
        } else if total >= self.medium {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    /// The score range of each tier, in `Low`, `Medium`, `High` order.
    ///
    /// Lets a renderer print the tier legend without hard-coding numbers.
    #[must_use]
    pub const fn bands(&self) -> [RiskBand; 3] {
        [
            RiskBand {
                tier: RiskTier::Low,
                lower: Some(self.low),
                upper: None,
            },
            RiskBand {
                tier: RiskTier::Medium,
                lower: Some(self.medium),
                upper: Some(self.low),
            },
            RiskBand {
                tier: RiskTier::High,
                lower: None,
                upper: Some(self.medium),
            },
        ]
    }
}

/// Score range of one risk tier: `lower <= total < upper`.
///
/// `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskBand {
    pub tier: RiskTier,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// Classifies a total score with the default 85 / 60 thresholds.
#[must_use]
pub fn classify_risk(total: f64) -> RiskTier {
    RiskThresholds::default().classify(total)
}
