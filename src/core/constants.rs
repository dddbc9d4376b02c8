//! Centralized display and scoring defaults.

/// Totals at or above this value are `Low Risk`.
pub const LOW_RISK_THRESHOLD: f64 = 85.0;

/// Totals at or above this value (and below [`LOW_RISK_THRESHOLD`]) are `Medium Risk`.
pub const MEDIUM_RISK_THRESHOLD: f64 = 60.0;

/// Radar axis labels longer than this many characters are truncated.
pub const RADAR_LABEL_LIMIT: usize = 25;

/// Company names longer than this many characters are truncated in comparison charts.
pub const DISPLAY_NAME_LIMIT: usize = 15;

/// Appended to any label that was truncated.
pub const ELLIPSIS: &str = "...";

/// Max score used when a criterion cannot be found in the taxonomy.
pub const FALLBACK_MAX_SCORE: f64 = 10.0;
