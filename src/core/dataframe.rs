use polars::prelude::*;

use crate::aggregate::{ComparisonRow, RadarPoint};

/// Trait for converting scoring outputs into Polars DataFrames.
///
/// This trait provides a consistent interface for handing esg-scorecard series to
/// Polars for further analysis, charting, or export.
pub trait ToDataFrame {
    /// Converts the object into a single-row Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Creates an empty DataFrame with the correct schema for this type.
    fn empty_dataframe() -> PolarsResult<DataFrame>
    where
        Self: Sized;

    /// Returns the flattened schema for this type.
    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>>
    where
        Self: Sized;
}

/// Converts a whole series (one row per element) into a DataFrame.
pub trait ToDataFrameVec {
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

fn comparison_frame(rows: &[ComparisonRow]) -> PolarsResult<DataFrame> {
    df!(
        "display_name" => rows.iter().map(|r| r.display_name.clone()).collect::<Vec<_>>(),
        "full_name" => rows.iter().map(|r| r.full_name.clone()).collect::<Vec<_>>(),
        "category" => rows.iter().map(|r| r.category.clone()).collect::<Vec<_>>(),
        "environmental" => rows.iter().map(|r| r.totals.environmental).collect::<Vec<_>>(),
        "social" => rows.iter().map(|r| r.totals.social).collect::<Vec<_>>(),
        "governance" => rows.iter().map(|r| r.totals.governance).collect::<Vec<_>>(),
        "total_score" => rows.iter().map(|r| r.total_score).collect::<Vec<_>>()
    )
}

fn radar_frame(points: &[RadarPoint]) -> PolarsResult<DataFrame> {
    df!(
        "pillar" => points.iter().map(|p| p.pillar.as_str()).collect::<Vec<_>>(),
        "criterion" => points.iter().map(|p| p.criterion.clone()).collect::<Vec<_>>(),
        "label" => points.iter().map(|p| p.label.clone()).collect::<Vec<_>>(),
        "score" => points.iter().map(|p| p.score).collect::<Vec<_>>(),
        "max_score" => points.iter().map(|p| p.max_score).collect::<Vec<_>>()
    )
}

impl ToDataFrame for ComparisonRow {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        comparison_frame(std::slice::from_ref(self))
    }

    fn empty_dataframe() -> PolarsResult<DataFrame> {
        comparison_frame(&[])
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(vec![
            ("display_name", DataType::String),
            ("full_name", DataType::String),
            ("category", DataType::String),
            ("environmental", DataType::Float64),
            ("social", DataType::Float64),
            ("governance", DataType::Float64),
            ("total_score", DataType::Float64),
        ])
    }
}

impl ToDataFrame for RadarPoint {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        radar_frame(std::slice::from_ref(self))
    }

    fn empty_dataframe() -> PolarsResult<DataFrame> {
        radar_frame(&[])
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(vec![
            ("pillar", DataType::String),
            ("criterion", DataType::String),
            ("label", DataType::String),
            ("score", DataType::Float64),
            ("max_score", DataType::Float64),
        ])
    }
}

impl ToDataFrameVec for [ComparisonRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        comparison_frame(self)
    }
}

impl ToDataFrameVec for [RadarPoint] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        radar_frame(self)
    }
}
