/// Tool for the weekly trend chart
///
/// This module implements the mood_trend MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsEngine, ChartPoint, SeriesField};
use crate::storage::{MoodStore, StorageError};

/// Parameters for the trend chart
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct TrendParams {
    /// Which series to plot: "mood" (default) or "sleep"
    pub field: Option<String>,
}

/// Response from the trend tool
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub field: SeriesField,
    pub points: Vec<ChartPoint>,
    pub message: String,
}

/// Build the chart series from the provided store
pub fn mood_trend<S: MoodStore>(
    store: &S,
    analytics: &AnalyticsEngine,
    params: TrendParams,
) -> Result<TrendResponse, StorageError> {
    let field = match params.field.as_deref() {
        Some(raw) => raw.parse::<SeriesField>()?,
        None => SeriesField::default(),
    };

    let points = analytics.weekly_series(store.entries(), field);

    let message = if points.is_empty() {
        "No entries to chart yet.".to_string()
    } else {
        let (title, unit) = match field {
            SeriesField::Mood => ("📈 Mood trend", ""),
            SeriesField::Sleep => ("🌙 Sleep trend", "h"),
        };
        let rows = points
            .iter()
            .map(|p| format!("{}: {}{}", p.label, p.value, unit))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{} (last {} entries)\n{}", title, points.len(), rows)
    };

    Ok(TrendResponse {
        field,
        points,
        message,
    })
}
