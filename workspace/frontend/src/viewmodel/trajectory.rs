use common::{format_short_date, SeriesPoint};

/// Chart-ready series: the last four historical weeks followed by every
/// forecast point, dates abbreviated to `"Mon D"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrajectorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Index of the first forecast point within `values`.
    pub forecast_start: usize,
}

pub fn trajectory_series(
    historical: &[SeriesPoint],
    predictions: &[SeriesPoint],
) -> TrajectorySeries {
    let recent = &historical[historical.len().saturating_sub(4)..];

    let mut labels = Vec::with_capacity(recent.len() + predictions.len());
    let mut values = Vec::with_capacity(recent.len() + predictions.len());
    for point in recent.iter().chain(predictions) {
        labels.push(format_short_date(&point.date));
        values.push(point.value);
    }

    TrajectorySeries {
        labels,
        values,
        forecast_start: recent.len(),
    }
}
