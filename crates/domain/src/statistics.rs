use chrono::NaiveDate;

use crate::SessionMetrics;

/// Per-session quantity plotted on the progress dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSeries {
    MaxWeight,
    MaxReps,
    Volume,
    OneRepMax,
}

/// Chart data for one metric over a series of sessions.
#[must_use]
pub fn metric_series(history: &[SessionMetrics], series: MetricSeries) -> Vec<(NaiveDate, f32)> {
    history
        .iter()
        .map(|metrics| {
            #[allow(clippy::cast_precision_loss)]
            let value = match series {
                MetricSeries::MaxWeight => metrics.max_weight,
                MetricSeries::MaxReps => u32::from(metrics.max_reps) as f32,
                MetricSeries::Volume => metrics.volume,
                MetricSeries::OneRepMax => metrics.one_rep_max,
            };
            (metrics.date, value)
        })
        .collect()
}

/// Calculate a series of moving averages from a given series of (date, value)
/// pairs, for smoothed trend lines.
///
/// The radius argument determines the number of values to include into the
/// calculated average before and after each value. Windows are clipped at
/// both ends of the series.
#[must_use]
pub fn moving_average(data: &[(NaiveDate, f32)], radius: usize) -> Vec<(NaiveDate, f32)> {
    data.iter()
        .enumerate()
        .map(|(i, (date, _))| {
            let window = &data[i.saturating_sub(radius)..=(i + radius).min(data.len() - 1)];
            #[allow(clippy::cast_precision_loss)]
            let avg = window.iter().map(|(_, value)| value).sum::<f32>() / window.len() as f32;
            (*date, avg)
        })
        .collect()
}
