//! Rolling chart series for the three plotted metrics.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, chart_label};

/// Maximum number of points kept per chart.
pub const CHART_CAPACITY: usize = 15;

/// A metric plotted on its own line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Voltage,
    Current,
    Power,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Voltage, Self::Current, Self::Power];

    /// Legend label, unit included.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Voltage => "Voltage (V)",
            Self::Current => "Current (A)",
            Self::Power => "Power (W)",
        }
    }

    /// Line colour as a CSS hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Voltage => "#2563eb",
            Self::Current => "#16a34a",
            Self::Power => "#dc2626",
        }
    }
}

/// One plotted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub at: Timestamp,
    /// Axis label, `hh:mm:ss AM`.
    pub label: String,
    pub value: f64,
}

/// A bounded, FIFO-trimmed sequence of points for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChartSeriesRepr")]
pub struct ChartSeries {
    metric: Metric,
    points: VecDeque<ChartPoint>,
}

impl ChartSeries {
    #[must_use]
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            points: VecDeque::with_capacity(CHART_CAPACITY),
        }
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Append a value observed at `at`, evicting the oldest points so the
    /// series never holds more than [`CHART_CAPACITY`].
    pub fn push(&mut self, at: Timestamp, value: f64) {
        while self.points.len() >= CHART_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(ChartPoint {
            at,
            label: chart_label(&at),
            value,
        });
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &ChartPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.back()
    }
}

/// Wire shape of [`ChartSeries`]; decoding keeps only the newest
/// [`CHART_CAPACITY`] points.
#[derive(Deserialize)]
struct ChartSeriesRepr {
    metric: Metric,
    points: VecDeque<ChartPoint>,
}

impl From<ChartSeriesRepr> for ChartSeries {
    fn from(mut repr: ChartSeriesRepr) -> Self {
        let excess = repr.points.len().saturating_sub(CHART_CAPACITY);
        repr.points.drain(..excess);
        Self {
            metric: repr.metric,
            points: repr.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::at;

    #[test]
    fn should_start_empty() {
        let series = ChartSeries::new(Metric::Voltage);
        assert!(series.is_empty());
        assert_eq!(series.metric(), Metric::Voltage);
    }

    #[test]
    fn should_label_points_with_clock_time() {
        let mut series = ChartSeries::new(Metric::Power);
        series.push(at(15, 4, 5), 690.0);

        let point = series.latest().unwrap();
        assert_eq!(point.label, "03:04:05 PM");
        assert!((point.value - 690.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_never_exceed_capacity() {
        let mut series = ChartSeries::new(Metric::Current);
        for i in 0..40 {
            series.push(at(12, 0, i % 60), f64::from(i));
            assert!(series.len() <= CHART_CAPACITY);
        }
        assert_eq!(series.len(), CHART_CAPACITY);
    }

    #[test]
    fn should_evict_oldest_point_first() {
        let mut series = ChartSeries::new(Metric::Voltage);
        for i in 0..=15 {
            series.push(at(12, 0, i), f64::from(i));
        }

        let values: Vec<f64> = series.points().map(|p| p.value).collect();
        assert_eq!(values.len(), 15);
        assert!((values[0] - 1.0).abs() < f64::EPSILON);
        assert!((values[14] - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_keep_newest_points_when_decoding_oversized_series() {
        let points: Vec<serde_json::Value> = (0..20)
            .map(|i| {
                serde_json::json!({
                    "at": at(12, 0, i),
                    "label": chart_label(&at(12, 0, i)),
                    "value": f64::from(i),
                })
            })
            .collect();
        let json = serde_json::json!({"metric": "voltage", "points": points});

        let series: ChartSeries = serde_json::from_value(json).unwrap();

        assert_eq!(series.len(), CHART_CAPACITY);
        let values: Vec<f64> = series.points().map(|p| p.value).collect();
        assert!((values[0] - 5.0).abs() < f64::EPSILON);
        assert!((values[14] - 19.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_decode_what_it_encodes() {
        let mut series = ChartSeries::new(Metric::Current);
        series.push(at(9, 30, 0), 4.2);

        let json = serde_json::to_value(&series).unwrap();

        assert_eq!(serde_json::from_value::<ChartSeries>(json).unwrap(), series);
    }

    #[test]
    fn should_describe_each_metric() {
        assert_eq!(Metric::Voltage.label(), "Voltage (V)");
        assert_eq!(Metric::Current.color(), "#16a34a");
        assert_eq!(Metric::Power.label(), "Power (W)");
    }
}
