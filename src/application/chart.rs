use serde::{Deserialize, Serialize};

use crate::domain::{MAX_SCORE, ReportSummary};

pub const DEFAULT_BAR_COLOR: [u8; 4] = [137, 180, 250, 204];

/// Declarative description of the score bar chart, independent of any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub y_min: f64,
    pub y_max: f64,
    /// Unmultiplied RGBA fill shared by every bar.
    pub bar_color: [u8; 4],
    /// Bar width relative to the slot, in `(0, 1]`.
    pub bar_width: f64,
}

impl BarChartSpec {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(label, value)` pairs in display order.
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

pub fn session_label(index: usize) -> String {
    format!("Session {}", index + 1)
}

/// One bar per report, in collection order, on a fixed 0..=100 axis.
pub fn chart_spec(reports: &[ReportSummary]) -> BarChartSpec {
    let labels = (0..reports.len()).map(session_label).collect();
    let values = reports.iter().map(|r| r.score() as f64).collect();

    BarChartSpec {
        title: "Score per session".to_string(),
        labels,
        values,
        y_min: 0.0,
        y_max: MAX_SCORE as f64,
        bar_color: DEFAULT_BAR_COLOR,
        bar_width: 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bar_per_report_in_order() {
        let reports = vec![
            ReportSummary::new("a", Some(85)),
            ReportSummary::new("b", Some(50)),
            ReportSummary::new("c", Some(10)),
        ];
        let spec = chart_spec(&reports);

        let bars: Vec<_> = spec.bars().collect();
        assert_eq!(
            bars,
            vec![("Session 1", 85.0), ("Session 2", 50.0), ("Session 3", 10.0)]
        );
        assert_eq!((spec.y_min, spec.y_max), (0.0, 100.0));
    }

    #[test]
    fn missing_scores_plot_as_zero() {
        let spec = chart_spec(&[ReportSummary::new("a", None)]);
        assert_eq!(spec.values, vec![0.0]);
    }

    #[test]
    fn empty_collection_gives_empty_chart() {
        let spec = chart_spec(&[]);
        assert!(spec.is_empty());
        assert_eq!((spec.y_min, spec.y_max), (0.0, 100.0));
    }

    #[test]
    fn serializes_as_plain_data() {
        let spec = chart_spec(&[ReportSummary::new("a", Some(85))]);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["labels"], serde_json::json!(["Session 1"]));
        assert_eq!(json["values"], serde_json::json!([85.0]));
        assert_eq!(json["y_max"], serde_json::json!(100.0));
    }
}
