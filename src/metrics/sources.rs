//! Sources phase metrics
//!
//! Health and latency of the three upstream dataset fetches.

use crate::error::Dataset;
use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct SourcesMetrics;

impl SourcesMetrics {
    pub fn record_fetch_success(dataset: Dataset, duration_secs: f64, records: usize) {
        ::metrics::counter!(phase_metric!(counter, "sources", "fetch_success"), "dataset" => dataset.as_str())
            .increment(1);
        ::metrics::histogram!(
            phase_metric!(histogram, "sources", "fetch_duration_seconds"),
            "dataset" => dataset.as_str()
        )
        .record(duration_secs);
        ::metrics::histogram!(phase_metric!(histogram, "sources", "records"), "dataset" => dataset.as_str())
            .record(records as f64);
    }

    pub fn record_fetch_error(dataset: Dataset, error_type: &'static str) {
        ::metrics::counter!(
            phase_metric!(counter, "sources", "fetch_error"),
            "dataset" => dataset.as_str(),
            "error_type" => error_type
        )
        .increment(1);
    }
}

impl PhaseMetrics for SourcesMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "sources", "fetch_success"));
        let _ = counter!(phase_metric!(counter, "sources", "fetch_error"));
        let _ = histogram!(phase_metric!(histogram, "sources", "fetch_duration_seconds"));
        let _ = histogram!(phase_metric!(histogram, "sources", "records"));
    }

    fn phase_name() -> &'static str {
        "sources"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "sources", "fetch_success"),
                metric_type: MetricType::Counter,
                help: "Total number of successful dataset fetches",
                labels: vec!["dataset"],
            },
            MetricDoc {
                name: phase_metric!(counter, "sources", "fetch_error"),
                metric_type: MetricType::Counter,
                help: "Total number of failed dataset fetches",
                labels: vec!["dataset", "error_type"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "sources", "fetch_duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "Duration of dataset fetches in seconds",
                labels: vec!["dataset"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "sources", "records"),
                metric_type: MetricType::Histogram,
                help: "Number of records returned per fetch",
                labels: vec!["dataset"],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_metrics_registration() {
        SourcesMetrics::register_metrics();
        SourcesMetrics::record_fetch_success(Dataset::Benefits, 0.25, 12);
        SourcesMetrics::record_fetch_error(Dataset::Fichas, "status");
    }

    #[test]
    fn test_metrics_documentation() {
        let docs = SourcesMetrics::metrics_documentation();
        assert_eq!(docs.len(), 4);
        for doc in docs {
            assert!(doc.name.starts_with("benefit_sources_"));
        }
    }
}
