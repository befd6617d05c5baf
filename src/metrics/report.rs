//! Report phase metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};
use crate::types::YearGroup;

pub struct ReportMetrics;

impl ReportMetrics {
    pub fn record_report_produced(groups: &[YearGroup], duration_secs: f64) {
        let benefits: usize = groups.iter().map(|g| g.count).sum();

        ::metrics::counter!(phase_metric!(counter, "report", "produced")).increment(1);
        ::metrics::counter!(phase_metric!(counter, "report", "benefits_emitted")).increment(benefits as u64);
        ::metrics::gauge!(phase_metric!(gauge, "report", "last_group_count")).set(groups.len() as f64);
        ::metrics::histogram!(phase_metric!(histogram, "report", "duration_seconds")).record(duration_secs);
    }

    pub fn record_report_failed(dataset: &'static str) {
        ::metrics::counter!(phase_metric!(counter, "report", "failed"), "dataset" => dataset).increment(1);
    }
}

impl PhaseMetrics for ReportMetrics {
    fn register_metrics() {
        use metrics::{counter, gauge, histogram};

        let _ = counter!(phase_metric!(counter, "report", "produced"));
        let _ = counter!(phase_metric!(counter, "report", "failed"));
        let _ = counter!(phase_metric!(counter, "report", "benefits_emitted"));
        let _ = gauge!(phase_metric!(gauge, "report", "last_group_count"));
        let _ = histogram!(phase_metric!(histogram, "report", "duration_seconds"));
    }

    fn phase_name() -> &'static str {
        "report"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "report", "produced"),
                metric_type: MetricType::Counter,
                help: "Total number of reports produced",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "report", "failed"),
                metric_type: MetricType::Counter,
                help: "Total number of reports aborted by a failed fetch",
                labels: vec!["dataset"],
            },
            MetricDoc {
                name: phase_metric!(counter, "report", "benefits_emitted"),
                metric_type: MetricType::Counter,
                help: "Total number of enriched benefits emitted across reports",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(gauge, "report", "last_group_count"),
                metric_type: MetricType::Gauge,
                help: "Number of year groups in the most recent report",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(histogram, "report", "duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "End-to-end report duration in seconds, fetches included",
                labels: vec![],
            },
        ]
    }
}
