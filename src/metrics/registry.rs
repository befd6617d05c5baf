//! Registers every phase's metrics and flags name collisions.

use crate::metrics::{MetricDoc, PhaseMetrics};
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub fn register_all_metrics() {
    let mut all_metrics = HashMap::new();

    register_phase_metrics::<super::sources::SourcesMetrics>(&mut all_metrics);
    register_phase_metrics::<super::report::ReportMetrics>(&mut all_metrics);

    info!("Registered {} total metrics across all phases", all_metrics.len());
}

fn register_phase_metrics<T: PhaseMetrics>(all_metrics: &mut HashMap<&'static str, MetricDoc>) {
    T::register_metrics();
    let phase_name = T::phase_name();

    for doc in T::metrics_documentation() {
        if phase_of(doc.name) != phase_name {
            warn!(
                "Metric '{}' does not carry the prefix of phase '{}'",
                doc.name, phase_name
            );
        }
        if all_metrics.contains_key(doc.name) {
            warn!(
                "Metric name conflict detected: '{}' registered again by phase '{}'",
                doc.name, phase_name
            );
            continue;
        }
        debug!("{} ({:?}): {}", doc.name, doc.metric_type, doc.help);
        all_metrics.insert(doc.name, doc);
    }
}

/// Phase segment of a metric name, e.g. `benefit_sources_fetch_error_total` -> `sources`.
fn phase_of(metric_name: &str) -> &str {
    metric_name
        .strip_prefix("benefit_")
        .and_then(|rest| rest.split('_').next())
        .unwrap_or("unknown")
}
