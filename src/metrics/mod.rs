//! Metrics for the report service
//!
//! Each phase owns a submodule defining its metric names, registration and
//! documentation. The recorder is Prometheus-backed; the rendered snapshot is
//! served by the HTTP boundary on `/metrics`.

pub mod registry;
pub mod report;
pub mod sources;

pub use report::ReportMetrics;
pub use sources::SourcesMetrics;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Once, OnceLock};
use tracing::{info, warn};

static INIT: Once = Once::new();
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and register every phase's metrics.
///
/// Idempotent. A failure to install is logged and leaves metrics as no-ops.
pub fn init_metrics() {
    INIT.call_once(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if HANDLE.set(handle).is_err() {
                warn!("Prometheus handle was already set");
            }
            registry::register_all_metrics();
            info!("Prometheus recorder installed");
        }
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
        }
    });
}

/// Text exposition of the current metrics, if the recorder is installed.
pub fn render() -> Option<String> {
    HANDLE.get().map(PrometheusHandle::render)
}

/// Implemented by each phase's metrics collection.
pub trait PhaseMetrics {
    /// Touch every metric so it shows up before first use.
    fn register_metrics();

    fn phase_name() -> &'static str;

    fn metrics_documentation() -> Vec<MetricDoc>;
}

#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    #[allow(dead_code)]
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub enum MetricType {
    Counter,
    Histogram,
    Gauge,
}

/// Builds a metric name following `benefit_{phase}_{name}[_total]`.
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("benefit_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("benefit_", $phase, "_", $name)
    };
    (gauge, $phase:literal, $name:literal) => {
        concat!("benefit_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;
