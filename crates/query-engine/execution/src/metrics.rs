//! Metrics setup and update for query execution.

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

/// The collection of all metrics exposed through the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: IntCounter,
    pub query_error_total: IntCounter,
    pub session_total: IntCounter,
    pub query_duration: Histogram,
}

impl Metrics {
    /// Set up counters and histograms used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "climate_api_query_total",
            "Total successful queries.",
        )?;

        let query_error_total = add_int_counter_metric(
            metrics_registry,
            "climate_api_query_error_total",
            "Total queries that failed.",
        )?;

        let session_total = add_int_counter_metric(
            metrics_registry,
            "climate_api_session_total",
            "Total database sessions opened.",
        )?;

        let query_duration = add_histogram_metric(
            metrics_registry,
            "climate_api_query_duration_seconds",
            "Time taken to run a query against the database, in seconds.",
        )?;

        Ok(Self {
            query_total,
            query_error_total,
            session_total,
            query_duration,
        })
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter =
        IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

/// Create a new histogram metric and register it with the provided Prometheus Registry
fn add_histogram_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = Histogram::with_opts(HistogramOpts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}
