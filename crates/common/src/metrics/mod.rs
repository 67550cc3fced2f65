//! Metrics and observability utilities
//!
//! Prometheus metrics with standardized naming conventions.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};

/// Metrics prefix for all DocLens metrics
pub const METRICS_PREFIX: &str = "doclens";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_documents_uploaded_total", METRICS_PREFIX),
        Unit::Count,
        "Total documents uploaded"
    );

    describe_histogram!(
        format!("{}_upload_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Upload pipeline latency in seconds"
    );

    describe_counter!(
        format!("{}_analyses_total", METRICS_PREFIX),
        Unit::Count,
        "Total AI analysis invocations"
    );

    describe_histogram!(
        format!("{}_ai_request_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "AI request latency in seconds"
    );

    describe_counter!(
        format!("{}_ai_errors_total", METRICS_PREFIX),
        Unit::Count,
        "Total AI invocation errors"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record upload metrics
pub fn record_upload(duration_secs: f64, file_kind: &str) {
    counter!(
        format!("{}_documents_uploaded_total", METRICS_PREFIX),
        "kind" => file_kind.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_upload_duration_seconds", METRICS_PREFIX),
        "kind" => file_kind.to_string()
    )
    .record(duration_secs);
}

/// Helper to record analysis metrics
pub fn record_analysis(duration_secs: f64, model: &str, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        format!("{}_analyses_total", METRICS_PREFIX),
        "model" => model.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    if success {
        histogram!(
            format!("{}_ai_request_duration_seconds", METRICS_PREFIX),
            "model" => model.to_string()
        )
        .record(duration_secs);
    } else {
        counter!(
            format!("{}_ai_errors_total", METRICS_PREFIX),
            "model" => model.to_string()
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_helpers_do_not_panic() {
        record_upload(0.2, "pdf");
        record_analysis(1.5, "gemini-pro", true);
        record_analysis(0.1, "gemini-pro", false);
    }
}
