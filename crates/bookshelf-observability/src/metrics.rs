use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};

/// Path label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Application-scoped Prometheus registry.
///
/// Cloning is cheap and every clone records into the same registry.
/// Counters are atomic, so concurrent requests never lose increments.
#[derive(Clone)]
pub struct Metrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}

impl Metrics {
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full("http_request_duration_seconds".to_string()),
                DURATION_BUCKETS,
            )?
            .build_recorder();
        let handle = recorder.handle();

        Ok(Self {
            recorder: Arc::new(recorder),
            handle,
        })
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Drains buffered histogram samples into their buckets.
    ///
    /// `render` does this too; call it periodically so an unscraped
    /// process does not keep every sample in memory.
    pub fn run_upkeep(&self) {
        self.handle.run_upkeep();
    }

    fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        metrics::with_local_recorder(self.recorder.as_ref(), f)
    }

    /// Counted on arrival so a scrape always sees itself.
    pub fn track_request_started(&self, method: &str, path: &str) {
        self.record(|| {
            counter!(
                "http_requests_total",
                "method" => method.to_owned(),
                "path" => path.to_owned()
            )
            .increment(1);
            gauge!("http_requests_active").increment(1.0);
        });
    }

    pub fn track_request_finished(
        &self,
        method: &str,
        path: &str,
        status: u16,
        latency_secs: f64,
    ) {
        self.record(|| {
            counter!(
                "http_responses_total",
                "method" => method.to_owned(),
                "path" => path.to_owned(),
                "status" => status.to_string()
            )
            .increment(1);
            histogram!(
                "http_request_duration_seconds",
                "method" => method.to_owned(),
                "path" => path.to_owned()
            )
            .record(latency_secs);
            gauge!("http_requests_active").decrement(1.0);
        });
    }

    pub fn track_user_registered(&self) {
        self.record(|| counter!("user_registrations_total").increment(1));
    }

    pub fn track_login(&self, success: bool) {
        let status = if success { "success" } else { "failure" };
        self.record(|| counter!("user_logins_total", "status" => status).increment(1));
    }

    pub fn track_jwt_issued(&self) {
        self.record(|| counter!("jwt_tokens_issued_total").increment(1));
    }

    pub fn track_book_mutation(&self, operation: &'static str) {
        self.record(|| counter!("books_mutations_total", "operation" => operation).increment(1));
    }
}

/// Records request counters, latency and in-flight gauge.
///
/// Paths are labelled with the matched route template (`/books/{id}`), so
/// resource ids never explode label cardinality. Requests that match no
/// route share the [`UNMATCHED_PATH`] label.
pub async fn metrics_middleware(
    State(metrics): State<Metrics>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    metrics.track_request_started(&method, &path);

    let response = next.run(req).await;

    metrics.track_request_finished(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
