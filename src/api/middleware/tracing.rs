//! Request tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the HTTP tracing layer.
///
/// Each request gets an `INFO` span carrying method, URI and version; the
/// response is logged at `INFO` with status and latency in milliseconds:
///
/// ```text
/// INFO request{method=POST uri=/shorturls version=HTTP/1.1}: finished processing request latency=1 ms status=201
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
