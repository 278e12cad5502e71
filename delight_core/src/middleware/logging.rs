//! Request logging middleware configuration

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{
    ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier,
};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, TraceLayer};
use tracing::{info_span, Span};

pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    fn(&Response<Body>, Duration, &Span),
    DefaultOnBodyChunk,
    DefaultOnEos,
    fn(ServerErrorsFailureClass, Duration, &Span),
> {
    let make_span: fn(&Request<Body>) -> Span = |request| {
        info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            version = ?request.version(),
        )
    };

    let on_response: fn(&Response<Body>, Duration, &Span) = |response, latency, _span| {
        let status = response.status();
        let latency_ms = latency.as_millis();

        if status.is_success() || status.is_redirection() {
            tracing::info!(
                status = status.as_u16(),
                latency_ms = latency_ms,
                "request completed"
            );
        } else if status.is_client_error() {
            tracing::warn!(
                status = status.as_u16(),
                latency_ms = latency_ms,
                "client error response"
            );
        } else {
            tracing::error!(
                status = status.as_u16(),
                latency_ms = latency_ms,
                "server error response"
            );
        }
    };

    let on_failure: fn(ServerErrorsFailureClass, Duration, &Span) = |error, latency, _span| {
        tracing::error!(
            latency_ms = latency.as_millis(),
            error = ?error,
            "request failed"
        );
    };

    TraceLayer::new_for_http()
        .make_span_with(make_span)
        .on_response(on_response)
        .on_failure(on_failure)
}
