use std::time::Duration;

use axum::{extract::Request, response::Response, Router};
use tracing::{debug, field, Span};

use super::{client_ip::ClientIp, request_id::RequestId};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        tower_http::trace::TraceLayer::new_for_http()
            .make_span_with(make_span)
            .on_request(on_request)
            .on_response(on_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

fn make_span(request: &Request) -> Span {
    let version = request.version();
    let method = request.method();
    let route = request.uri();

    let span = tracing::debug_span!(
        "http-request",
        ?version,
        %method,
        %route,
        client_ip = field::Empty,
        request_id = field::Empty
    );
    if let Some(ClientIp(client_ip)) = request.extensions().get::<ClientIp>() {
        span.record("client_ip", field::display(client_ip));
    }
    if let Some(request_id) = request.extensions().get::<RequestId>() {
        span.record("request_id", field::display(request_id));
    }
    span
}

fn on_request(_request: &Request, _span: &Span) {
    debug!("started processing request")
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();
    debug!(?latency, %status, "finished processing request")
}
