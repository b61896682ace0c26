//! Request correlation middleware.
//!
//! # Responsibilities
//! - Derive the per-request correlation identifier
//! - Bind a request-scoped tracing span carrying the id and version tag
//! - Emit the request started/completed events around the handler
//! - Reflect the identifier back in the `X-Request-ID` response header
//!
//! # Design Decisions
//! - Identifier priority: Lambda invocation id, then gateway request id,
//!   then the empty string; the relay never generates ids of its own
//! - The span lives on this middleware's future; nothing request-scoped
//!   is stored globally

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::{HeaderValue, USER_AGENT};
use axum::middleware::Next;
use axum::response::Response;
use lambda_http::request::RequestContext;
use lambda_http::RequestExt;
use tracing::Instrument;

use crate::http::server::AppState;

/// Response header carrying the correlation identifier.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Wrap one request in a correlation span with start/complete logging.
pub async fn correlate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = correlation_id(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let remote = remote_addr(&request);
    let agent = user_agent(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        version = %state.version,
    );

    async move {
        tracing::info!(
            method = %method,
            path = %path,
            remote = %remote,
            agent = %agent,
            "request started"
        );

        let mut response = next.run(request).await;

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(X_REQUEST_ID, value);
        }

        tracing::info!(
            method = %method,
            path = %path,
            duration_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        response
    }
    .instrument(span)
    .await
}

/// Correlation id for one request: Lambda invocation id first, gateway
/// request id second, empty otherwise.
fn correlation_id(request: &Request) -> String {
    if let Some(context) = request.lambda_context_ref() {
        if !context.request_id.is_empty() {
            return context.request_id.clone();
        }
    }

    match request.request_context_ref() {
        Some(RequestContext::ApiGatewayV2(context)) => {
            context.request_id.clone().unwrap_or_default()
        }
        Some(RequestContext::ApiGatewayV1(context)) => {
            context.request_id.clone().unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Best-effort peer address: socket peer when standalone, gateway source
/// IP under Lambda, empty otherwise.
fn remote_addr(request: &Request) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.to_string();
    }

    match request.request_context_ref() {
        Some(RequestContext::ApiGatewayV2(context)) => {
            context.http.source_ip.clone().unwrap_or_default()
        }
        _ => String::new(),
    }
}

fn user_agent(request: &Request) -> String {
    request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use lambda_http::aws_lambda_events::apigw::ApiGatewayV2httpRequestContext;
    use lambda_http::Context;

    fn plain_request() -> Request {
        axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    fn gateway_context(id: &str) -> RequestContext {
        let mut context = ApiGatewayV2httpRequestContext::default();
        context.request_id = Some(id.to_string());
        RequestContext::ApiGatewayV2(context)
    }

    #[test]
    fn test_invocation_id_wins() {
        let mut lambda = Context::default();
        lambda.request_id = "invoke-123".to_string();

        let request = plain_request()
            .with_lambda_context(lambda)
            .with_request_context(gateway_context("gw-456"));

        assert_eq!(correlation_id(&request), "invoke-123");
    }

    #[test]
    fn test_gateway_id_used_without_invocation_id() {
        let request = plain_request().with_request_context(gateway_context("gw-456"));

        assert_eq!(correlation_id(&request), "gw-456");
    }

    #[test]
    fn test_empty_id_outside_gateway() {
        assert_eq!(correlation_id(&plain_request()), "");
    }

    #[test]
    fn test_remote_addr_from_socket_peer() {
        let mut request = plain_request();
        let peer: SocketAddr = "127.0.0.1:54321".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(peer));

        assert_eq!(remote_addr(&request), "127.0.0.1:54321");
    }
}
