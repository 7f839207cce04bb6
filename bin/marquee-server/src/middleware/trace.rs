//! Per-request tracing.
//!
//! Every request runs inside an `http_request` span carrying a trace id. The
//! id is taken from an incoming `x-trace-id` header when it parses as a UUID,
//! otherwise a fresh one is generated; it is echoed back on the response.

use axum::{
    body::{Body, Bytes, HttpBody},
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

/// JSON bodies below this size are logged verbatim.
const MAX_LOGGED_BODY: usize = 1024;

pub async fn trace_middleware(req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        info!("→ request started");
        let header_value = HeaderValue::from_str(&trace_id.to_string()).ok();

        let (parts, body) = req.into_parts();
        let body = buffer_and_log("request", &parts.headers, body).await;
        let mut req = Request::from_parts(parts, body);
        if let Some(value) = header_value.clone() {
            req.headers_mut().insert(X_TRACE_ID, value);
        }

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();
        let body = buffer_and_log("response", &parts.headers, body).await;
        let mut response = Response::from_parts(parts, body);
        if let Some(value) = header_value {
            response.headers_mut().insert(X_TRACE_ID, value);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Log `body` when it is small JSON of known size; every other body is
/// passed through without being read.
async fn buffer_and_log(direction: &str, headers: &header::HeaderMap, body: Body) -> Body {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let size = body.size_hint().upper();

    if !should_buffer(content_type, size) {
        match size {
            Some(0) => {}
            Some(len) => info!("{direction} body: [skipped: type={content_type}, size={len}]"),
            None => info!("{direction} body: [skipped: type={content_type}, size=unknown]"),
        }
        return body;
    }

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!(error = %e, "failed to buffer {direction} body");
            return Body::empty();
        }
    };
    if let Ok(text) = std::str::from_utf8(&bytes) {
        info!("{direction} body: {text}");
    }
    Body::from(bytes)
}

/// Only JSON bodies whose size is bounded below [`MAX_LOGGED_BODY`] are read.
fn should_buffer(content_type: &str, size_upper: Option<u64>) -> bool {
    content_type.contains("application/json")
        && size_upper.is_some_and(|n| n > 0 && n < MAX_LOGGED_BODY as u64)
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderMap;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn buffers_only_small_json() {
        assert!(should_buffer("application/json", Some(12)));
        assert!(!should_buffer("application/json", Some(MAX_LOGGED_BODY as u64)));
        assert!(!should_buffer("application/json", None));
        assert!(!should_buffer("application/json", Some(0)));
        assert!(!should_buffer("text/plain", Some(12)));
    }

    #[tokio::test]
    async fn small_json_body_is_preserved() {
        let body = buffer_and_log("request", &json_headers(), Body::from(r#"{"rating":5}"#)).await;
        let bytes = body.collect().await.expect("body").to_bytes();
        assert_eq!(&bytes[..], br#"{"rating":5}"#);
    }

    #[tokio::test]
    async fn large_body_keeps_its_size_hint() {
        let payload = vec![b' '; MAX_LOGGED_BODY * 4];
        let body = buffer_and_log("request", &json_headers(), Body::from(payload.clone())).await;
        assert_eq!(body.size_hint().exact(), Some(payload.len() as u64));
        let bytes = body.collect().await.expect("body").to_bytes();
        assert_eq!(bytes.len(), payload.len());
    }

    #[tokio::test]
    async fn unsized_body_is_not_read() {
        // Fails on first poll; the error must reach the handler untouched.
        let stream = futures::stream::once(async {
            Err::<Bytes, std::io::Error>(std::io::Error::other("client went away"))
        });
        let body = buffer_and_log("request", &json_headers(), Body::from_stream(stream)).await;
        assert!(body.collect().await.is_err());
    }
}
