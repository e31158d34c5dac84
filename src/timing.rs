use std::time::Instant;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

pub const RESPONSE_TIME_HEADER: &str = "x-response-time";

/// Measures each request, reports it in a response header and logs it.
pub async fn timing_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let elapsed = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&format!("{:?}", elapsed)) {
        response.headers_mut().insert(RESPONSE_TIME_HEADER, value);
    }
    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed = ?elapsed,
        "request completed"
    );

    response
}
