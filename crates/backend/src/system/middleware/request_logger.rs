use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

const CYAN: &str = "36";
const YELLOW: &str = "33";

fn status_color(status: StatusCode) -> &'static str {
    if status.is_success() {
        CYAN
    } else {
        YELLOW
    }
}

fn log_line(status: StatusCode, method: &Method, path: &str, elapsed: Duration, size: Option<usize>) -> String {
    let size = size.map(format_number).unwrap_or_else(|| "error".into());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    )
}

/// One console line per request: local time, duration, body size, status,
/// method and path. The body is buffered to measure its real size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            println!("{}", log_line(parts.status, &method, &path, start.elapsed(), Some(bytes.len())));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            println!("{}", log_line(parts.status, &method, &path, start.elapsed(), None));
            tracing::warn!("Failed to read response body of {} {}: {}", method, path, e);
            Response::from_parts(parts, Body::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(StatusCode::OK), CYAN);
        assert_eq!(status_color(StatusCode::NO_CONTENT), CYAN);
        assert_eq!(status_color(StatusCode::CONFLICT), YELLOW);
    }

    #[test]
    fn test_log_line() {
        let line = log_line(
            StatusCode::OK,
            &Method::GET,
            "/api/category",
            Duration::from_millis(12),
            Some(12345),
        );
        assert!(line.contains("12.345"));
        assert!(line.contains("200"));
        assert!(line.ends_with("GET /api/category"));

        let failed = log_line(
            StatusCode::INTERNAL_SERVER_ERROR,
            &Method::POST,
            "/api/sale",
            Duration::ZERO,
            None,
        );
        assert!(failed.contains("error"));
    }
}
