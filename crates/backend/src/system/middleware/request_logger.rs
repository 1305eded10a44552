use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Цвет времени: голубой для 2xx, жёлтый для остальных
fn status_color(status: StatusCode) -> &'static str {
    if status.is_success() {
        "36"
    } else {
        "33"
    }
}

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль:
/// - Timestamp (локальное время)
/// - Длительность (ms)
/// - Размер ответа (форматированный)
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Cannot read response body for {} {}: {}", method, path, e);
            println!(
                "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                Local::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                path
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(parts.status),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_number(bytes.len() as u64),
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(StatusCode::OK), "36");
        assert_eq!(status_color(StatusCode::CREATED), "36");
        assert_eq!(status_color(StatusCode::BAD_REQUEST), "33");
    }
}
