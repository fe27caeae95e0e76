//! Combined-log-format access log.

use axum::{
    extract::{ConnectInfo, Request},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

/// Logs one line per request at `INFO`.
///
/// The client address comes from [`ConnectInfo`] when the server was started
/// with connect info, and is `-` otherwise (e.g. in tests).
pub async fn access_log_mw(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());

    let ua = header_or_dash(&req, header::USER_AGENT);
    let referer = header_or_dash(&req, header::REFERER);

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    tracing::info!(r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#);

    response
}

fn header_or_dash(req: &Request, name: header::HeaderName) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
