// src/core/fetcher.rs

use crate::config::AuditConfig;
use crate::core::error::FetchError;
use crate::core::models::FetchResult;
use reqwest::redirect::Policy;
use std::time::Instant;
use tracing::{debug, error, info};

/// Prepends `https://` when the input carries neither `http://` nor `https://`.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Issues a single GET against an already normalized URL.
///
/// Redirects are followed up to the configured limit and certificate errors
/// are ignored, so misconfigured hosts can still be audited. Nothing is retried.
/// `load_time` covers the request and the full body download.
pub async fn fetch(url: &str, config: &AuditConfig) -> Result<FetchResult, FetchError> {
    info!(url, timeout_secs = config.timeout.as_secs(), "Fetching target page.");

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .redirect(Policy::limited(config.max_redirects))
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build HTTP client.");
            FetchError::Client(e)
        })?;

    let start = Instant::now();
    let response = client.get(url).send().await.map_err(|e| {
        error!(url, error = %e, "HTTP request failed.");
        FetchError::from_send(e, config.timeout)
    })?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let headers = response.headers().clone();
    info!(status, final_url = %final_url, "Received HTTP response.");

    let body = response.text().await.map_err(|e| {
        error!(url, error = %e, "Failed to read response body.");
        if e.is_timeout() {
            FetchError::Timeout(config.timeout)
        } else {
            FetchError::Body(e)
        }
    })?;
    let load_time = start.elapsed().as_secs_f64();
    debug!(bytes = body.len(), load_time, "Response body read.");

    Ok(FetchResult { final_url, status, headers, body, load_time })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `response` verbatim to every connection and returns the base URL.
    async fn serve(response: &'static str) -> String {
        serve_routes(move |_| response).await
    }

    /// Like [`serve`], picking the response from the request path.
    async fn serve_routes(route: impl Fn(&str) -> &'static str + Send + 'static) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let _ = socket.write_all(route(path).as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn adds_https_when_scheme_is_missing() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/path "), "https://example.com/path");
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn other_schemes_are_not_recognized() {
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }

    #[tokio::test]
    async fn fetch_captures_status_headers_and_body() {
        let base = serve(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/html\r\n\
             X-Frame-Options: DENY\r\n\
             Content-Length: 27\r\n\
             Connection: close\r\n\r\n\
             <html><h1>Hello</h1></html>",
        )
        .await;

        let result = fetch(&base, &AuditConfig::default()).await.unwrap();
        assert_eq!(result.status, 200);
        assert_eq!(result.body, "<html><h1>Hello</h1></html>");
        assert_eq!(result.header("x-frame-options").as_deref(), Some("DENY"));
        assert!(result.has_header("X-FRAME-OPTIONS"));
        assert!(result.final_url.starts_with(&base));
        assert!(result.load_time >= 0.0);
    }

    #[tokio::test]
    async fn non_success_status_is_still_a_result() {
        let base = serve(
            "HTTP/1.1 500 Internal Server Error\r\n\
             Content-Length: 11\r\n\
             Connection: close\r\n\r\n\
             mysql_error",
        )
        .await;

        let result = fetch(&base, &AuditConfig::default()).await.unwrap();
        assert_eq!(result.status, 500);
        assert_eq!(result.body, "mysql_error");
    }

    #[tokio::test]
    async fn refused_connection_is_a_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = AuditConfig { timeout: Duration::from_secs(2), ..AuditConfig::default() };
        let err = fetch(&format!("http://{}", addr), &config).await.unwrap_err();
        assert!(matches!(err, FetchError::Connect(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn redirects_are_followed() {
        let base = serve_routes(|path| match path {
            "/next" => "HTTP/1.1 200 OK\r\n\
                        Content-Length: 2\r\n\
                        Connection: close\r\n\r\n\
                        ok",
            _ => "HTTP/1.1 302 Found\r\n\
                  Location: /next\r\n\
                  Content-Length: 0\r\n\
                  Connection: close\r\n\r\n",
        })
        .await;

        let result = fetch(&base, &AuditConfig::default()).await.unwrap();
        assert_eq!(result.status, 200);
        assert_eq!(result.final_url, format!("{}/next", base));
        assert_eq!(result.body, "ok");
    }

    #[tokio::test]
    async fn endless_redirects_are_a_redirect_error() {
        let base = serve(
            "HTTP/1.1 302 Found\r\n\
             Location: /again\r\n\
             Content-Length: 0\r\n\
             Connection: close\r\n\r\n",
        )
        .await;

        let config = AuditConfig { max_redirects: 3, ..AuditConfig::default() };
        let err = fetch(&base, &config).await.unwrap_err();
        assert!(matches!(err, FetchError::Redirect(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        let config = AuditConfig { timeout: Duration::from_secs(1), ..AuditConfig::default() };
        let err = fetch(&format!("http://{}", addr), &config).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(d) if d == Duration::from_secs(1)), "got {err:?}");
        assert_eq!(err.to_string(), "request timed out after 1 seconds");
    }
}
