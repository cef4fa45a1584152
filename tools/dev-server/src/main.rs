//! Development Server for xscreen
//!
//! Serves the demo page and the wasm-pack output from a static directory
//! with module-friendly MIME types and caching disabled.
//!
//! Environment:
//! - `PORT` - listen port (default 8080)
//! - `XSCREEN_WEB_ROOT` - directory to serve (default `web`)
//! - `RUST_LOG` - tracing filter (default `dev_server=info,tower_http=info`)

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    response::Response,
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_ROOT: &str = "web";

/// Server settings read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
struct ServerConfig {
    port: u16,
    web_root: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("XSCREEN_WEB_ROOT").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, web_root: Option<&str>) -> Self {
        let port = match port {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = raw, "Invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let web_root = web_root
            .filter(|root| !root.is_empty())
            .unwrap_or(DEFAULT_WEB_ROOT);

        Self {
            port,
            web_root: PathBuf::from(web_root),
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dev_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    if !config.web_root.is_dir() {
        tracing::warn!(root = %config.web_root.display(), "Web root does not exist yet");
    }

    let app = Router::new()
        .fallback_service(ServeDir::new(&config.web_root))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ))
                .layer(axum::middleware::from_fn(fix_content_type)),
        );

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        url = %format!("http://localhost:{}", config.port),
        root = %config.web_root.display(),
        "xscreen dev server listening"
    );

    axum::serve(listener, app).await
}

/// MIME type for the demo's static assets, by extension
fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Force the MIME types module scripts and wasm streaming compilation need
async fn fix_content_type(request: Request<Body>, next: axum::middleware::Next) -> Response {
    let content_type = content_type_for(request.uri().path());

    let mut response = next.run(request).await;
    if let Some(content_type) = content_type {
        if response.status().is_success() {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }

    response
}
