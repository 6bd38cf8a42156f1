use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::{Res, api, export::ExportContext, info};

/// Builds the service router around a shared export context.
///
/// Registers the export endpoints and the health check, injects `ctx`
/// through an [`Extension`] layer and wraps everything in the CORS
/// middleware, so every response allows any origin.
///
/// # Routes
///
/// - `GET /health` - [`api::health`]
/// - `GET /api/playlist` - [`api::playlist`]
/// - `GET /api/playlist/download` - [`api::playlist_download`]
///
/// # Arguments
///
/// * `ctx` - Configuration and HTTP client shared by all requests
///
/// # Example
///
/// ```
/// let ctx = ExportContext::new(Config::from_env())?;
/// let app = router(ctx);
/// ```
pub fn router(ctx: ExportContext) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/playlist", get(api::playlist))
        .route("/api/playlist/download", get(api::playlist_download))
        .layer(Extension(ctx))
        .layer(middleware::from_fn(cors))
}

/// Binds the configured address and serves until the process stops.
///
/// # Arguments
///
/// * `ctx` - Shared export context handed to [`router`]
/// * `addr` - Socket address to bind, e.g. `127.0.0.1:5000`
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop
/// fails.
///
/// # Example
///
/// ```
/// start_api_server(ctx, "0.0.0.0:8080").await?;
/// ```
pub async fn start_api_server(ctx: ExportContext, addr: &str) -> Res<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    serve(listener, ctx).await
}

/// Serves on an already bound listener.
///
/// Binding `127.0.0.1:0` first and passing the listener in lets the caller
/// learn the chosen port before the server starts.
///
/// # Errors
///
/// Returns an error if the server loop fails.
pub async fn serve(listener: TcpListener, ctx: ExportContext) -> Res<()> {
    axum::serve(listener, router(ctx)).await?;
    Ok(())
}

// Allow every origin. Preflight requests are answered here directly.
async fn cors(req: Request, next: Next) -> Response {
    let mut res = if req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        let headers = res.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        );
        res
    } else {
        next.run(req).await
    };

    res.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    res
}
