use crate::{config::Config, error, export::ExportContext, server};

/// Runs the HTTP service. `addr` overrides `SERVER_ADDRESS`.
pub async fn serve(config: Config, addr: Option<String>) {
    let addr = addr.unwrap_or_else(|| config.server_addr.clone());

    let ctx = match ExportContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    if let Err(e) = server::start_api_server(ctx, &addr).await {
        error!("Server on {} stopped: {}", addr, e);
    }
}
