use std::sync::Arc;

use tracing::info;

use crate::config::PortalConfig;
use crate::error::{PortalError, Result};
use crate::http::{HttpServer, PortalContext};
use crate::store::CredentialStore;
use crate::telemetry::SystemStatus;

pub fn boot(config: &PortalConfig) {
    info!("Boot sequence started.");
    info!(
        "{} {} by {}",
        config.theme.app_title, config.theme.app_version, config.theme.author_name
    );
    info!("Portal address: {}", config.server.addr);
}

/// Serve the portal until the server thread exits.
///
/// The returned store handle is the one the HTTP handlers write into, so the
/// device's connection logic can watch it.
pub fn start(config: PortalConfig) -> Result<(CredentialStore, std::thread::JoinHandle<()>)> {
    boot(&config);

    let store = CredentialStore::new();
    let ctx = Arc::new(PortalContext::new(
        config.theme,
        store.clone(),
        Box::new(SystemStatus::new()),
    ));

    let handle = HttpServer::new(&config.server.addr).start(ctx)?;
    info!("Portal online.");
    Ok((store, handle))
}

pub fn run(config: PortalConfig) -> Result<()> {
    let (_store, handle) = start(config)?;
    handle.join().map_err(|_| PortalError::ServerPanicked)
}
