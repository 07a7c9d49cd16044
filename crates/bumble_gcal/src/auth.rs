// File: crates/bumble_gcal/src/auth.rs
use bumble_config::GcalConfig;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_application_secret, InstalledFlowAuthenticator, InstalledFlowReturnMethod},
    CalendarHub,
};
use std::{error::Error, path::Path};

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds an authorized Calendar client using the installed-app OAuth flow.
///
/// A previously persisted token is reused (and refreshed when refreshable);
/// otherwise the interactive browser flow runs once and the new token is
/// written to the cache path before the hub is returned. If the flow cannot
/// complete this fails, and the caller treats that as fatal.
pub async fn create_calendar_hub(
    config: &GcalConfig,
) -> Result<HubType, Box<dyn Error + Send + Sync>> {
    let app_secret = read_application_secret(Path::new(&config.credentials_path)).await?;

    let auth = InstalledFlowAuthenticator::builder(app_secret, InstalledFlowReturnMethod::HTTPRedirect)
        .persist_tokens_to_disk(Path::new(&config.token_cache_path))
        .build()
        .await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
