// File: crates/bumble_gmail/src/auth.rs
use bumble_config::GmailConfig;
use google_gmail1::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_application_secret, InstalledFlowAuthenticator, InstalledFlowReturnMethod},
    Gmail,
};
use std::{error::Error, path::Path};

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type GmailHubType = Gmail<Connector>;

/// Builds an authorized Gmail client with the same installed-app flow (and,
/// typically, the same token cache) as the calendar hub. The gmail.send
/// scope is requested lazily on the first send.
pub async fn create_gmail_hub(
    config: &GmailConfig,
) -> Result<GmailHubType, Box<dyn Error + Send + Sync>> {
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

    let hub = Gmail::new(client, auth);

    Ok(hub)
}
