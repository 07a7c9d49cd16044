// --- File: crates/bumble_gcal/src/routes.rs ---

use crate::handlers::{availability_handler, book_handler, calendar_summary_handler, GcalState};
use axum::{
    routing::{get, post},
    Router,
};
use std::error::Error;
use std::sync::Arc;

use crate::auth::create_calendar_hub;
use crate::logic::BookingSettings;
use bumble_common::services::MailService;
use bumble_config::AppConfig;

/// Creates the router for the booking endpoints.
///
/// Resolves the booking settings and authorizes the Calendar client up
/// front; either failing is fatal for startup.
pub async fn routes(
    config: Arc<AppConfig>,
    mailer: Arc<dyn MailService>,
) -> Result<Router, Box<dyn Error + Send + Sync>> {
    let settings = BookingSettings::from_config(&config.gcal)?;
    let calendar_hub = create_calendar_hub(&config.gcal).await?;

    let state = Arc::new(GcalState {
        settings,
        calendar_hub: Arc::new(calendar_hub),
        mailer,
    });

    Ok(Router::new()
        .route("/availability/{date}", get(availability_handler))
        .route("/book", post(book_handler))
        .route("/calendar", get(calendar_summary_handler))
        .with_state(state))
}
