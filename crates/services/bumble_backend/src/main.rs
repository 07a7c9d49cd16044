// File: services/bumble_backend/src/main.rs
use axum::Router;
use bumble_common::services::MailService;
use bumble_config::load_config;
use bumble_gcal::routes as booking_routes;
use bumble_gmail::auth::create_gmail_hub;
use bumble_gmail::GmailMailer;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    bumble_common::logging::init();

    // Authorization happens here, once; an incomplete OAuth flow is fatal
    // and needs out-of-band fixing (credentials file, token cache).
    let gmail_hub = create_gmail_hub(&config.gmail)
        .await
        .expect("Gmail authorization failed");
    let mailer: Arc<dyn MailService> = Arc::new(GmailMailer::new(
        Arc::new(gmail_hub),
        config.gmail.from_name.clone(),
    ));

    let booking_router = booking_routes::routes(config.clone(), mailer)
        .await
        .expect("Google Calendar authorization failed");

    let app = Router::new()
        .merge(booking_router)
        // landing page and frontend assets
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
