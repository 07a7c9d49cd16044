// File: crates/bumble_gcal/src/handlers.rs
use crate::logic::{
    book_slot, build_day_summaries, compute_availability, AvailabilityResponse, BookingError,
    BookingOutcome, BookingRequest, BookingResponse, BookingSettings, BookingStatus, DaySummary,
};
use crate::service::GoogleCalendarService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use bumble_common::services::MailService;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::error;

use crate::auth::HubType;

// Shared state for the booking handlers
#[derive(Clone)]
pub struct GcalState {
    pub settings: BookingSettings,
    pub calendar_hub: Arc<HubType>,
    pub mailer: Arc<dyn MailService>,
}

/// Handler for `GET /availability/{date}`.
#[axum::debug_handler]
pub async fn availability_handler(
    State(state): State<Arc<GcalState>>,
    Path(date): Path<String>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;

    let calendar = GoogleCalendarService::new(state.calendar_hub.clone());
    match compute_availability(&calendar, &state.settings, date).await {
        Ok(availability) => Ok(Json(availability)),
        Err(BookingError::InvalidDateTime(msg)) => Err((StatusCode::BAD_REQUEST, msg)),
        Err(e) => {
            error!("Error fetching availability: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to query calendar availability".to_string(),
            ))
        }
    }
}

/// Handler for `POST /book`.
///
/// Conflicts come back as 409 with the `{status, message}` body the frontend
/// alerts on; a failed confirmation email still reports the booking as
/// successful.
#[axum::debug_handler]
pub async fn book_handler(
    State(state): State<Arc<GcalState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), (StatusCode, String)> {
    let calendar = GoogleCalendarService::new(state.calendar_hub.clone());

    match book_slot(&calendar, state.mailer.as_ref(), &state.settings, &payload).await {
        Ok(BookingOutcome::Confirmed { .. }) => Ok((
            StatusCode::OK,
            Json(BookingResponse {
                status: BookingStatus::Success,
                message: format!("Booking confirmed and email sent to {}!", payload.email),
            }),
        )),
        Ok(BookingOutcome::ConfirmedEmailFailed { .. }) => Ok((
            StatusCode::OK,
            Json(BookingResponse {
                status: BookingStatus::Success,
                message: "Booking confirmed, but email failed.".to_string(),
            }),
        )),
        Err(BookingError::Conflict) => Ok((
            StatusCode::CONFLICT,
            Json(BookingResponse {
                status: BookingStatus::Error,
                message: "This slot is already booked.".to_string(),
            }),
        )),
        Err(BookingError::InvalidDateTime(msg)) => Err((StatusCode::BAD_REQUEST, msg)),
        Err(e) => {
            error!("Error booking slot: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to book appointment.".to_string(),
            ))
        }
    }
}

/// Handler for `GET /calendar`: the rolling weekday summary.
#[axum::debug_handler]
pub async fn calendar_summary_handler(
    State(state): State<Arc<GcalState>>,
) -> Result<Json<Vec<DaySummary>>, (StatusCode, String)> {
    // "today" in the display zone; the summary logic itself takes it as a
    // parameter and never reads the clock
    let today = Utc::now().with_timezone(&state.settings.time_zone).date_naive();

    let calendar = GoogleCalendarService::new(state.calendar_hub.clone());
    match build_day_summaries(&calendar, &state.settings, today).await {
        Ok(summaries) => Ok(Json(summaries)),
        Err(e) => {
            error!("Error building calendar summary: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to build calendar summary".to_string(),
            ))
        }
    }
}
