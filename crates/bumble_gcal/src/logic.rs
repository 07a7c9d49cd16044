// --- File: crates/bumble_gcal/src/logic.rs ---
use bumble_common::services::{
    BoxedError, CalendarEntry, CalendarService, ConfirmationEmail, MailService, NewBooking,
};
use bumble_config::GcalConfig;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::str::FromStr;
use tracing::{debug, warn};

// --- Error Handling ---
use thiserror::Error;

/// Typed outcomes of the availability/booking/summary operations.
///
/// Replaces the original's string-matched status messages: callers branch on
/// the variant, handlers decide the HTTP mapping.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("calendar service error: {0}")]
    Calendar(#[source] BoxedError),
    #[error("invalid date or time: {0}")]
    InvalidDateTime(String),
    #[error("slot already booked")]
    Conflict,
}

fn calendar_err<E: StdError + Send + Sync + 'static>(err: E) -> BookingError {
    BookingError::Calendar(BoxedError(Box::new(err)))
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("gcal.calendar_id is not configured")]
    MissingCalendarId,
    #[error("unknown time zone: {0}")]
    InvalidTimeZone(String),
}

// --- Fixed configuration, resolved once at startup ---

/// The booking rules, resolved from [`GcalConfig`] when the routes are built
/// so handlers never touch raw config (and never re-parse the zone).
#[derive(Debug, Clone)]
pub struct BookingSettings {
    pub calendar_id: String,
    pub time_zone: Tz,
    /// Fixed ordered slot offering; capacity = its length.
    pub slot_times: Vec<String>,
    pub booking_duration: Duration,
    pub summary_days: u32,
}

impl BookingSettings {
    pub fn from_config(config: &GcalConfig) -> Result<Self, SettingsError> {
        let calendar_id = config
            .calendar_id
            .clone()
            .ok_or(SettingsError::MissingCalendarId)?;
        let time_zone = Tz::from_str(&config.time_zone)
            .map_err(|_| SettingsError::InvalidTimeZone(config.time_zone.clone()))?;
        Ok(Self {
            calendar_id,
            time_zone,
            slot_times: config.slot_times.clone(),
            booking_duration: Duration::minutes(config.booking_duration_minutes),
            summary_days: config.summary_days,
        })
    }
}

// --- Data Structures ---

#[derive(Deserialize, Debug, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM, one of the configured slot times
    pub time: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub date: String,
    pub available: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Success,
    Error,
}

#[derive(Serialize, Debug)]
pub struct BookingResponse {
    pub status: BookingStatus,
    pub message: String,
}

/// What `book_slot` reports back when the calendar record was created.
#[derive(Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed { event_id: Option<String> },
    /// The event exists but the confirmation send failed; the booking stands.
    ConfirmedEmailFailed { event_id: Option<String> },
}

/// One entry of the 45-day calendar view, shaped for FullCalendar.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub title: String,
    pub start: NaiveDate,
    #[serde(rename = "allDay")]
    pub all_day: bool,
    pub color: String,
}

// --- Pure slot arithmetic ---

/// The UTC bounds of `date`'s 24h window in the display zone.
pub fn day_window(date: NaiveDate, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>), BookingError> {
    let local_midnight = |d: NaiveDate| {
        tz.from_local_datetime(&d.and_hms_opt(0, 0, 0).expect("midnight is valid"))
            .earliest()
            .ok_or_else(|| BookingError::InvalidDateTime(format!("no midnight for {d} in {tz}")))
    };
    let start = local_midnight(date)?;
    let end = local_midnight(date + Duration::days(1))?;
    Ok((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

/// The UTC bounds of one booking interval at `date`+`time`.
pub fn slot_window(
    date: NaiveDate,
    time: &str,
    tz: Tz,
    duration: Duration,
) -> Result<(DateTime<Utc>, DateTime<Utc>), BookingError> {
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| BookingError::InvalidDateTime(format!("invalid time (HH:MM): {time}")))?;
    let start = tz
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| {
            BookingError::InvalidDateTime(format!("{date} {time} does not exist in {tz}"))
        })?
        .with_timezone(&Utc);
    Ok((start, start + duration))
}

/// Time-of-day (HH:MM, display zone) of every timed entry. All-day entries
/// carry no time-of-day and are skipped.
pub fn booked_times(entries: &[CalendarEntry], tz: Tz) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| entry.start_time)
        .map(|start| start.with_timezone(&tz).format("%H:%M").to_string())
        .collect()
}

/// Slot set minus booked times, slot order preserved.
pub fn free_slots(slots: &[String], booked: &[String]) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| !booked.iter().any(|b| b == *slot))
        .cloned()
        .collect()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The next `window_days` calendar days starting at `today`, weekends removed.
pub fn upcoming_weekdays(today: NaiveDate, window_days: u32) -> Vec<NaiveDate> {
    (0..window_days as i64)
        .map(|offset| today + Duration::days(offset))
        .filter(|date| !is_weekend(*date))
        .collect()
}

/// Occupancy classification for one summary day.
///
/// `today` is injected rather than read from the wall clock so the
/// classification is deterministic under test.
pub fn classify_day(
    date: NaiveDate,
    today: NaiveDate,
    booked_count: usize,
    capacity: usize,
) -> DaySummary {
    let (title, color) = if date < today {
        ("Past".to_string(), "darkgrey")
    } else if booked_count == 0 {
        ("Available".to_string(), "green")
    } else if booked_count < capacity {
        (
            format!("Available ({}/{})", capacity - booked_count, capacity),
            "orange",
        )
    } else {
        ("Fully Booked".to_string(), "red")
    };
    DaySummary {
        title,
        start: date,
        all_day: true,
        color: color.to_string(),
    }
}

// --- Availability ---

/// Free slots for one date: the configured slot list minus the time-of-day
/// of every timed event on that date.
pub async fn compute_availability<S: CalendarService>(
    calendar: &S,
    settings: &BookingSettings,
    date: NaiveDate,
) -> Result<AvailabilityResponse, BookingError> {
    let (start, end) = day_window(date, settings.time_zone)?;
    let entries = calendar
        .list_events(&settings.calendar_id, start, end)
        .await
        .map_err(calendar_err)?;

    let booked = booked_times(&entries, settings.time_zone);
    debug!(%date, booked = ?booked, "booked times found");

    Ok(AvailabilityResponse {
        date: date.to_string(),
        available: free_slots(&settings.slot_times, &booked),
    })
}

// --- Booking ---

/// Books one slot: re-checks the target interval, inserts the event, then
/// attempts exactly one confirmation send.
///
/// A mail failure is downgraded to [`BookingOutcome::ConfirmedEmailFailed`]
/// because the calendar record is authoritative and already committed.
/// The re-check is advisory only; there is no transaction against Google
/// Calendar, so two concurrent requests can both pass it.
pub async fn book_slot<S: CalendarService>(
    calendar: &S,
    mailer: &dyn MailService,
    settings: &BookingSettings,
    request: &BookingRequest,
) -> Result<BookingOutcome, BookingError> {
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| {
        BookingError::InvalidDateTime(format!("invalid date (YYYY-MM-DD): {}", request.date))
    })?;
    let (start, end) = slot_window(
        date,
        &request.time,
        settings.time_zone,
        settings.booking_duration,
    )?;

    // Second look right before insert. All-day events never block a slot,
    // matching the availability view.
    let entries = calendar
        .list_events(&settings.calendar_id, start, end)
        .await
        .map_err(calendar_err)?;
    if entries.iter().any(|entry| entry.start_time.is_some()) {
        return Err(BookingError::Conflict);
    }

    let record = calendar
        .create_event(
            &settings.calendar_id,
            NewBooking {
                summary: format!("Booking: {}", request.name),
                description: format!("Client: {}\nEmail: {}", request.name, request.email),
                start,
                end,
                time_zone: settings.time_zone.name().to_string(),
            },
        )
        .await
        .map_err(calendar_err)?;
    debug!(event_id = ?record.event_id, status = %record.status, "booking event created");

    let email = ConfirmationEmail {
        to: request.email.clone(),
        name: request.name.clone(),
        date: request.date.clone(),
        time: request.time.clone(),
    };
    if let Err(err) = mailer.send_confirmation(email).await {
        warn!(error = %err, "confirmation email failed, booking stands");
        return Ok(BookingOutcome::ConfirmedEmailFailed {
            event_id: record.event_id,
        });
    }

    Ok(BookingOutcome::Confirmed {
        event_id: record.event_id,
    })
}

// --- Calendar summary ---

/// Per-day occupancy for the rolling summary window, weekends skipped.
/// Uses the same slot model and day windows as the availability query.
pub async fn build_day_summaries<S: CalendarService>(
    calendar: &S,
    settings: &BookingSettings,
    today: NaiveDate,
) -> Result<Vec<DaySummary>, BookingError> {
    let capacity = settings.slot_times.len();
    let mut summaries = Vec::new();

    for date in upcoming_weekdays(today, settings.summary_days) {
        let (start, end) = day_window(date, settings.time_zone)?;
        let entries = calendar
            .list_events(&settings.calendar_id, start, end)
            .await
            .map_err(calendar_err)?;
        let booked_count = entries
            .iter()
            .filter(|entry| entry.start_time.is_some())
            .count();
        summaries.push(classify_day(date, today, booked_count, capacity));
    }

    Ok(summaries)
}
