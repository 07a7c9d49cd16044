// --- File: crates/bumble_common/src/services.rs ---
//! Service abstractions for the external collaborators.
//!
//! The booking logic never talks to Google directly; it goes through these
//! traits so the orchestration can be exercised against in-memory
//! implementations in tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for
/// Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// One event as seen by the booking logic.
///
/// `start_time` is `None` for all-day entries, which never count towards
/// booked slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub event_id: Option<String>,
    pub summary: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

/// A booking to be inserted into the external calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA zone name stamped onto the created event.
    pub time_zone: String,
}

/// What the external calendar reports back after an insert.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub event_id: Option<String>,
    pub status: String,
}

/// Everything the confirmation template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub to: String,
    pub name: String,
    pub date: String,
    pub time: String,
}

/// A trait for calendar operations.
///
/// Only the two operations the booking service actually performs: listing
/// events in a window and inserting a new one. The external calendar owns
/// the records; nothing is stored locally.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar operations.
    type Error: StdError + Send + Sync + 'static;

    /// List events whose time intersects `[start, end)`.
    fn list_events(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<CalendarEntry>, Self::Error>;

    /// Insert a booking event.
    fn create_event(
        &self,
        calendar_id: &str,
        booking: NewBooking,
    ) -> BoxFuture<'_, BookingRecord, Self::Error>;
}

/// A trait for sending booking confirmations.
///
/// Object-safe (boxed error) so the booking flow can hold `Arc<dyn
/// MailService>` and tests can swap in a recorder.
pub trait MailService: Send + Sync {
    /// Send a single confirmation message. Exactly one send attempt per
    /// booking; the caller decides what a failure means.
    fn send_confirmation(&self, email: ConfirmationEmail) -> BoxFuture<'_, (), BoxedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_error_displays_inner_message() {
        let err = BoxedError("mail transport unreachable".into());
        assert_eq!(err.to_string(), "mail transport unreachable");
    }
}
