// --- File: crates/bumble_gcal/src/service.rs ---
//! Google Calendar implementation of the `CalendarService` seam.

use std::sync::Arc;

use bumble_common::services::{
    BookingRecord, BoxFuture, CalendarEntry, CalendarService, NewBooking,
};
use chrono::{DateTime, Utc};
use google_calendar3::api::{Event, EventDateTime};
use thiserror::Error;

use crate::auth::HubType;

/// Errors from the Google Calendar API surface.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    Api(#[from] google_calendar3::Error),
}

pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Lists the calendar's events intersecting `[start, end)`, recurring
    /// events expanded, ordered by start time. All-day events come back with
    /// `start_time: None`.
    fn list_events(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<CalendarEntry>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let (_response, events_list) = calendar_hub
                .events()
                .list(&calendar_id)
                .time_min(start)
                .time_max(end)
                .single_events(true)
                .order_by("startTime")
                .doit()
                .await?;

            let entries = events_list
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|event| CalendarEntry {
                    event_id: event.id,
                    summary: event.summary,
                    // `date_time` is absent exactly for all-day events
                    start_time: event.start.and_then(|s| s.date_time),
                })
                .collect();

            Ok(entries)
        })
    }

    /// Inserts one booking event with the display zone stamped on both ends.
    fn create_event(
        &self,
        calendar_id: &str,
        booking: NewBooking,
    ) -> BoxFuture<'_, BookingRecord, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let new_event = Event {
                summary: Some(booking.summary),
                description: Some(booking.description),
                start: Some(EventDateTime {
                    date_time: Some(booking.start),
                    time_zone: Some(booking.time_zone.clone()),
                    ..Default::default()
                }),
                end: Some(EventDateTime {
                    date_time: Some(booking.end),
                    time_zone: Some(booking.time_zone),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            Ok(BookingRecord {
                event_id: created_event.id,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}

/// In-memory implementation of `CalendarService` for testing.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Error, Debug)]
    #[error("mock calendar error: {0}")]
    pub struct MockCalendarError(pub String);

    struct StoredEvent {
        entry: CalendarEntry,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    }

    /// Mock calendar holding events in memory. Seeded entries and created
    /// bookings both show up in `list_events`.
    pub struct MockCalendarService {
        events: Mutex<Vec<StoredEvent>>,
        next_id: Mutex<u64>,
        pub fail_listing: bool,
    }

    impl MockCalendarService {
        pub fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                next_id: Mutex::new(0),
                fail_listing: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_listing: true,
                ..Self::new()
            }
        }

        /// Seed a pre-existing timed event occupying `[start, end)`.
        pub fn seed_timed_event(&self, summary: &str, start: DateTime<Utc>, end: DateTime<Utc>) {
            let id = self.fresh_id();
            self.events.lock().unwrap().push(StoredEvent {
                entry: CalendarEntry {
                    event_id: Some(id),
                    summary: Some(summary.to_string()),
                    start_time: Some(start),
                },
                start,
                end,
            });
        }

        /// Seed an all-day event covering the given window.
        pub fn seed_all_day_event(&self, summary: &str, start: DateTime<Utc>, end: DateTime<Utc>) {
            let id = self.fresh_id();
            self.events.lock().unwrap().push(StoredEvent {
                entry: CalendarEntry {
                    event_id: Some(id),
                    summary: Some(summary.to_string()),
                    start_time: None,
                },
                start,
                end,
            });
        }

        pub fn event_count(&self) -> usize {
            self.events.lock().unwrap().len()
        }

        /// Window of the most recently stored event.
        pub fn last_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
            self.events
                .lock()
                .unwrap()
                .last()
                .map(|event| (event.start, event.end))
        }

        fn fresh_id(&self) -> String {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("mock-event-{next}")
        }
    }

    impl CalendarService for MockCalendarService {
        type Error = MockCalendarError;

        fn list_events(
            &self,
            _calendar_id: &str,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> BoxFuture<'_, Vec<CalendarEntry>, Self::Error> {
            Box::pin(async move {
                if self.fail_listing {
                    return Err(MockCalendarError("listing unavailable".to_string()));
                }
                let events = self.events.lock().unwrap();
                let mut hits: Vec<_> = events
                    .iter()
                    .filter(|event| event.start < end && event.end > start)
                    .map(|event| event.entry.clone())
                    .collect();
                hits.sort_by_key(|entry| entry.start_time);
                Ok(hits)
            })
        }

        fn create_event(
            &self,
            _calendar_id: &str,
            booking: NewBooking,
        ) -> BoxFuture<'_, BookingRecord, Self::Error> {
            Box::pin(async move {
                let id = self.fresh_id();
                self.events.lock().unwrap().push(StoredEvent {
                    entry: CalendarEntry {
                        event_id: Some(id.clone()),
                        summary: Some(booking.summary),
                        start_time: Some(booking.start),
                    },
                    start: booking.start,
                    end: booking.end,
                });
                Ok(BookingRecord {
                    event_id: Some(id),
                    status: "confirmed".to_string(),
                })
            })
        }
    }
}
