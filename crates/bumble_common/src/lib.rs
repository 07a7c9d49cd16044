// --- File: crates/bumble_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Tracing initialisation
pub mod services; // Service abstractions for calendar and mail

// Re-export the trait seam for easier access
pub use services::{
    BookingRecord, BoxFuture, BoxedError, CalendarEntry, CalendarService, ConfirmationEmail,
    MailService, NewBooking,
};
