// --- File: crates/bumble_gmail/src/message.rs ---
//! Assembly of the plain-text confirmation message.

pub const CONFIRMATION_SUBJECT: &str = "Booking Confirmation \u{2013} Bumblebee Gardening";

/// The fixed confirmation body, restating the booked date and time.
pub fn confirmation_body(name: &str, date: &str, time: &str, from_name: &str) -> String {
    format!(
        "Hi {name},\n\n\
         Thank you for booking with Bumblebee Gardening!\n\n\
         Your appointment is confirmed for:\n\
         {date} at {time}\n\n\
         We look forward to helping you with your garden.\n\n\
         - {from_name}\n"
    )
}

/// Wraps subject and body into the RFC 2822 envelope the Gmail send
/// endpoint expects. `From: me` stands for the authenticated user.
pub fn to_rfc2822(to: &str, subject: &str, body: &str) -> String {
    format!(
        "From: me\r\nTo: {to}\r\nSubject: {subject}\r\n\
         Content-Type: text/plain; charset=\"UTF-8\"\r\n\r\n{body}"
    )
}
