// --- File: crates/bumble_gmail/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod message;
pub mod service;

pub use service::GmailMailer;
