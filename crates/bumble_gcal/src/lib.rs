// --- File: crates/bumble_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod service;
