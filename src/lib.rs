//! Honeypot — keyword scam detection and bait replies over HTTP.

pub mod api;
pub mod config;
pub mod detector;
pub mod error;
pub mod honeypot;
pub mod intel;
pub mod responder;
