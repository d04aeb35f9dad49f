//! Podium — HTTP server for the Speaking page.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
