//! Podium — site composition for the Speaking page.
//!
//! Responsible for loading the talk catalog, composing the page views
//! around the video embed component, and rendering the final document.

pub mod application;
pub mod sources;
pub mod views;
