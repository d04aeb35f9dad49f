//! Podium Core — shared domain abstractions for the Speaking page.
//!
//! This crate defines the talk catalog model with the trait that loads it,
//! the named stylesheets components ship with, and the `VideoEmbed`
//! component. It contains no infrastructure code.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod source;
pub mod style;
pub mod talk;
pub mod video;
