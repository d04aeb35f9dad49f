//! Application layer: page render handlers.

pub mod render;
