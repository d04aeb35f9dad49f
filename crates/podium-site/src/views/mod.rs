//! Site views composed around the video embed component.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod speaking;
