//! Shared test mocks and fixtures for Podium.

mod catalog;
mod clock;
mod source;
mod temp;

pub use catalog::sample_catalog;
pub use clock::FixedClock;
pub use source::{FailingCatalogSource, FixedCatalogSource};
pub use temp::TempCatalogFile;
