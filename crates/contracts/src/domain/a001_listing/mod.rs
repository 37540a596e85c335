//! Listing catalog: record type, dataset parsing, filter/sort pipeline and
//! per-field formatting used by the card renderer.

pub mod aggregate;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod format;

pub use aggregate::{Listing, ListingId};
pub use catalog::{Catalog, FilterCriteria, PriceSort};
pub use error::LoadError;
