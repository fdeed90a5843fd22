//! The fixed part catalog: promoters, ORFs, linkers and regulatory elements
//! a slot can be filled with, plus descriptions of the backbone elements.

pub mod catalog;
pub mod entry;
pub mod seed_data;

pub use catalog::{Catalog, PartInfo};
pub use entry::{BackboneInfo, CatalogEntry};
