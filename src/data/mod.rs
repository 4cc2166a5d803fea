//! Input data: record types and document loading

pub mod loader;
pub mod records;

pub use loader::{load_dataset, load_document, Document, InputPaths};
pub use records::{Airline, Airport, Dataset, Route};
