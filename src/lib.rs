//! # route-manager
//!
//! Answers fixed questions about airline route datasets and exports each
//! answer as a `subject,statistic` CSV plus a bar or pie chart.
//!
//! ## Usage
//!
//! ```bash
//! route_manager --airlines airlines.yaml --airports airports.yaml \
//!     --routes routes.yaml --question q1 --graph-type bar
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, logging, runtime setup and fatal error handling
//! - `chart` - Chart renderer trait and the SVG renderer
//! - `cli` - Command-line argument structures
//! - `data` - Record types and document loading
//! - `engine` - Question table, joins, grouping and ranking
//! - `error` - Error type and error codes
//! - `export` - CSV output
//! - `format` - Result rows and label templates
//! - `pipeline` - One load, query, export and chart run
//! - `testing` - Dataset builders and fixtures for tests and benchmarks
pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod engine;
pub mod error;
pub mod export;
pub mod format;
pub mod pipeline;

pub mod testing;

pub use engine::{QueryOptions, Question};
pub use error::{Result, RouteError};
pub use format::{ResultRow, Statistic};
