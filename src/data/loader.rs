//! Loading of the airlines, airports and routes documents
//!
//! Each document is a mapping with one top-level key holding a list of flat
//! records. YAML is the native format; files ending in `.json` are parsed as
//! JSON. Nothing beyond the top-level key is validated.

use super::records::{Airline, Airport, Dataset, Route};
use crate::error::{ErrorCode, Result, RouteError};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The three input documents and their required top-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Airlines,
    Airports,
    Routes,
}

impl Document {
    pub fn key(self) -> &'static str {
        match self {
            Document::Airlines => "airlines",
            Document::Airports => "airports",
            Document::Routes => "routes",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }
}

/// Paths of the three input documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub airlines: PathBuf,
    pub airports: PathBuf,
    pub routes: PathBuf,
}

/// Load all three documents into a [`Dataset`]
pub fn load_dataset(paths: &InputPaths) -> Result<Dataset> {
    let airlines: Vec<Airline> = load_document(&paths.airlines, Document::Airlines)?;
    let airports: Vec<Airport> = load_document(&paths.airports, Document::Airports)?;
    let routes: Vec<Route> = load_document(&paths.routes, Document::Routes)?;

    info!(
        "Loaded {} airlines, {} airports, {} routes",
        airlines.len(),
        airports.len(),
        routes.len()
    );

    Ok(Dataset::new(airlines, airports, routes))
}

/// Read and parse one document from disk
pub fn load_document<T: DeserializeOwned>(path: &Path, document: Document) -> Result<Vec<T>> {
    debug!("Reading {} from {}", document, path.display());

    let text = std::fs::read_to_string(path).map_err(|e| RouteError::io(path, e))?;
    let records: Vec<T> = parse_document(&text, document, SourceFormat::for_path(path))
        .map_err(|e| e.with_context(path.display()))?;

    debug!("Parsed {} {} records", records.len(), document);
    Ok(records)
}

/// Parse a YAML document held in memory
pub fn parse_yaml<T: DeserializeOwned>(text: &str, document: Document) -> Result<Vec<T>> {
    parse_document(text, document, SourceFormat::Yaml)
}

/// Parse a JSON document held in memory
pub fn parse_json<T: DeserializeOwned>(text: &str, document: Document) -> Result<Vec<T>> {
    parse_document(text, document, SourceFormat::Json)
}

fn parse_document<T: DeserializeOwned>(
    text: &str,
    document: Document,
    format: SourceFormat,
) -> Result<Vec<T>> {
    let key = document.key();
    let missing_key = || {
        RouteError::malformed_input(
            ErrorCode::INPUT_MISSING_KEY,
            key,
            format!("missing top-level key '{}'", key),
        )
    };
    let invalid_record = |e: String| {
        RouteError::malformed_input(
            ErrorCode::INPUT_INVALID_RECORD,
            key,
            format!("invalid record: {}", e),
        )
    };

    match format {
        SourceFormat::Yaml => {
            let mut doc: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| {
                RouteError::malformed_input(ErrorCode::INPUT_INVALID_YAML, key, "invalid YAML")
                    .with_source(e)
            })?;
            let list = doc
                .as_mapping_mut()
                .and_then(|mapping| mapping.remove(key))
                .ok_or_else(missing_key)?;
            if !list.is_sequence() {
                return Err(not_a_list(key));
            }
            serde_yaml::from_value(list).map_err(|e| invalid_record(e.to_string()))
        }
        SourceFormat::Json => {
            let mut doc: serde_json::Value = serde_json::from_str(text).map_err(|e| {
                RouteError::malformed_input(ErrorCode::INPUT_INVALID_JSON, key, "invalid JSON")
                    .with_source(e)
            })?;
            let list = doc
                .as_object_mut()
                .and_then(|object| object.remove(key))
                .ok_or_else(missing_key)?;
            if !list.is_array() {
                return Err(not_a_list(key));
            }
            serde_json::from_value(list).map_err(|e| invalid_record(e.to_string()))
        }
    }
}

fn not_a_list(key: &str) -> RouteError {
    RouteError::malformed_input(
        ErrorCode::INPUT_NOT_A_LIST,
        key,
        format!("'{}' must hold a list of records", key),
    )
}
