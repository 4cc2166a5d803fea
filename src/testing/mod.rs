//! Testing utilities and fixtures
//!
//! This module provides dataset builders, fixtures and a temporary
//! workspace for tests that need the documents on disk.

pub mod fixtures;

pub use fixtures::builders::DatasetBuilder;
pub use fixtures::Fixtures;

use crate::data::{Dataset, Document, InputPaths};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding input documents and outputs
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a test file in the temporary directory
    pub fn create_test_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.temp_dir.path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Write `dataset` as the three YAML documents
    pub fn write_dataset(&self, dataset: &Dataset) -> Result<InputPaths> {
        Ok(InputPaths {
            airlines: self.write_document(Document::Airlines, &dataset.airlines)?,
            airports: self.write_document(Document::Airports, &dataset.airports)?,
            routes: self.write_document(Document::Routes, &dataset.routes)?,
        })
    }

    fn write_document<T: Serialize>(&self, document: Document, records: &[T]) -> Result<PathBuf> {
        let yaml = document_yaml(document, records)?;
        self.create_test_file(&format!("{}.yaml", document.key()), &yaml)
    }
}

/// Serialize records under their document's top-level key
pub fn document_yaml<T: Serialize>(document: Document, records: &[T]) -> Result<String> {
    let mut root = BTreeMap::new();
    root.insert(document.key(), records);
    Ok(serde_yaml::to_string(&root)?)
}

/// Read a file that a test expects to exist
pub fn read_output(dir: &Path, name: &str) -> Result<String> {
    Ok(std::fs::read_to_string(dir.join(name))?)
}
