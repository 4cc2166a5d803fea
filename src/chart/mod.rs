//! Chart rendering
//!
//! The pipeline talks to a [`ChartRenderer`] so that the real SVG renderer
//! can be swapped for [`RecordingChartRenderer`] in tests.

pub mod svg;

pub use svg::SvgChartRenderer;

use crate::error::Result;
use crate::format::ResultRow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Supported chart kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    /// Resolve a chart selector; anything other than `bar` or `pie` is `None`
    pub fn parse(selector: &str) -> Option<Self> {
        match selector {
            "bar" => Some(ChartKind::Bar),
            "pie" => Some(ChartKind::Pie),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub title: String,
    /// Axis labels, only drawn on bar charts
    pub x_label: String,
    pub y_label: String,
    pub rows: Vec<ResultRow>,
}

/// Draws a chart for a result set into a file
pub trait ChartRenderer: Send + Sync {
    /// File extension of the charts this renderer produces
    fn extension(&self) -> &'static str;

    /// Render `request` into `path`
    fn render(&self, request: &ChartRequest, path: &Path) -> Result<()>;
}

/// Renderer that only remembers what it was asked to draw
#[derive(Clone, Default)]
pub struct RecordingChartRenderer {
    pub requests: Arc<Mutex<Vec<(ChartRequest, PathBuf)>>>,
}

impl RecordingChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, oldest first
    pub fn recorded(&self) -> Vec<(ChartRequest, PathBuf)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ChartRenderer for RecordingChartRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, request: &ChartRequest, path: &Path) -> Result<()> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((request.clone(), path.to_path_buf()));
        }
        Ok(())
    }
}
