//! One invocation of the analysis: load, query, export, chart
//!
//! Unknown selectors are permissive on purpose. An unknown question writes
//! nothing at all; an unknown chart kind still writes the CSV but skips the
//! chart. Both are logged at `warn` and neither is an error.

use crate::chart::{ChartKind, ChartRenderer, ChartRequest};
use crate::data::Dataset;
use crate::engine::{QueryOptions, Question};
use crate::error::{ErrorCode, Result, RouteError};
use crate::export::export_csv;
use crate::format::ResultRow;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutcome {
    pub question: Option<Question>,
    pub rows: Vec<ResultRow>,
    pub csv_path: Option<PathBuf>,
    pub chart_path: Option<PathBuf>,
}

/// Runs questions against a dataset and writes their outputs
pub struct Pipeline {
    renderer: Box<dyn ChartRenderer>,
    output_dir: PathBuf,
    options: QueryOptions,
}

impl Pipeline {
    pub fn new(renderer: Box<dyn ChartRenderer>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            output_dir: output_dir.into(),
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the question and chart named by raw selectors
    pub fn run(&self, dataset: &Dataset, question: &str, graph_type: &str) -> Result<RunOutcome> {
        let Some(question) = Question::parse(question) else {
            warn!("Unknown question '{}'; nothing to do", question);
            return Ok(RunOutcome::default());
        };

        let chart = ChartKind::parse(graph_type);
        if chart.is_none() {
            warn!(
                "Unknown graph type '{}'; the CSV is written but no chart",
                graph_type
            );
        }

        self.run_question(dataset, question, chart)
    }

    /// Run one question, export its rows and optionally chart them
    pub fn run_question(
        &self,
        dataset: &Dataset,
        question: Question,
        chart: Option<ChartKind>,
    ) -> Result<RunOutcome> {
        let spec = question.spec();
        info!("Answering {} for {}", question, self.options.country);

        let rows = question.run(dataset, &self.options);
        debug!("{} produced {} rows", question, rows.len());

        self.ensure_output_dir()?;
        let csv_path = self.output_dir.join(format!("{}.csv", spec.id));
        export_csv(&rows, &csv_path)?;
        info!("Wrote {}", csv_path.display());

        let chart_path = match chart {
            Some(kind) => {
                let path = self
                    .output_dir
                    .join(format!("{}.{}", spec.id, self.renderer.extension()));
                let request = ChartRequest {
                    kind,
                    title: spec.title(&self.options),
                    x_label: spec.x_label.to_string(),
                    y_label: spec.y_label.to_string(),
                    rows: rows.clone(),
                };
                self.renderer.render(&request, &path)?;
                info!("Wrote {}", path.display());
                Some(path)
            }
            None => None,
        };

        Ok(RunOutcome {
            question: Some(question),
            rows,
            csv_path: Some(csv_path),
            chart_path,
        })
    }

    fn ensure_output_dir(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() || self.output_dir.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            RouteError::export(
                ErrorCode::OUTPUT_DIRECTORY,
                &self.output_dir,
                "cannot create output directory",
            )
            .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::RecordingChartRenderer;
    use crate::testing::DatasetBuilder;
    use tempfile::TempDir;

    fn dataset() -> Dataset {
        DatasetBuilder::new()
            .airline("1", "Air Canada", "ACA")
            .airport("10", "Calgary Intl", "Calgary", "Canada", "CYYC", "3557")
            .airport("11", "Vancouver Intl", "Vancouver", "Canada", "CYVR", "14")
            .route("10", "11", "1")
            .route("11", "10", "1")
            .build()
    }

    #[test]
    fn test_csv_rows_match_chart_rows() {
        let dir = TempDir::new().unwrap();
        let recorder = RecordingChartRenderer::new();
        let pipeline = Pipeline::new(Box::new(recorder.clone()), dir.path());

        let outcome = pipeline.run(&dataset(), "q4", "bar").unwrap();

        let recorded = recorder.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0.rows, outcome.rows);
        assert_eq!(recorded[0].0.kind, ChartKind::Bar);
        assert_eq!(recorded[0].1, dir.path().join("q4.svg"));

        let csv = std::fs::read_to_string(dir.path().join("q4.csv")).unwrap();
        let expected = crate::export::to_csv_string(&recorded[0].0.rows).unwrap();
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_unknown_chart_kind_writes_csv_only() {
        let dir = TempDir::new().unwrap();
        let recorder = RecordingChartRenderer::new();
        let pipeline = Pipeline::new(Box::new(recorder.clone()), dir.path());

        let outcome = pipeline.run(&dataset(), "q5", "scatter").unwrap();

        assert!(outcome.chart_path.is_none());
        assert!(recorder.recorded().is_empty());
        assert!(dir.path().join("q5.csv").exists());
    }

    #[test]
    fn test_unknown_question_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let recorder = RecordingChartRenderer::new();
        let pipeline = Pipeline::new(Box::new(recorder.clone()), dir.path());

        let outcome = pipeline.run(&dataset(), "q7", "pie").unwrap();

        assert_eq!(outcome, RunOutcome::default());
        assert!(recorder.recorded().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_chart_title_uses_configured_country() {
        let dir = TempDir::new().unwrap();
        let recorder = RecordingChartRenderer::new();
        let pipeline = Pipeline::new(Box::new(recorder.clone()), dir.path()).with_options(
            QueryOptions {
                country: "Peru".to_string(),
            },
        );

        pipeline
            .run_question(&dataset(), Question::TopAirlinesToCountry, Some(ChartKind::Pie))
            .unwrap();

        let recorded = recorder.recorded();
        assert_eq!(recorded[0].0.title, "Top 20 Airlines with routes to Peru");
        assert!(recorded[0].0.rows.is_empty());
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("charts");
        let pipeline = Pipeline::new(Box::new(RecordingChartRenderer::new()), &nested);

        let outcome = pipeline.run(&dataset(), "q2", "pie").unwrap();

        assert_eq!(outcome.csv_path, Some(nested.join("q2.csv")));
        assert!(nested.join("q2.csv").exists());
    }
}
