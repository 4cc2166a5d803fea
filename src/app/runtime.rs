//! Runtime initialization and the single analysis run

use crate::app::{config::AppConfig, logging::init_logging};
use crate::chart::{ChartRenderer, SvgChartRenderer};
use crate::data::load_dataset;
use crate::pipeline::{Pipeline, RunOutcome};
use anyhow::{Context, Result};
use tracing::debug;

/// Initialize the application with proper logging and configuration
pub fn initialize_app(config: &AppConfig) -> Result<()> {
    init_logging(config);
    config.validate()?;
    debug!("Configuration: {:?}", config);
    Ok(())
}

/// Load the inputs and answer the configured question with SVG charts
pub fn run_analysis(config: &AppConfig) -> Result<RunOutcome> {
    let renderer = SvgChartRenderer::new()?;
    run_analysis_with(config, Box::new(renderer))
}

/// Load the inputs and answer the configured question with `renderer`
pub fn run_analysis_with(
    config: &AppConfig,
    renderer: Box<dyn ChartRenderer>,
) -> Result<RunOutcome> {
    let dataset = load_dataset(&config.inputs).context("Failed to load input documents")?;

    let pipeline =
        Pipeline::new(renderer, config.output_dir.clone()).with_options(config.query_options());
    let outcome = pipeline
        .run(&dataset, &config.question, &config.graph_type)
        .with_context(|| format!("Failed to answer question '{}'", config.question))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::RecordingChartRenderer;
    use crate::testing::{Fixtures, TestContext};

    #[test]
    fn test_run_analysis_end_to_end() {
        let ctx = TestContext::new().unwrap();
        let inputs = ctx.write_dataset(&Fixtures::canadian_sample()).unwrap();
        let config = AppConfig::new(0, inputs, "q1", "pie")
            .with_output_dir(Some(ctx.temp_path().join("out")));

        let recorder = RecordingChartRenderer::new();
        let outcome = run_analysis_with(&config, Box::new(recorder.clone())).unwrap();

        assert_eq!(outcome.rows.len(), 3);
        assert_eq!(outcome.rows[0].subject, "Air Canada (ACA)");
        assert_eq!(recorder.recorded().len(), 1);
    }

    #[test]
    fn test_malformed_input_keeps_route_error() {
        let ctx = TestContext::new().unwrap();
        let mut inputs = ctx.write_dataset(&Fixtures::canadian_sample()).unwrap();
        inputs.routes = ctx.create_test_file("bad.yaml", "flights: []\n").unwrap();
        let config = AppConfig::new(0, inputs, "q2", "bar");

        let err = run_analysis_with(&config, Box::new(RecordingChartRenderer::new())).unwrap_err();
        let route_err = err
            .chain()
            .find_map(|c| c.downcast_ref::<crate::error::RouteError>())
            .unwrap();
        assert_eq!(route_err.exit_code(), 3);
    }
}
