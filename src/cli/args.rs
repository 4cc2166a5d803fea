//! CLI argument structures
//!
//! Long options also accept upper-case spellings,
//! e.g. `--AIRLINES=airlines.yaml --GRAPH_TYPE=bar`.

use crate::app::{AppConfig, FileConfig};
use crate::data::InputPaths;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Analyze airline routes and export ranked statistics
#[derive(Parser, Debug)]
#[command(name = "route_manager")]
#[command(
    about = "route_manager - Answer route questions as CSV plus a bar or pie chart",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Airlines document (YAML, or JSON with a .json extension)
    #[arg(long, alias = "AIRLINES", value_name = "FILE")]
    pub airlines: PathBuf,

    /// Airports document
    #[arg(long, alias = "AIRPORTS", value_name = "FILE")]
    pub airports: PathBuf,

    /// Routes document
    #[arg(long, alias = "ROUTES", value_name = "FILE")]
    pub routes: PathBuf,

    /// Question to answer: q1, q2, q3, q4 or q5
    #[arg(long, alias = "QUESTION", value_name = "ID")]
    pub question: String,

    /// Chart to draw: bar or pie
    #[arg(long, alias = "GRAPH_TYPE", value_name = "KIND")]
    pub graph_type: String,

    /// Target country for q1 and q5 (default: Canada)
    #[arg(long, value_name = "NAME")]
    pub country: Option<String>,

    /// Directory receiving the outputs (default: current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with `country` and `output_dir` defaults
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the application configuration, reading the config file if given
    pub fn into_config(self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let inputs = InputPaths {
            airlines: self.airlines,
            airports: self.airports,
            routes: self.routes,
        };

        Ok(AppConfig::new(self.verbose, inputs, self.question, self.graph_type)
            .with_file_config(file)
            .with_country(self.country)
            .with_output_dir(self.output_dir))
    }
}
