use clap::Parser;
use route_manager::app::{handle_fatal_error, initialize_app, run_analysis};
use route_manager::cli::Cli;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            route_manager::app::logging::init_tracing(verbose, "info");
            handle_fatal_error(e.into(), verbose)
        }
    };

    if let Err(e) = initialize_app(&config) {
        handle_fatal_error(e, verbose);
    }

    match run_analysis(&config) {
        Ok(outcome) => {
            debug!("Run finished: {:?}", outcome.question);
            if let Some(path) = &outcome.csv_path {
                info!("Results written to {}", path.display());
            }
        }
        Err(e) => handle_fatal_error(e, verbose),
    }
}
