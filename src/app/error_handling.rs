//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, RouteError};
use tracing::error;

/// Exit code for failures that carry no [`RouteError`]
pub const GENERAL_ERROR: i32 = 1;

/// Decide the exit code and the lines to print for a fatal error
///
/// - For `RouteError`: the user message always; in verbose mode the code's
///   description and the full chain
/// - For other errors: the error message, and its chain in verbose mode
pub fn describe_fatal_error(error: &anyhow::Error, verbose: u8) -> (i32, Vec<String>) {
    let mut lines = Vec::new();

    let route_err = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<RouteError>());

    let exit_code = if let Some(route_err) = route_err {
        lines.push(format!("Error: {}", route_err.user_message()));
        if verbose >= 1 {
            let code = route_err.code();
            lines.push(format!("Error code E{:04}: {}", code, describe_error_code(code)));
            lines.push(format!("\nContext Chain:\n{:#}", error));
            lines.push(route_err.developer_message());
        }
        route_err.exit_code()
    } else {
        lines.push(format!("Error: {error}"));
        if verbose >= 1 {
            lines.push("\nError chain:".to_string());
            for (i, cause) in error.chain().enumerate() {
                lines.push(format!("  {}: {}", i, cause));
            }
        }
        GENERAL_ERROR
    };

    (exit_code, lines)
}

/// Handle fatal errors and exit with appropriate status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let (exit_code, lines) = describe_fatal_error(&error, verbose);
    for line in lines {
        eprintln!("{}", line);
    }

    std::process::exit(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use anyhow::Context;

    #[test]
    fn test_route_error_exit_code_survives_context() {
        let result: anyhow::Result<()> = Err(RouteError::malformed_input(
            ErrorCode::INPUT_MISSING_KEY,
            "airlines",
            "missing top-level key 'airlines'",
        )
        .into());
        let error = result.context("Failed to load input documents").unwrap_err();

        let (code, lines) = describe_fatal_error(&error, 0);
        assert_eq!(code, 3);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("airlines document is malformed"));
    }

    #[test]
    fn test_verbose_route_error_describes_code() {
        let error: anyhow::Error = RouteError::config_with_code(
            ErrorCode::CONFIG_INVALID_TOML,
            "invalid TOML",
        )
        .into();

        let (code, lines) = describe_fatal_error(&error, 1);
        assert_eq!(code, 2);
        assert_eq!(
            lines[1],
            "Error code E1002: Configuration file is not valid TOML"
        );
    }

    #[test]
    fn test_plain_error_is_general_failure() {
        let error = anyhow::anyhow!("something odd");
        let (code, lines) = describe_fatal_error(&error, 1);

        assert_eq!(code, GENERAL_ERROR);
        assert_eq!(lines[0], "Error: something odd");
        assert!(lines.iter().any(|l| l.contains("0: something odd")));
    }
}
