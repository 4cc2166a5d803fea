/// Error code registry for route-manager
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Input errors
/// - 4000-4999: Output errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Input errors (3000-3999)
    pub const INPUT_GENERIC: u16 = 3000;
    pub const INPUT_NOT_FOUND: u16 = 3001;
    pub const INPUT_PERMISSION_DENIED: u16 = 3002;
    pub const INPUT_INVALID_YAML: u16 = 3003;
    pub const INPUT_INVALID_JSON: u16 = 3004;
    pub const INPUT_MISSING_KEY: u16 = 3005;
    pub const INPUT_NOT_A_LIST: u16 = 3006;
    pub const INPUT_INVALID_RECORD: u16 = 3007;

    // Output errors (4000-4999)
    pub const OUTPUT_CSV_WRITE: u16 = 4001;
    pub const OUTPUT_CHART_TEMPLATE: u16 = 4002;
    pub const OUTPUT_CHART_WRITE: u16 = 4003;
    pub const OUTPUT_DIRECTORY: u16 = 4004;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Configuration file is not valid TOML",
        ErrorCode::CONFIG_INVALID_VALUE => "Configuration value is invalid",

        ErrorCode::INPUT_GENERIC => "General input error",
        ErrorCode::INPUT_NOT_FOUND => "Input document not found",
        ErrorCode::INPUT_PERMISSION_DENIED => "Permission denied reading input document",
        ErrorCode::INPUT_INVALID_YAML => "Input document is not valid YAML",
        ErrorCode::INPUT_INVALID_JSON => "Input document is not valid JSON",
        ErrorCode::INPUT_MISSING_KEY => "Input document lacks its top-level key",
        ErrorCode::INPUT_NOT_A_LIST => "Top-level key does not hold a list of records",
        ErrorCode::INPUT_INVALID_RECORD => "A record could not be read",

        ErrorCode::OUTPUT_CSV_WRITE => "Failed to write CSV output",
        ErrorCode::OUTPUT_CHART_TEMPLATE => "Chart template failed to render",
        ErrorCode::OUTPUT_CHART_WRITE => "Failed to write chart output",
        ErrorCode::OUTPUT_DIRECTORY => "Output directory could not be created",

        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!((1000..2000).contains(&ErrorCode::CONFIG_INVALID_TOML));
        assert!((3000..4000).contains(&ErrorCode::INPUT_MISSING_KEY));
        assert!((4000..5000).contains(&ErrorCode::OUTPUT_CHART_WRITE));
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(
            describe_error_code(ErrorCode::INPUT_MISSING_KEY),
            "Input document lacks its top-level key"
        );
        assert_eq!(describe_error_code(4242), "Unknown error");
    }
}
