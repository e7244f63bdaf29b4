//! Error handling utilities for MCP server

use haven_core::HavenError;
use rmcp::ErrorData;

/// Helper to convert marketplace errors to MCP errors.
///
/// Errors caused by the request itself (bad input, empty ranges, capacity,
/// unknown listings) are reported as invalid parameters so the client can
/// correct the call; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &HavenError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_rejected_request() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_rejections_are_invalid_params() {
        let error = HavenError::CapacityExceeded {
            requested: 9,
            capacity: 4,
        };

        let mcp_error = to_mcp_error("Failed to quote stay", &error);

        assert_eq!(mcp_error.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp_error.message.starts_with("Failed to quote stay: Capacity exceeded"));
    }

    #[test]
    fn test_environment_errors_are_internal() {
        let error = HavenError::XdgDirectory("no home directory".to_string());

        let mcp_error = to_mcp_error("Failed to load catalog", &error);

        assert_eq!(mcp_error.code, ErrorCode::INTERNAL_ERROR);
    }
}
