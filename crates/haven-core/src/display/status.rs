//! Confirmation messages for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Used by operations whose outcome is a message rather than a resource,
/// such as importing or validating a catalog. Failures travel as errors and
/// never reach this type.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let status = OperationStatus::success("Imported 12 listings".to_string());
        assert_eq!(format!("{status}"), "Success: Imported 12 listings\n");
    }
}
