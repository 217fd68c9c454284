use thiserror::Error;

/// Rejected registry operations. All are local and recoverable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{kind} server '{name}' already registered")]
    DuplicateRegistration { kind: &'static str, name: String },

    #[error("{kind} server '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} server '{name}' already running")]
    AlreadyRunning { kind: &'static str, name: String },
}

impl RegistryError {
    /// Name of the server the operation targeted
    pub fn server_name(&self) -> &str {
        match self {
            Self::DuplicateRegistration { name, .. }
            | Self::NotFound { name, .. }
            | Self::AlreadyRunning { name, .. } => name,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateRegistration { .. } => "DUPLICATE_REGISTRATION",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyRunning { .. } => "ALREADY_RUNNING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_kind_and_name() {
        let err = RegistryError::AlreadyRunning {
            kind: "lsp",
            name: "gopls".to_string(),
        };
        assert_eq!(err.to_string(), "lsp server 'gopls' already running");
        assert_eq!(err.server_name(), "gopls");
        assert_eq!(err.error_code(), "ALREADY_RUNNING");
    }

    #[test]
    fn test_error_codes() {
        let dup = RegistryError::DuplicateRegistration {
            kind: "mcp",
            name: "fs".to_string(),
        };
        let missing = RegistryError::NotFound {
            kind: "mcp",
            name: "fs".to_string(),
        };
        assert_eq!(dup.error_code(), "DUPLICATE_REGISTRATION");
        assert_eq!(missing.error_code(), "NOT_FOUND");
        assert_eq!(missing.to_string(), "mcp server 'fs' not found");
    }
}
