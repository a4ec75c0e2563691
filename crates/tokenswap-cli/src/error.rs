use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tokenswap_core::ValidationError),

    #[error(transparent)]
    Core(#[from] tokenswap_core::CoreError),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Core(tokenswap_core::CoreError::Validation(_)) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Core(_) | Self::Read { .. } | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_exit_with_two() {
        let error = CliError::from(tokenswap_core::ValidationError::EmptySymbol);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn strict_mode_exits_with_five() {
        let error = CliError::StrictModeViolation {
            warning_count: 1,
            error_count: 0,
        };
        assert_eq!(error.exit_code(), 5);
    }

    #[test]
    fn read_failures_name_the_path() {
        let error = CliError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.exit_code(), 10);
        assert!(error.to_string().contains("missing.json"));
    }
}
