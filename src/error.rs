// src/error.rs
// Typed error taxonomy shared across the crate

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Predefined, comparable failure conditions carried as the root cause
/// of arithmetic errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot calculate square root of negative number")]
    NegativeSquareRoot,

    #[error("invalid input provided")]
    InvalidInput,

    #[error("invalid operation")]
    InvalidOperation,

    #[error("value out of allowed range")]
    OutOfRange,
}

/// Coarse classification of a [`CalcError`], for callers that branch on
/// the kind of failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Calculation,
    File,
}

/// Process exit codes used by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Error = 1,
    InvalidInput = 2,
    FileError = 3,
    ConfigError = 4,
}

/// Main error type for the tally library.
///
/// Every error surfaced to a caller is exactly one of three kinds:
/// input validation, arithmetic failure, or file I/O. Callers react per
/// kind (re-prompt, report and continue, log and fall back) instead of
/// matching on message text.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("validation error for {field}='{value}': {message}")]
    Validation {
        field: String,
        value: String,
        message: String,
    },

    #[error("calculation error in {operation}: {reason}")]
    Calculation {
        operation: String,
        operands: Vec<f64>,
        reason: String,
        #[source]
        cause: Option<MathError>,
    },

    #[error("file error during {} on '{}': {}", .operation, .path.display(), .source)]
    File {
        path: PathBuf,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Convenience type alias for Result using CalcError.
pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CalcError::Validation {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn calculation(
        operation: impl Into<String>,
        operands: &[f64],
        reason: impl Into<String>,
        cause: Option<MathError>,
    ) -> Self {
        CalcError::Calculation {
            operation: operation.into(),
            operands: operands.to_vec(),
            reason: reason.into(),
            cause,
        }
    }

    pub fn file(
        path: impl AsRef<Path>,
        operation: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        CalcError::File {
            path: path.as_ref().to_path_buf(),
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Validation { .. } => ErrorKind::Validation,
            CalcError::Calculation { .. } => ErrorKind::Calculation,
            CalcError::File { .. } => ErrorKind::File,
        }
    }

    /// The innermost error, when one is attached.
    pub fn root_cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Validation { .. } => None,
            CalcError::Calculation { cause, .. } => cause.as_ref().map(|c| c as _),
            CalcError::File { source, .. } => Some(source.as_ref() as _),
        }
    }

    /// The sentinel math error behind a calculation failure, if any.
    pub fn math_cause(&self) -> Option<MathError> {
        match self {
            CalcError::Calculation { cause, .. } => *cause,
            _ => None,
        }
    }

    /// The process exit code this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::Validation => ExitCode::InvalidInput,
            ErrorKind::Calculation => ExitCode::Error,
            ErrorKind::File => ExitCode::FileError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = CalcError::validation("precision", "42", "must be between 0 and 15");
        assert_eq!(
            err.to_string(),
            "validation error for precision='42': must be between 0 and 15"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_calculation_error_display() {
        let err = CalcError::calculation(
            "Division",
            &[10.0, 0.0],
            "division by zero",
            Some(MathError::DivisionByZero),
        );
        assert_eq!(err.to_string(), "calculation error in Division: division by zero");
        assert_eq!(err.kind(), ErrorKind::Calculation);
    }

    #[test]
    fn test_file_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CalcError::file("/tmp/history.json", "read", io);
        assert!(err.to_string().contains("file error during read"));
        assert!(err.to_string().contains("/tmp/history.json"));
        assert_eq!(err.kind(), ErrorKind::File);
    }

    #[test]
    fn test_math_cause() {
        let err = CalcError::calculation(
            "Modulo",
            &[5.0, 0.0],
            "division by zero in modulo operation",
            Some(MathError::DivisionByZero),
        );
        assert_eq!(err.math_cause(), Some(MathError::DivisionByZero));

        let err = CalcError::calculation("Division", &[1e308, 1e-308], "result is infinity", None);
        assert_eq!(err.math_cause(), None);

        let err = CalcError::validation("operands", "none", "at least one operand is required");
        assert_eq!(err.math_cause(), None);
    }

    #[test]
    fn test_root_cause() {
        let err = CalcError::calculation(
            "SquareRoot",
            &[-4.0],
            "cannot calculate square root of negative number",
            Some(MathError::NegativeSquareRoot),
        );
        let cause = err.root_cause().expect("cause should be present");
        assert_eq!(cause.to_string(), "cannot calculate square root of negative number");

        let err = CalcError::validation("number", "", "cannot be empty");
        assert!(err.root_cause().is_none());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        let err = CalcError::calculation(
            "Factorial",
            &[200.0],
            "factorial result would overflow",
            Some(MathError::OutOfRange),
        );
        let source = err.source().expect("source should be present");
        assert_eq!(source.to_string(), "value out of allowed range");
    }

    #[test]
    fn test_exit_codes() {
        let err = CalcError::validation("number", "abc", "not a valid number");
        assert_eq!(err.exit_code(), ExitCode::InvalidInput);
        assert_eq!(err.exit_code() as i32, 2);

        let err = CalcError::calculation("Division", &[1.0, 0.0], "division by zero", None);
        assert_eq!(err.exit_code(), ExitCode::Error);
        assert_eq!(err.exit_code() as i32, 1);

        let io = std::io::Error::other("disk full");
        let err = CalcError::file("/tmp/config.json", "write", io);
        assert_eq!(err.exit_code(), ExitCode::FileError);
        assert_eq!(err.exit_code() as i32, 3);

        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::ConfigError as i32, 4);
    }
}
