//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: demo error (unknown demo, bad dimensions, bad palette data)
//! - 11: I/O error (snapshot write)
//! - 12: input error (bad palette name, bad JSON params)
//! - 13: serialization error
//! - 14: runtime fault (the demo loop failed mid-run)

use phosphor_core::DemoError;
use phosphor_runtime::RuntimeError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A demo-level error (unknown demo, bad dimensions).
    Demo(DemoError),
    /// An I/O error (snapshot write).
    Io(String),
    /// A user input error (bad palette name, bad JSON params).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// A fault inside the demo loop.
    Runtime(RuntimeError),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Demo(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Runtime(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Demo(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl From<DemoError> for CliError {
    fn from(e: DemoError) -> Self {
        match e {
            DemoError::Io(msg) => CliError::Io(msg),
            other => CliError::Demo(other),
        }
    }
}

impl From<RuntimeError> for CliError {
    fn from(e: RuntimeError) -> Self {
        CliError::Runtime(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_error_exit_code_is_10() {
        let err = CliError::Demo(DemoError::UnknownDemo("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad palette".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn runtime_fault_exit_code_is_14() {
        let err = CliError::Runtime(RuntimeError::Fault(DemoError::Io("lost surface".into())));
        assert_eq!(err.exit_code(), 14);
        assert!(err.to_string().contains("lost surface"));
    }

    #[test]
    fn from_demo_error_io_routes_to_cli_io() {
        let demo_err = DemoError::Io("disk full".into());
        let cli_err = CliError::from(demo_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_demo_error_non_io_routes_to_cli_demo() {
        let demo_err = DemoError::UnknownDemo("xyz".into());
        let cli_err = CliError::from(demo_err);
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
