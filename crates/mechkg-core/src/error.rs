//! Error types and exit codes for mechkg
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (no path found, IO, search budget)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph, unknown node, constructor violations)

use std::path::PathBuf;

/// Exit codes for the mechkg CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph data or unknown nodes (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during mechkg operations
#[derive(Debug)]
pub enum MechError {
    // Usage errors (exit code 2)
    UnknownFormat(String),

    UsageError(String),

    // Data errors (exit code 3)
    InvalidNodeId { id: String, expected: String },

    InvalidWeight(f64),

    SelfLoop(String),

    DuplicateId(String),

    UnknownNode(String),

    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    NoPathFound {
        source: String,
        target: String,
        max_hops: u32,
    },

    BudgetExhausted(usize),

    Io(std::io::Error),

    Json(serde_json::Error),

    Other(String),
}

// Manual Display/Error/From impls instead of `#[derive(thiserror::Error)]`:
// the derive treats the `NoPathFound.source` field as the error source and
// requires it to implement `std::error::Error`, which `String` does not.
impl std::fmt::Display for MechError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MechError::UnknownFormat(fmt) => {
                write!(f, "unknown format: {fmt} (expected: human or json)")
            }
            MechError::UsageError(msg) => write!(f, "{msg}"),
            MechError::InvalidNodeId { id, expected } => write!(
                f,
                "node id must be <type>:<slug> with prefix matching type '{expected}', got '{id}'"
            ),
            MechError::InvalidWeight(w) => {
                write!(f, "edge weight must be between 0.01 and 0.99, got {w}")
            }
            MechError::SelfLoop(id) => write!(f, "self-loop edges are not allowed: {id}"),
            MechError::DuplicateId(id) => write!(f, "duplicate node id: {id}"),
            MechError::UnknownNode(id) => write!(f, "node not found: {id}"),
            MechError::InvalidGraphFile { path, reason } => {
                write!(f, "invalid graph file {path:?}: {reason}")
            }
            MechError::NoPathFound {
                source,
                target,
                max_hops,
            } => write!(
                f,
                "no path found from {source} to {target} within max_hops = {max_hops}"
            ),
            MechError::BudgetExhausted(n) => {
                write!(f, "search budget exhausted after {n} frontier expansions")
            }
            MechError::Io(e) => write!(f, "IO error: {e}"),
            MechError::Json(e) => write!(f, "JSON error: {e}"),
            MechError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MechError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MechError::Io(e) => Some(e),
            MechError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MechError {
    fn from(err: std::io::Error) -> Self {
        MechError::Io(err)
    }
}

impl From<serde_json::Error> for MechError {
    fn from(err: serde_json::Error) -> Self {
        MechError::Json(err)
    }
}

impl MechError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MechError::UnknownFormat(_) | MechError::UsageError(_) => ExitCode::Usage,

            MechError::InvalidNodeId { .. }
            | MechError::InvalidWeight(_)
            | MechError::SelfLoop(_)
            | MechError::DuplicateId(_)
            | MechError::UnknownNode(_)
            | MechError::InvalidGraphFile { .. } => ExitCode::Data,

            MechError::NoPathFound { .. }
            | MechError::BudgetExhausted(_)
            | MechError::Io(_)
            | MechError::Json(_)
            | MechError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable machine-readable error type tag for JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            MechError::UnknownFormat(_) => "unknown_format",
            MechError::UsageError(_) => "usage_error",
            MechError::InvalidNodeId { .. } => "invalid_node_id",
            MechError::InvalidWeight(_) => "invalid_weight",
            MechError::SelfLoop(_) => "self_loop",
            MechError::DuplicateId(_) => "duplicate_id",
            MechError::UnknownNode(_) => "unknown_node",
            MechError::InvalidGraphFile { .. } => "invalid_graph_file",
            MechError::NoPathFound { .. } => "no_path_found",
            MechError::BudgetExhausted(_) => "budget_exhausted",
            MechError::Io(_) => "io_error",
            MechError::Json(_) => "json_error",
            MechError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mechkg operations
pub type Result<T> = std::result::Result<T, MechError>;
