//! Machine-readable output for `--json`.

use serde::Serialize;

use crate::compiler::CompileError;

/// Result of one compilation, as emitted by `--json`.
///
/// Serializes as either
/// `{"ready": true, "command": "...", "tokens": [...]}` or
/// `{"ready": false, "reason": "missing_target", "message": "..."}`.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum JsonOutput {
    Ready {
        ready: bool,
        command: String,
        tokens: Vec<String>,
    },
    NotReady {
        ready: bool,
        reason: CompileError,
        message: String,
    },
}

impl JsonOutput {
    /// Build the document for a token list returned by
    /// [`compiler::tokens`](crate::compiler::tokens).
    #[must_use]
    pub fn from_result(result: Result<Vec<String>, CompileError>) -> Self {
        match result {
            Ok(tokens) => Self::Ready {
                ready: true,
                command: tokens.join(" "),
                tokens,
            },
            Err(err) => Self::NotReady {
                ready: false,
                reason: err,
                message: err.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}
