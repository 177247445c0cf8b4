// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for robolog
//!
//! Structuring console output never fails; these errors only cover reading
//! input, serializing the tree, and activating detected links.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around log structuring
#[derive(Debug, Error)]
pub enum RobologError {
    /// Error reading console output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the structured tree
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A detected link points at a path that does not exist
    #[error("Path not found: {}", path.display())]
    PathNotFound {
        /// The path taken from the link line
        path: PathBuf,
    },

    /// The host could not open an existing path
    #[error("Failed to open {}: {message}", path.display())]
    OpenFailed {
        /// The path that was being opened
        path: PathBuf,
        /// Description of the failure
        message: String,
    },
}
