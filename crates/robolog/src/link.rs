// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output file links
//!
//! At the end of a run the console prints where it wrote `output.xml`, the
//! log and the report. Those lines are shown as links the user can open.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RobologError;

static LINK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Output|Log|Report):\s+(.*)$").unwrap());

/// A console line pointing at a result file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// `Output`, `Log` or `Report`
    pub label: String,
    /// Path as printed
    pub path: String,
}

/// Host capability for opening a file or folder
pub trait PathOpener {
    /// Open `path` with the platform's default handler
    ///
    /// # Errors
    ///
    /// Returns `RobologError::OpenFailed` if the handler could not be started.
    fn open(&self, path: &Path) -> Result<(), RobologError>;
}

impl Link {
    /// Detect a link in a console line
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        let caps = LINK_LINE.captures(line.trim_end())?;
        Some(Self {
            label: caps[1].to_string(),
            path: caps[2].to_string(),
        })
    }

    /// Open the linked path through `opener`
    ///
    /// # Errors
    ///
    /// Returns `RobologError::PathNotFound` if the path does not exist, or
    /// whatever error the opener reports.
    pub fn activate(&self, opener: &dyn PathOpener) -> Result<(), RobologError> {
        let path = Path::new(self.path.trim());
        if !path.exists() {
            return Err(RobologError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::info!(label = %self.label, path = %path.display(), "opening link");
        opener.open(path)
    }
}
