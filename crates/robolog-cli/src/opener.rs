// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Opening result files with the platform's default handler

use std::path::{Path, PathBuf};
use std::process::Command;

use robolog::{PathOpener, RobologError};

/// Opens paths by spawning the desktop's launcher
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Launcher command and the argument it should receive for `path`
    #[must_use]
    pub fn command_for(path: &Path) -> (&'static str, PathBuf) {
        if cfg!(target_os = "windows") {
            // explorer rejects forward slashes
            let native = path.to_string_lossy().replace('/', "\\");
            ("explorer", PathBuf::from(native))
        } else if cfg!(target_os = "macos") {
            ("open", path.to_path_buf())
        } else {
            ("xdg-open", path.to_path_buf())
        }
    }
}

impl PathOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), RobologError> {
        let (program, arg) = Self::command_for(path);
        tracing::debug!(program, path = %arg.display(), "spawning launcher");

        Command::new(program)
            .arg(&arg)
            .spawn()
            .map(drop)
            .map_err(|e| RobologError::OpenFailed {
                path: path.to_path_buf(),
                message: format!("{program}: {e}"),
            })
    }
}
