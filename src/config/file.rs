//
//  createsend
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Thin file helpers used by [`Config`](super::Config). Write operations
//! create missing parent directories.

use std::path::Path;

use anyhow::Result;

/// Reads the contents of a configuration file.
pub fn read_config_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Writes content to a configuration file, creating parent directories.
///
/// # Notes
///
/// - Overwrites existing files without warning
/// - On Unix the file is restricted to the owner, since it may hold credentials
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Returns `true` when a regular file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
