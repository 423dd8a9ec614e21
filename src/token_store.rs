/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Persistence of the access token between runs.
//!
//! The token is kept as a small JSON document. Nothing checks whether a stored token is still
//! authorized; that only shows up when an API call fails.

use crate::flickr::AccessToken;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the cached token, relative to the home directory
pub const TOKEN_FILE_NAME: &str = "app_auth_token";

/// Reasons a stored token could not be loaded
#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("token file {0} does not exist")]
    NotFound(PathBuf),

    #[error("token file could not be read")]
    Io(#[from] io::Error),

    #[error("token file is malformed")]
    Parse(#[from] serde_json::Error),

    #[error("home directory could not be determined")]
    NoHomeDir,
}

/// `<home>/app_auth_token`
pub fn default_path() -> Result<PathBuf, TokenStoreError> {
    dirs::home_dir()
        .map(|home| home.join(TOKEN_FILE_NAME))
        .ok_or(TokenStoreError::NoHomeDir)
}

/// Reads a previously saved token
pub fn load(path: &Path) -> Result<AccessToken, TokenStoreError> {
    let json = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TokenStoreError::NotFound(path.to_path_buf()),
        _ => TokenStoreError::Io(err),
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Writes `token` to `path`, replacing whatever was there
pub fn save(path: &Path, token: &AccessToken) -> Result<(), TokenStoreError> {
    let json = serde_json::to_string_pretty(token)?;
    fs::write(path, json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).ok();
        }
    }

    log::info!("Token saved to {}", path.display());
    Ok(())
}
