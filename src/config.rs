/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::Endpoints;
use crate::token_store::{self, TokenStoreError};
use std::path::PathBuf;

/* Your Flickr API key, see https://www.flickr.com/services/apps/create/apply/ */
pub const FLICKR_API_KEY: &str = "YOUR_API_KEY";

/* Your Flickr API secret */
pub const FLICKR_API_SECRET: &str = "YOUR_API_SECRET";

/// Everything the runner needs to know up front
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_secret: String,
    pub token_file: PathBuf,
    pub endpoints: Endpoints,
}

impl Config {
    /// Built-in key/secret with the token cached at `<home>/app_auth_token`.
    ///
    /// `FLICKR_API_KEY`, `FLICKR_API_SECRET` and `FLICKR_AUTH_CACHE` (also read from a `.env`
    /// file) take precedence.
    pub fn from_env() -> Result<Self, TokenStoreError> {
        dotenvy::dotenv().ok();
        let token_file = match std::env::var_os("FLICKR_AUTH_CACHE") {
            Some(path) => PathBuf::from(path),
            None => token_store::default_path()?,
        };
        Ok(Self {
            api_key: std::env::var("FLICKR_API_KEY").unwrap_or_else(|_| FLICKR_API_KEY.into()),
            api_secret: std::env::var("FLICKR_API_SECRET")
                .unwrap_or_else(|_| FLICKR_API_SECRET.into()),
            token_file,
            endpoints: Endpoints::default(),
        })
    }

    pub fn has_placeholder_keys(&self) -> bool {
        self.api_key == FLICKR_API_KEY || self.api_secret == FLICKR_API_SECRET
    }
}
