/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::flickr::ApiErrorCodes;
use crate::token_store::TokenStoreError;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Expected response missing: {0}")]
    ResponseMissing(&'static str),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),

    #[error("Token store error")]
    TokenStore(#[from] TokenStoreError),
}

impl FlickrError {
    /// Known Flickr error code for an `ApiResponse` error, if any
    pub fn api_error_code(&self) -> Option<ApiErrorCodes> {
        match self {
            FlickrError::ApiResponse(code, _) => ApiErrorCodes::try_from(*code).ok(),
            _ => None,
        }
    }
}
