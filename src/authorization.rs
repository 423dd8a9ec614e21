/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Walks the user through authorizing the application.
//!
//! Once authorization succeeds the access token is saved so it can be used the next time.

use crate::flickr::{AccessToken, ApiClient, FlickrError, Permissions, RequestToken};
use crate::interaction::{NotificationKind, UserInteraction};
use crate::token_store;
use std::path::PathBuf;
use url::Url;

const CONFIRM_TITLE: &str = "Flickr Authorization Required";
const CONFIRM_MESSAGE: &str = "Click OK to open Flickr in your browser and authorize access.\n\
                               Then come back here and enter the authorization code.";
const CANCELLED_TITLE: &str = "Cannot Proceed";
const CANCELLED_MESSAGE: &str = "Flickr authorization cancelled.";
const FAILED_TITLE: &str = "Authorization Failed";
const FAILED_MESSAGE: &str = "Authorization token was null. Flickr authorization failed.";

/// How an authorization attempt ended, when it did not end in an error
#[derive(Debug)]
pub enum AuthorizationOutcome {
    /// The user authorized the application, the client signs with the new token
    Authorized(ApiClient),

    /// The user backed out
    Cancelled,

    /// The service returned no usable token; the client is unchanged and carries no access token
    TokenMissing(ApiClient),
}

#[derive(Debug)]
pub struct AuthorizationFlow {
    client: ApiClient,
    token_file: PathBuf,
}

impl AuthorizationFlow {
    /// `client` must not carry an access token yet
    pub fn new(client: ApiClient, token_file: impl Into<PathBuf>) -> Self {
        Self {
            client,
            token_file: token_file.into(),
        }
    }

    /// Fetches a request token and the URL where the user grants read access
    pub async fn request_authorization_url(&self) -> Result<(RequestToken, Url), FlickrError> {
        let request_token = self.client.request_token().await?;
        let url = self
            .client
            .authorization_url(&request_token, Permissions::Read)?;
        Ok((request_token, url))
    }

    pub async fn exchange_for_access_token(
        &self,
        request_token: &RequestToken,
        code: &str,
    ) -> Result<Option<AccessToken>, FlickrError> {
        self.client.access_token(request_token, code).await
    }

    /// Runs the whole conversation with the user
    pub async fn run(
        self,
        interaction: &mut dyn UserInteraction,
    ) -> Result<AuthorizationOutcome, FlickrError> {
        let (request_token, auth_url) = self.request_authorization_url().await?;
        log::debug!("Authorization url: {}", auth_url);

        if !interaction.confirm(CONFIRM_TITLE, CONFIRM_MESSAGE)? {
            return self.cancelled(interaction);
        }

        if let Err(err) = interaction.open_url(&auth_url) {
            log::warn!("Failed to open a browser: {}", err);
        }

        let prompt = format!(
            "Authorize at \n {}\nand then enter the validation code.",
            auth_url
        );
        let Some(code) = interaction.prompt(&prompt)? else {
            return self.cancelled(interaction);
        };

        match self.exchange_for_access_token(&request_token, &code).await? {
            Some(token) => {
                token_store::save(&self.token_file, &token)?;
                log::info!(
                    "Authorized as {}",
                    token.username.as_deref().unwrap_or("unknown user")
                );
                Ok(AuthorizationOutcome::Authorized(
                    self.client.with_access_token(token),
                ))
            }
            None => {
                interaction.notify(NotificationKind::Error, FAILED_TITLE, FAILED_MESSAGE)?;
                Ok(AuthorizationOutcome::TokenMissing(self.client))
            }
        }
    }

    fn cancelled(
        &self,
        interaction: &mut dyn UserInteraction,
    ) -> Result<AuthorizationOutcome, FlickrError> {
        interaction.notify(NotificationKind::Info, CANCELLED_TITLE, CANCELLED_MESSAGE)?;
        Ok(AuthorizationOutcome::Cancelled)
    }
}
