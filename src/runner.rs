/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::authorization::{AuthorizationFlow, AuthorizationOutcome};
use crate::config::Config;
use crate::flickr::{
    ApiClient, ApiErrorCodes, Creds, FlickrError, NUM_TO_GET, PhotoExtras, PhotoSummary, Photos,
};
use crate::interaction::UserInteraction;
use crate::token_store;
use std::error::Error;
use std::io::Write;

const EXTRAS: [PhotoExtras; 2] = [PhotoExtras::Tags, PhotoExtras::DateTaken];

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The photo fetch was attempted, successfully or not
    Completed,
    /// The user cancelled authorization
    Cancelled,
    /// Authorization ended in an error
    AuthorizationFailed,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Completed | RunStatus::Cancelled => 0,
            RunStatus::AuthorizationFailed => 1,
        }
    }
}

/// Loads or obtains an access token and then lists the most recent photos.
///
/// Photo listings and progress messages are written to `out`.
pub struct AuthorizedClientRunner<I, W> {
    config: Config,
    interaction: I,
    out: W,
}

impl<I: UserInteraction, W: Write> AuthorizedClientRunner<I, W> {
    pub fn new(config: Config, interaction: I, out: W) -> Self {
        Self {
            config,
            interaction,
            out,
        }
    }

    pub fn into_parts(self) -> (I, W) {
        (self.interaction, self.out)
    }

    pub async fn run(&mut self) -> RunStatus {
        let client = match self.authorized_client().await {
            Ok(client) => client,
            Err(status) => return status,
        };
        self.fetch_recent(&client).await;
        RunStatus::Completed
    }

    // Cached token first, otherwise ask the user
    async fn authorized_client(&mut self) -> Result<ApiClient, RunStatus> {
        let client = ApiClient::new(Creds::from_tokens(
            &self.config.api_key,
            &self.config.api_secret,
            None,
        ))
        .with_endpoints(self.config.endpoints.clone());

        let err = match token_store::load(&self.config.token_file) {
            Ok(token) => {
                log::debug!("Loaded auth token from {}", self.config.token_file.display());
                return Ok(client.with_access_token(token));
            }
            Err(err) => err,
        };
        log::info!("{}", err);
        self.say("Could not load auth token, requesting authorization...");

        let flow = AuthorizationFlow::new(client, self.config.token_file.clone());
        match flow.run(&mut self.interaction).await {
            Ok(AuthorizationOutcome::Authorized(client)) => Ok(client),
            Ok(AuthorizationOutcome::TokenMissing(client)) => {
                log::warn!("No access token was issued, continuing with an unauthenticated client");
                Ok(client)
            }
            Ok(AuthorizationOutcome::Cancelled) => Err(RunStatus::Cancelled),
            Err(err) => {
                self.say("Authorization failed.");
                log_error_chain(&err);
                Err(RunStatus::AuthorizationFailed)
            }
        }
    }

    async fn fetch_recent(&mut self, client: &ApiClient) {
        match Photos::recent(client, &EXTRAS, NUM_TO_GET, 1).await {
            Ok(photos) => {
                self.say(&format!("Got {} recent photos!", photos.photos.len()));
                for photo in &photos.photos {
                    self.say(&render_photo(photo, &client.endpoints().photo_page));
                }
            }
            Err(err) => {
                self.say("Error getting recent photos.");
                log_error_chain(&err);
                if err.api_error_code() == Some(ApiErrorCodes::InvalidAuthToken) {
                    log::warn!(
                        "The saved token was rejected, delete {} to authorize again",
                        self.config.token_file.display()
                    );
                }
            }
        }
    }

    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{}", line) {
            log::error!("Failed to write output: {}", err);
        }
    }
}

/// One console line per photo, linking to its page under `photo_page`
pub fn render_photo(photo: &PhotoSummary, photo_page: &str) -> String {
    let taken = photo
        .date_taken
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    format!(
        "Id {}: \"{}\", taken on {} with tags [{}] @ {}",
        photo.id,
        photo.title,
        taken,
        photo.tags.join(" "),
        photo.page_url(photo_page)
    )
}

fn log_error_chain(err: &FlickrError) {
    log::error!("{}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        log::error!("  caused by: {}", cause);
        source = cause.source();
    }
}
