/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr Recent
//!
//! Example client showing how to authorize a user for your application with Flickr and get a
//! list of recent photos.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - OAuth 1.0a request signing (HMAC-SHA1)
//! - Interactive out-of-band authorization with the access token cached on disk
//! - Recent photos listing (Read only)
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//! (<https://www.flickr.com/services/apps/create/apply/>)
//!
//! ```rust,no_run
//! use flickr_recent::flickr::{AccessToken, ApiClient, Creds, PhotoExtras, Photos};
//!
//! async fn print_recent(api_key: &str, api_secret: &str, token: AccessToken) -> anyhow::Result<()> {
//!     // The API key/secret is obtained from your Flickr account
//!     // The access token is obtained via the OAuth1 process, see `AuthorizationFlow`
//!     let client = ApiClient::new(Creds::from_tokens(api_key, api_secret, Some(token)));
//!
//!     let photos = Photos::recent(&client, &[PhotoExtras::Tags], 10, 1).await?;
//!     for photo in photos.photos {
//!         println!("{} {}", photo.id, photo.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod authorization;
pub mod config;
pub mod flickr;
pub mod interaction;
pub mod runner;
pub mod token_store;

pub use authorization::{AuthorizationFlow, AuthorizationOutcome};
pub use config::Config;
pub use interaction::{ConsoleInteraction, NotificationKind, UserInteraction};
pub use runner::{AuthorizedClientRunner, RunStatus};
