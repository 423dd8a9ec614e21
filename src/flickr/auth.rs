/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::errors::FlickrError;
use crate::flickr::{ApiClient, Permissions};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

// Out-of-band callback: Flickr shows the verifier to the user instead of redirecting
const OOB_CALLBACK: &str = "oob";

/// Temporary credentials used while the user authorizes the application.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestToken {
    pub token: String,
    pub secret: String,
}

/// Long lived credentials returned once the user has authorized the application.
///
/// See [Flickr OAuth docs](https://www.flickr.com/services/api/auth.oauth.html)
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,

    pub secret: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
}

impl std::fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestToken")
            .field("token", &self.token)
            .field("secret", &"xxx")
            .finish()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"xxx")
            .field("secret", &"xxx")
            .field("nsid", &self.nsid)
            .field("username", &self.username)
            .field("fullname", &self.fullname)
            .finish()
    }
}

impl ApiClient {
    /// Obtains a request token from the service
    pub async fn request_token(&self) -> Result<RequestToken, FlickrError> {
        let req_url = Url::parse(&self.endpoints().request_token)?;
        let header = self.consumer_header().param("oauth_callback", OOB_CALLBACK);
        let resp = self.signed_get(req_url, &header).await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            log::error!("Flickr request token failed: status={}, body={}", status, body);
            return Err(FlickrError::Auth(format!(
                "request token rejected with {}: {}",
                status, body
            )));
        }

        let mut params = parse_form(&body);
        match (params.remove("oauth_token"), params.remove("oauth_token_secret")) {
            (Some(token), Some(secret)) => Ok(RequestToken { token, secret }),
            _ => Err(FlickrError::ResponseMissing("oauth_token")),
        }
    }

    /// URL the user visits to grant `perms` to this application
    pub fn authorization_url(
        &self,
        request_token: &RequestToken,
        perms: Permissions,
    ) -> Result<Url, FlickrError> {
        let perms: &'static str = perms.into();
        Ok(Url::parse_with_params(
            &self.endpoints().authorize,
            &[("oauth_token", request_token.token.as_str()), ("perms", perms)],
        )?)
    }

    /// Exchanges an authorized request token and the user supplied verifier for an access token.
    ///
    /// Returns `Ok(None)` when the service answers without a token, or rejects the
    /// request token/verifier pair.
    pub async fn access_token(
        &self,
        request_token: &RequestToken,
        verifier: &str,
    ) -> Result<Option<AccessToken>, FlickrError> {
        let req_url = Url::parse(&self.endpoints().access_token)?;
        let header = self
            .consumer_header()
            .token(&request_token.token, &request_token.secret)
            .param("oauth_verifier", verifier);
        let resp = self.signed_get(req_url, &header).await?;

        let status = resp.status();
        let body = resp.text().await?;
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            log::warn!("Flickr rejected the verification code: {}", body);
            return Ok(None);
        }
        if !status.is_success() {
            log::error!("Flickr access token failed: status={}, body={}", status, body);
            return Err(FlickrError::Auth(format!(
                "access token request failed with {}: {}",
                status, body
            )));
        }

        let mut params = parse_form(&body);
        let (Some(token), Some(secret)) =
            (params.remove("oauth_token"), params.remove("oauth_token_secret"))
        else {
            return Ok(None);
        };
        Ok(Some(AccessToken {
            token,
            secret,
            nsid: params.remove("user_nsid"),
            username: params.remove("username"),
            fullname: params.remove("fullname"),
        }))
    }
}

// Parses oauth_token=xxx&oauth_token_secret=yyy bodies, ignoring empty values
fn parse_form(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .filter(|(_, v)| !v.is_empty())
        .collect()
}
