/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::auth::AccessToken;
use crate::flickr::errors::FlickrError;
use crate::flickr::oauth::OAuthHeader;
use num_enum::TryFromPrimitive;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

// Root Flickr REST API
pub const REST_URL: &str = "https://api.flickr.com/services/rest";

// OAuth endpoints
pub const REQUEST_TOKEN_URL: &str = "https://www.flickr.com/services/oauth/request_token";
pub const AUTHORIZE_URL: &str = "https://www.flickr.com/services/oauth/authorize";
pub const ACCESS_TOKEN_URL: &str = "https://www.flickr.com/services/oauth/access_token";

// Public photo pages
pub const PHOTO_PAGE_ORIGIN: &str = "https://www.flickr.com/photos/";

/// URLs the client talks to. Defaults to the production Flickr service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub rest: String,
    pub request_token: String,
    pub authorize: String,
    pub access_token: String,
    pub photo_page: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest: REST_URL.into(),
            request_token: REQUEST_TOKEN_URL.into(),
            authorize: AUTHORIZE_URL.into(),
            access_token: ACCESS_TOKEN_URL.into(),
            photo_page: PHOTO_PAGE_ORIGIN.into(),
        }
    }
}

impl Endpoints {
    /// Same paths as production but rooted at `origin`, e.g. a local mock server
    pub fn with_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            rest: format!("{}/services/rest", origin),
            request_token: format!("{}/services/oauth/request_token", origin),
            authorize: format!("{}/services/oauth/authorize", origin),
            access_token: format!("{}/services/oauth/access_token", origin),
            photo_page: format!("{}/photos/", origin),
        }
    }
}

/// Consumer key/secret plus the access token once the user has authorized the application.
#[derive(Default, Clone)]
pub struct Creds {
    consumer_api_key: String,
    consumer_api_secret: String,
    access_token: Option<AccessToken>,
}

impl Creds {
    pub fn from_tokens(
        consumer_api_key: &str,
        consumer_api_secret: &str,
        access_token: Option<AccessToken>,
    ) -> Self {
        Self {
            consumer_api_key: consumer_api_key.into(),
            consumer_api_secret: consumer_api_secret.into(),
            access_token,
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_api_key", &"xxx")
            .field("consumer_api_secret", &"xxx")
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// Directly communicates with the API.
#[derive(Default, Clone)]
pub struct ApiClient {
    creds: Creds,
    endpoints: Endpoints,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client talking to the production endpoints
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            endpoints: Endpoints::default(),
            https_client: reqwest::Client::new(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Returns a client that signs every request with `token`
    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.creds.access_token = Some(token);
        self
    }

    /// Access token requests are signed with, if any
    pub fn credentials(&self) -> Option<&AccessToken> {
        self.creds.access_token.as_ref()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // Header signed with the consumer pair and, when present, the access token
    pub(crate) fn oauth_header(&self) -> OAuthHeader<'_> {
        let header = OAuthHeader::new(
            &self.creds.consumer_api_key,
            &self.creds.consumer_api_secret,
        );
        match &self.creds.access_token {
            Some(token) => header.token(&token.token, &token.secret),
            None => header,
        }
    }

    pub(crate) fn consumer_header(&self) -> OAuthHeader<'_> {
        OAuthHeader::new(
            &self.creds.consumer_api_key,
            &self.creds.consumer_api_secret,
        )
    }

    // Sends a GET request signed by `header`
    pub(crate) async fn signed_get(
        &self,
        url: Url,
        header: &OAuthHeader<'_>,
    ) -> Result<reqwest::Response, FlickrError> {
        let authorization = header.to_header("GET", &url)?;
        log::debug!("GET {}", url);
        Ok(self
            .https_client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .send()
            .await?)
    }

    /// Calls a REST API method and deserializes the `stat: ok` payload
    pub async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<T, FlickrError> {
        let mut all_params: Vec<(&str, &str)> = vec![
            ("method", method),
            ("format", "json"),
            ("nojsoncallback", "1"),
        ];
        if let Some(params) = params {
            all_params.extend_from_slice(params);
        }
        let req_url = Url::parse_with_params(&self.endpoints.rest, &all_params)?;

        let resp = self
            .signed_get(req_url, &self.oauth_header())
            .await?
            .error_for_status()?;

        let body: serde_json::Value = resp.json().await?;
        let status = ResponseStatus::deserialize(&body).map_err(|err| {
            log::error!("Api Malformed Err {:?}", err);
            FlickrError::ApiResponseMalformed(err)
        })?;
        if !status.is_ok() {
            return Err(FlickrError::ApiResponse(
                status.code.unwrap_or_default(),
                status.message.unwrap_or_default(),
            ));
        }
        serde_json::from_value::<T>(body).map_err(|err| {
            log::error!("Api Malformed Err {:?}", err);
            FlickrError::ApiResponseMalformed(err)
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

/// This can be filter types as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Error codes shared by every Flickr API method
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    InvalidAuthToken = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcMethodCall = 115,
    BadUrlFound = 116,
}

// Envelope present on every REST response
#[derive(Deserialize, Debug)]
struct ResponseStatus {
    stat: String,

    #[serde(default)]
    code: Option<u32>,

    #[serde(default)]
    message: Option<String>,
}

impl ResponseStatus {
    fn is_ok(&self) -> bool {
        self.stat == "ok"
    }
}
