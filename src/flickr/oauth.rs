/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! OAuth 1.0a request signing (HMAC-SHA1) per RFC 5849.

use crate::flickr::errors::FlickrError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

type HmacSha1 = Hmac<Sha1>;

/// Builds the `Authorization: OAuth ...` header value for a single request.
///
/// A fresh nonce and timestamp are generated on creation.
#[derive(Debug, Clone)]
pub struct OAuthHeader<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
    token: Option<(&'a str, &'a str)>,
    extra: Vec<(&'static str, &'a str)>,
    nonce: String,
    timestamp: String,
}

impl<'a> OAuthHeader<'a> {
    pub fn new(consumer_key: &'a str, consumer_secret: &'a str) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            token: None,
            extra: Vec::new(),
            nonce: generate_nonce(),
            timestamp: chrono::Utc::now().timestamp().to_string(),
        }
    }

    /// Signs with the given token/secret pair
    pub fn token(mut self, token: &'a str, token_secret: &'a str) -> Self {
        self.token = Some((token, token_secret));
        self
    }

    /// Adds a protocol parameter such as `oauth_callback` or `oauth_verifier`
    pub fn param(mut self, key: &'static str, value: &'a str) -> Self {
        self.extra.push((key, value));
        self
    }

    pub fn nonce_and_timestamp(mut self, nonce: &str, timestamp: &str) -> Self {
        self.nonce = nonce.into();
        self.timestamp = timestamp.into();
        self
    }

    fn oauth_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.to_string()),
            ("oauth_nonce".to_string(), self.nonce.clone()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), self.timestamp.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];
        if let Some((token, _)) = self.token {
            params.push(("oauth_token".to_string(), token.to_string()));
        }
        for (k, v) in &self.extra {
            params.push((k.to_string(), v.to_string()));
        }
        params
    }

    /// Computes the base64 HMAC-SHA1 signature for `method` and `url`.
    ///
    /// Query parameters already on `url` take part in the signature.
    pub fn signature(&self, method: &str, url: &Url) -> Result<String, FlickrError> {
        let base = signature_base_string(method, url, &self.oauth_params());
        let token_secret = self.token.map(|(_, secret)| secret);
        sign(&base, self.consumer_secret, token_secret)
    }

    /// Full header value including the `OAuth ` prefix
    pub fn to_header(&self, method: &str, url: &Url) -> Result<String, FlickrError> {
        let signature = self.signature(method, url)?;
        let mut params = self.oauth_params();
        params.push(("oauth_signature".to_string(), signature));
        params.sort();

        let fields = params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {}", fields))
    }
}

/// RFC 3986 encoding: everything but `A-Z a-z 0-9 - . _ ~` is escaped
pub fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Scheme, authority and path of `url` with the query and fragment removed
pub fn base_url(url: &Url) -> String {
    let mut base = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    // Default ports are already dropped by `Url`
    if let Some(port) = url.port() {
        base.push_str(&format!(":{}", port));
    }
    base.push_str(url.path());
    base
}

/// Builds `METHOD&base_url&normalized_params`
pub fn signature_base_string(method: &str, url: &Url, oauth_params: &[(String, String)]) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .chain(
            oauth_params
                .iter()
                .map(|(k, v)| (percent_encode(k), percent_encode(v))),
        )
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(&base_url(url)),
        percent_encode(&normalized)
    )
}

/// HMAC-SHA1 of `base` keyed by `consumer_secret&token_secret`, base64 encoded
pub fn sign(
    base: &str,
    consumer_secret: &str,
    token_secret: Option<&str>,
) -> Result<String, FlickrError> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        token_secret.map(percent_encode).unwrap_or_default()
    );
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).map_err(|e| FlickrError::Auth(e.to_string()))?;
    mac.update(base.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

fn generate_nonce() -> String {
    format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>())
}
