/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr_recent::flickr::{AccessToken, Endpoints};
use flickr_recent::{Config, NotificationKind, UserInteraction};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use url::Url;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

#[allow(dead_code)]
pub(crate) fn config(server_uri: &str, token_file: &Path) -> Config {
    Config {
        api_key: API_KEY.into(),
        api_secret: API_SECRET.into(),
        token_file: token_file.to_path_buf(),
        endpoints: Endpoints::with_origin(server_uri),
    }
}

#[allow(dead_code)]
pub(crate) fn stored_token() -> AccessToken {
    AccessToken {
        token: "72157000000000001-storedtoken".into(),
        secret: "storedsecret".into(),
        nsid: Some("12345678@N00".into()),
        username: Some("stored".into()),
        fullname: None,
    }
}

/// `count` photo records the way flickr.photos.getRecent returns them
#[allow(dead_code)]
pub(crate) fn recent_photos_body(count: usize) -> Value {
    let photos: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": format!("5350000000{}", i),
                "owner": format!("1234567{}@N00", i),
                "secret": "abcdef",
                "server": "65535",
                "farm": 66,
                "title": format!("Photo number {}", i),
                "ispublic": 1,
                "isfriend": 0,
                "isfamily": 0,
                "datetaken": "2024-01-20 18:03:11",
                "datetakengranularity": 0,
                "datetakenunknown": "0",
                "tags": "tag1 tag2"
            })
        })
        .collect();
    json!({
        "photos": {
            "page": 1,
            "pages": 100,
            "perpage": 10,
            "total": 1000,
            "photo": photos
        },
        "stat": "ok"
    })
}

/// Parses an `Authorization: OAuth k="v", ...` header into decoded pairs
#[allow(dead_code)]
pub(crate) fn oauth_fields(header: &str) -> HashMap<String, String> {
    header
        .trim_start_matches("OAuth ")
        .split(", ")
        .filter_map(|field| {
            let (k, v) = field.split_once('=')?;
            let v = urlencoding::decode(v.trim_matches('"')).ok()?;
            Some((k.to_string(), v.into_owned()))
        })
        .collect()
}

/// Canned answers standing in for the user, recording everything asked
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    pub confirm_answer: bool,
    pub code: Option<String>,
    pub confirms: Vec<String>,
    pub prompts: Vec<String>,
    pub notifications: Vec<(NotificationKind, String, String)>,
    pub opened: Vec<Url>,
    /// Behave as if no browser could be launched
    pub fail_open: bool,
}

#[allow(dead_code)]
impl ScriptedInteraction {
    pub fn approving(code: &str) -> Self {
        Self {
            confirm_answer: true,
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }
}

impl UserInteraction for ScriptedInteraction {
    fn confirm(&mut self, title: &str, _message: &str) -> io::Result<bool> {
        self.confirms.push(title.into());
        Ok(self.confirm_answer)
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.prompts.push(message.into());
        Ok(self.code.clone())
    }

    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) -> io::Result<()> {
        self.notifications.push((kind, title.into(), message.into()));
        Ok(())
    }

    fn open_url(&mut self, url: &Url) -> io::Result<()> {
        self.opened.push(url.clone());
        if self.fail_open {
            return Err(io::Error::other("no browser available"));
        }
        Ok(())
    }
}
