/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{EnumString, IntoStaticStr};

/// Extra fields that can be requested alongside a photo list.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getRecent.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PhotoExtras {
    Description,
    License,
    DateUpload,
    DateTaken,
    OwnerName,
    IconServer,
    OriginalFormat,
    LastUpdate,
    Geo,
    Tags,
    MachineTags,
    Views,
    Media,
    PathAlias,
    UrlSq,
    UrlT,
    UrlS,
    UrlQ,
    UrlM,
    UrlN,
    UrlZ,
    UrlC,
    UrlL,
    UrlO,
}

impl PhotoExtras {
    /// Comma separated form expected by the `extras` parameter
    pub fn join(extras: &[PhotoExtras]) -> String {
        extras
            .iter()
            .map(|e| -> &'static str { (*e).into() })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Access level requested when sending a user to authorize the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Permissions {
    Read,
    Write,
    Delete,
}
