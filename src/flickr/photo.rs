/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::flickr::errors::FlickrError;
use crate::flickr::parsers::{
    from_date_taken, from_num_to_bool, from_space_separated, from_str_or_num,
};
use crate::flickr::{ApiClient, PhotoExtras};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Number of photos requested per page
pub const NUM_TO_GET: u32 = 10;

/// Holds the summary of a photo as returned by the photo list APIs.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getRecent.html) for
/// more details on the individual fields.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhotoSummary {
    pub id: String,

    pub owner: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub secret: String,

    #[serde(default)]
    pub server: String,

    #[serde(default)]
    pub farm: u32,

    #[serde(default, rename = "ispublic", deserialize_with = "from_num_to_bool")]
    pub is_public: bool,

    #[serde(default, rename = "isfriend", deserialize_with = "from_num_to_bool")]
    pub is_friend: bool,

    #[serde(default, rename = "isfamily", deserialize_with = "from_num_to_bool")]
    pub is_family: bool,

    // Only present when the date_taken extra was requested
    #[serde(default, rename = "datetaken", deserialize_with = "from_date_taken")]
    pub date_taken: Option<NaiveDateTime>,

    // Only present when the tags extra was requested
    #[serde(default, deserialize_with = "from_space_separated")]
    pub tags: Vec<String>,
}

impl PhotoSummary {
    /// Public page of this photo under `photo_page`, see [`Endpoints::photo_page`]
    ///
    /// [`Endpoints::photo_page`]: crate::flickr::Endpoints::photo_page
    pub fn page_url(&self, photo_page: &str) -> String {
        format!("{}{}/{}", photo_page, self.owner, self.id)
    }
}

/// One page of photos
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Photos {
    #[serde(deserialize_with = "from_str_or_num")]
    pub page: u64,

    #[serde(deserialize_with = "from_str_or_num")]
    pub pages: u64,

    #[serde(rename = "perpage", deserialize_with = "from_str_or_num")]
    pub per_page: u64,

    #[serde(deserialize_with = "from_str_or_num")]
    pub total: u64,

    #[serde(rename = "photo", default)]
    pub photos: Vec<PhotoSummary>,
}

impl Photos {
    /// Returns a page of the most recent public photos uploaded to Flickr
    pub async fn recent(
        client: &ApiClient,
        extras: &[PhotoExtras],
        per_page: u32,
        page: u32,
    ) -> Result<Self, FlickrError> {
        let extras = PhotoExtras::join(extras);
        let per_page = per_page.to_string();
        let page = page.to_string();
        let params = vec![
            ("extras", extras.as_str()),
            ("per_page", per_page.as_str()),
            ("page", page.as_str()),
        ];
        client
            .get::<PhotosResponse>("flickr.photos.getRecent", Some(&params))
            .await
            .map(|v| v.photos)
    }
}

// Expected response for a request to list photos
#[derive(Deserialize, Debug)]
struct PhotosResponse {
    photos: Photos,
}
