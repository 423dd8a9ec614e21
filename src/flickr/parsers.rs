/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use chrono::NaiveDateTime;
use serde::Deserialize;

const DATE_TAKEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Flickr mixes numbers and numeric strings for the same field
#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum {
    Num(u64),
    Str(String),
}

// Parses a "YYYY-MM-DD HH:MM:SS" date, unknown or invalid dates become None
pub fn from_date_taken<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.and_then(|s| NaiveDateTime::parse_from_str(&s, DATE_TAKEN_FORMAT).ok()))
}

// Parses the space separated tag string into a list
pub fn from_space_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.map(|s| s.split_whitespace().map(String::from).collect())
        .unwrap_or_default())
}

// Parses a count that may arrive as a number or as a string
pub fn from_str_or_num<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Num(n) => Ok(n),
        StrOrNum::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// Parses 0/1 flags
pub fn from_num_to_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(from_str_or_num(deserializer)? != 0)
}
