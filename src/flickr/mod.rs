/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod errors;
pub mod oauth;
mod parsers;
pub mod photo;
pub mod properties;

pub use api::*;
pub use auth::*;
pub use errors::*;
pub use photo::*;
pub use properties::*;
