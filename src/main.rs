/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use anyhow::Result;
use flickr_recent::{AuthorizedClientRunner, Config, ConsoleInteraction};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    if config.has_placeholder_keys() {
        log::warn!("Using placeholder API key/secret, set FLICKR_API_KEY and FLICKR_API_SECRET");
    }

    let mut runner =
        AuthorizedClientRunner::new(config, ConsoleInteraction::stdio(), std::io::stdout());
    let status = runner.run().await;
    Ok(ExitCode::from(status.exit_code()))
}
