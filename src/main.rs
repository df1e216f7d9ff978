// Copyright 2024 David Kalliecharan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Copyright (c) 2024 David Kalliecharan
//
// SPDX-License-Identifier: BSD-2-Clause

//! quality_gate serves the deployment pipeline's health check.
//!
//! # Introduction
//!
//! A single route, `GET /api/health`, answers `200 OK` with
//! `{"status":"success","message":"API is ready for AWS!"}` as long as
//! the process is up. Nothing else is checked.
//!
//! Settings come from `./settings.<APP_ENV>.toml` (or `--settings`), and
//! `--addr` / `--port` override them.

use anyhow::Context;
use clap::Parser;
use quality_gate::{
    settings::{read_settings_file, read_settings_from},
    startup::{Application, Cli},
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber =
        get_subscriber("quality_gate".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber).context("Failed to initialize telemetry.")?;

    let cli = Cli::parse();
    let app_settings = match &cli.settings {
        Some(path) => read_settings_from(path),
        None => read_settings_file(),
    }
    .context("Failed to read settings file.")?;

    let app = Application::build(cli.apply(app_settings))
        .await
        .context("Failed to bind listener.")?;
    app.run_until_stopped().await?;
    Ok(())
}
