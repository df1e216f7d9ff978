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

//! src/error.rs

use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::log::SetLoggerError;

/// Everything that can go wrong before the server accepts requests
///
/// Serving `/api/health` itself never fails, so there is no response
/// mapping here.
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
    #[error(
        "{0} is not a supported environment. \
        Use either `local` or `production`."
    )]
    Environment(String),
    #[error("failed to set logger: {0}")]
    Logger(#[from] SetLoggerError),
    #[error("failed to set global subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}
