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

//! src/settings.rs

use crate::error::StartupError;
use serde::Deserialize;
use std::{fs, path::Path};

/// AppSettings
///
/// Where the health check server listens. The response payload is not
/// configurable.
#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct AppSettings {
    pub addr: String,
    pub port: u16,
}

impl AppSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }

    /// Reads `APP_ENV`, defaulting to `local` when unset.
    pub fn from_env() -> Result<Self, StartupError> {
        std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".into())
            .try_into()
    }
}

impl TryFrom<String> for Environment {
    type Error = StartupError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(StartupError::Environment(s)),
        }
    }
}

pub fn read_settings_file() -> Result<AppSettings, StartupError> {
    let env = Environment::from_env()?;
    let filename = format!("./settings.{}.toml", env.as_str());
    read_settings_from(filename)
}

pub fn read_settings_from(
    path: impl AsRef<Path>,
) -> Result<AppSettings, StartupError> {
    let toml_str = fs::read_to_string(path)?;
    let settings: AppSettings = toml::from_str(&toml_str)?;
    Ok(settings)
}
