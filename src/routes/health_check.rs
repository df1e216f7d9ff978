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

//! src/routes/health_check.rs

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const READY_MESSAGE: &str = "API is ready for AWS!";

/// Outcome reported by the health check
///
/// Only `Success` exists today, the check does not probe any
/// dependency.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Success,
}

/// HealthResponse
///
/// Body of `GET /api/health`. Field order is the serialized order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ready() -> Self {
        Self {
            status: HealthStatus::Success,
            message: READY_MESSAGE,
        }
    }
}

/// Health check
///
/// Alive server check for the deployment pipeline. Query string,
/// headers and body are never read.
///
/// # Returns
/// `(StatusCode::OK, {"status":"success","message":"API is ready for AWS!"})`
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::ready()))
}
