// This file is part of the terraform-provider-fortios project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Access to the FortiOS configuration database

use std::fmt::Debug;

use async_trait::async_trait;

use crate::mapping::Payload;
use crate::version::FirmwareVersion;

#[cfg(test)]
pub mod memory;
pub mod rest;

pub use rest::{RestClient, RestConfig};

/// Per-request options
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RequestOptions {
    /// VDOM the request applies to, the client default when `None`
    pub vdom: Option<String>,
    /// Number of retries on transport failures
    pub retries: u32,
}

/// Answer to a write request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WriteResponse {
    /// Key of the object as reported by the unit
    pub mkey: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("FortiOS API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("request to FortiOS failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid FortiOS response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Request(String),
}

/// Client of the CMDB REST API
///
/// `path` is the CMDB path of the object kind (`system/admin`), `mkey` the key
/// of the object. Singleton objects have no key.
#[async_trait]
pub trait FortiClient: Send + Sync + Debug {
    /// Firmware version of the connected unit, `None` when unknown
    fn firmware_version(&self) -> Option<FirmwareVersion>;

    async fn create(
        &self,
        path: &str,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError>;

    /// Read one object, `Ok(None)` if it does not exist
    async fn read(
        &self,
        path: &str,
        mkey: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<Payload>, ClientError>;

    async fn update(
        &self,
        path: &str,
        mkey: Option<&str>,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError>;

    /// Delete one object, deleting a missing object succeeds
    async fn delete(
        &self,
        path: &str,
        mkey: &str,
        options: &RequestOptions,
    ) -> Result<(), ClientError>;
}
