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

//! In-memory configuration database used by the tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::mapping::Payload;
use crate::version::FirmwareVersion;

use super::{ClientError, FortiClient, RequestOptions, WriteResponse};

/// Request received by a [`MemoryClient`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(String, Payload),
    Read(String, Option<String>),
    Update(String, Option<String>, Payload),
    Delete(String, String),
}

#[derive(Debug, Default)]
pub struct MemoryClient {
    firmware: Option<FirmwareVersion>,
    /// Field holding the key of the objects of each path
    keys: HashMap<String, String>,
    objects: Mutex<HashMap<(String, String), Payload>>,
    calls: Mutex<Vec<Call>>,
    options: Mutex<Vec<RequestOptions>>,
}

const SINGLETON: &str = "";

impl MemoryClient {
    pub fn new(firmware: Option<FirmwareVersion>) -> Self {
        Self {
            firmware,
            ..Default::default()
        }
    }

    /// Declare the key field of the objects stored under `path`
    pub fn with_key(mut self, path: &str, key: &str) -> Self {
        self.keys.insert(path.to_owned(), key.to_owned());
        self
    }

    /// Store an object as if it was created out of band
    pub fn insert(&self, path: &str, mkey: Option<&str>, object: Payload) {
        self.lock_objects().insert(
            (path.to_owned(), mkey.unwrap_or(SINGLETON).to_owned()),
            object,
        );
    }

    pub fn remove(&self, path: &str, mkey: Option<&str>) -> Option<Payload> {
        self.lock_objects()
            .remove(&(path.to_owned(), mkey.unwrap_or(SINGLETON).to_owned()))
    }

    pub fn get(&self, path: &str, mkey: Option<&str>) -> Option<Payload> {
        self.lock_objects()
            .get(&(path.to_owned(), mkey.unwrap_or(SINGLETON).to_owned()))
            .cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Options received with each request
    pub fn options(&self) -> Vec<RequestOptions> {
        self.options
            .lock()
            .map(|options| options.clone())
            .unwrap_or_default()
    }

    fn lock_objects(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), Payload>> {
        self.objects.lock().unwrap_or_else(|err| err.into_inner())
    }

    fn record(&self, call: Call, options: &RequestOptions) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if let Ok(mut received) = self.options.lock() {
            received.push(options.clone());
        }
    }
}

fn merge(object: &mut Payload, payload: &Payload) {
    for (name, value) in payload {
        if value.is_null() {
            object.remove(name);
        } else {
            object.insert(name.clone(), value.clone());
        }
    }
}

#[async_trait]
impl FortiClient for MemoryClient {
    fn firmware_version(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    async fn create(
        &self,
        path: &str,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError> {
        self.record(Call::Create(path.to_owned(), payload.clone()), options);
        let key = self.keys.get(path).ok_or_else(|| ClientError::Api {
            status: 405,
            message: format!("cannot create objects under {}", path),
        })?;
        let mkey = match payload.get(key) {
            Some(Value::String(mkey)) => mkey.clone(),
            Some(Value::Number(mkey)) => mkey.to_string(),
            _ => {
                return Err(ClientError::Api {
                    status: 400,
                    message: format!("missing {}", key),
                })
            }
        };
        let mut objects = self.lock_objects();
        let object = objects
            .entry((path.to_owned(), mkey.clone()))
            .or_default();
        merge(object, payload);
        Ok(WriteResponse { mkey: Some(mkey) })
    }

    async fn read(
        &self,
        path: &str,
        mkey: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<Payload>, ClientError> {
        self.record(
            Call::Read(path.to_owned(), mkey.map(str::to_owned)),
            options,
        );
        Ok(self.get(path, mkey))
    }

    async fn update(
        &self,
        path: &str,
        mkey: Option<&str>,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError> {
        self.record(
            Call::Update(path.to_owned(), mkey.map(str::to_owned), payload.clone()),
            options,
        );
        let mut objects = self.lock_objects();
        let id = (path.to_owned(), mkey.unwrap_or(SINGLETON).to_owned());
        let object = match mkey {
            Some(_) => objects.get_mut(&id).ok_or_else(|| ClientError::Api {
                status: 404,
                message: "entry not found".to_owned(),
            })?,
            None => objects.entry(id).or_default(),
        };
        merge(object, payload);
        Ok(WriteResponse {
            mkey: mkey.map(str::to_owned),
        })
    }

    async fn delete(
        &self,
        path: &str,
        mkey: &str,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        self.record(Call::Delete(path.to_owned(), mkey.to_owned()), options);
        self.remove(path, Some(mkey));
        Ok(())
    }
}
