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

//! Terraform provider managing FortiOS configuration objects
//!
//! Every object is described by a static [`schema::ResourceDef`] table. The
//! table drives the Terraform schema, the translation between Terraform state
//! and REST payloads, and the validation of the configuration.

pub mod client;
pub mod config;
pub mod data_source;
pub mod mapping;
pub mod provider;
pub mod resource;
pub mod resources;
pub mod schema;
pub mod session;
pub mod validate;
pub mod version;

pub use provider::FortiosProvider;
pub use version::{FirmwareVersion, VersionRange};
