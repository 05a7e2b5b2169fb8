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

//! Translation between Terraform state and FortiOS payloads
//!
//! Local values are [`ValueAny`] objects keyed by the Terraform field names,
//! remote values are JSON objects keyed by the hyphenated API names.
//! Nested blocks are local lists holding zero or one object.

use std::collections::BTreeMap;

use tf_provider::value::ValueAny;

pub mod convert;
mod expand;
mod flatten;
mod sort;

pub use expand::{expand_object, reset_object, ExpandError};
pub use flatten::{flatten_object, FlattenOptions};
pub use sort::{natural_cmp, sort_rows, SortMode};

/// JSON object as sent to and received from the API
pub type Payload = serde_json::Map<String, serde_json::Value>;

static NULL: ValueAny = ValueAny::Null;

/// Attribute `name` of a local object, null if absent
pub fn attribute<'a>(object: &'a ValueAny, name: &str) -> &'a ValueAny {
    match object {
        ValueAny::Map(map) => map.get(name).unwrap_or(&NULL),
        _ => &NULL,
    }
}

/// Rows of a local block or table, empty if absent
pub fn rows(value: &ValueAny) -> &[ValueAny] {
    match value {
        ValueAny::List(rows) => rows,
        _ => &[],
    }
}

/// Check if a local value is known and not null
pub fn is_set(value: &ValueAny) -> bool {
    !matches!(value, ValueAny::Null | ValueAny::Unknown)
}

pub fn as_str(value: &ValueAny) -> Option<&str> {
    match value {
        ValueAny::String(s) => Some(s),
        _ => None,
    }
}

/// Mutable access to the attributes of a local object
pub fn object_mut(value: &mut ValueAny) -> Option<&mut BTreeMap<String, ValueAny>> {
    match value {
        ValueAny::Map(map) => Some(map),
        _ => None,
    }
}
