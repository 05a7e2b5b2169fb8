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

//! Best-effort coercions of remote scalars

use std::net::Ipv4Addr;

use serde_json::Value;

/// Integer reported either as a JSON number or as a numeric string
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Textual form of a scalar
pub fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Name of the interface a reference designates
///
/// The API reports some interface references as a list of
/// `{"interface-name": ...}` objects, only the first one is meaningful.
pub fn interface_name(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => match items.first()? {
            Value::Object(item) => ["interface-name", "name", "q_origin_key"]
                .iter()
                .find_map(|key| item.get(*key).and_then(string)),
            other => string(other),
        },
        other => string(other),
    }
}

/// Rewrite `a.b.c.d m.m.m.m` into CIDR notation when the local value uses it
///
/// The API always answers with the address/netmask form.
pub fn ipmask_as_local(remote: &str, local: Option<&str>) -> String {
    match local {
        Some(local) if local.contains('/') => {
            ipmask_to_cidr(remote).unwrap_or_else(|| remote.to_owned())
        }
        _ => remote.to_owned(),
    }
}

/// Convert `a.b.c.d m.m.m.m` into `a.b.c.d/len`
///
/// Returns `None` if `text` is not an address followed by a contiguous netmask.
pub fn ipmask_to_cidr(text: &str) -> Option<String> {
    let mut parts = text.split_whitespace();
    let address: Ipv4Addr = parts.next()?.parse().ok()?;
    let mask: Ipv4Addr = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let mask = u32::from(mask);
    let len = mask.leading_ones();
    if mask.count_ones() != len {
        return None;
    }
    Some(format!("{}/{}", address, len))
}
