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

use std::cmp::Ordering;

use tf_provider::value::ValueAny;

use super::attribute;

/// Ordering applied to the rows of a table when reading it back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Keep the order reported by the API
    #[default]
    Unsorted,
    /// Digit runs compare by numeric value (`port2` < `port10`)
    Natural,
    /// Byte-wise comparison
    Alphabetical,
}

impl SortMode {
    /// Interpret the `dynamic_sort_subtable` attribute
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some("true") | Some("natural") => SortMode::Natural,
            Some("alphabetical") => SortMode::Alphabetical,
            _ => SortMode::Unsorted,
        }
    }
}

/// Stable-sort rows on the value of `key`
pub fn sort_rows(rows: &mut [ValueAny], key: &str, mode: SortMode) {
    let compare: fn(&str, &str) -> Ordering = match mode {
        SortMode::Unsorted => return,
        SortMode::Natural => natural_cmp,
        SortMode::Alphabetical => |a, b| a.cmp(b),
    };
    rows.sort_by(|a, b| compare(&sort_key(attribute(a, key)), &sort_key(attribute(b, key))));
}

fn sort_key(value: &ValueAny) -> String {
    match value {
        ValueAny::String(s) => s.clone(),
        ValueAny::Number(n) => n.to_string(),
        ValueAny::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Compare strings where runs of digits are ordered by numeric value
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a;
    let mut b = b;
    loop {
        match (a.chars().next(), b.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (da, ra) = split_digits(a);
                let (db, rb) = split_digits(b);
                let ta = da.trim_start_matches('0');
                let tb = db.trim_start_matches('0');
                let ord = ta
                    .len()
                    .cmp(&tb.len())
                    .then_with(|| ta.cmp(tb))
                    .then_with(|| da.len().cmp(&db.len()));
                if ord != Ordering::Equal {
                    return ord;
                }
                a = ra;
                b = rb;
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a = &a[x.len_utf8()..];
                b = &b[y.len_utf8()..];
            }
        }
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}
