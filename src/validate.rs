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

use tf_provider::value::ValueAny;
use tf_provider::{AttributePath, Diagnostics};

use crate::mapping::{attribute, rows};
use crate::schema::{Check, Field, FieldType, ResourceDef, SORT_MODES};

/// Check the configuration of a resource against the checks of its table
///
/// Unknown values are skipped, they are checked again once known.
pub fn validate_config(diags: &mut Diagnostics, def: &ResourceDef, config: &ValueAny) {
    validate_fields(diags, def.fields, config, AttributePath::default());

    if let ValueAny::String(mode) = attribute(config, "dynamic_sort_subtable") {
        if !SORT_MODES.contains(&mode.as_str()) {
            diags.error(
                "Invalid `dynamic_sort_subtable`",
                format!(
                    "`dynamic_sort_subtable` must be one of {}, got `{}`.",
                    SORT_MODES.join(", "),
                    mode
                ),
                AttributePath::new("dynamic_sort_subtable"),
            );
        }
    }
}

fn validate_fields(
    diags: &mut Diagnostics,
    fields: &[Field],
    object: &ValueAny,
    attr_path: AttributePath,
) {
    for field in fields {
        let attr_path = attr_path.clone().attribute(field.name);
        let value = attribute(object, field.name);
        match field.kind {
            FieldType::Block(sub) => {
                let rows = rows(value);
                if rows.len() > 1 {
                    diags.error(
                        format!("Too many `{}` blocks", field.name),
                        format!("At most one `{}` block can be given.", field.name),
                        attr_path.clone(),
                    );
                }
                for (i, row) in rows.iter().enumerate() {
                    validate_fields(diags, sub, row, attr_path.clone().index(i as i64));
                }
            }
            FieldType::Table(table) => {
                for (i, row) in rows(value).iter().enumerate() {
                    validate_fields(diags, table.fields, row, attr_path.clone().index(i as i64));
                }
            }
            _ => check_value(diags, field, value, attr_path),
        }
    }
}

fn check_value(diags: &mut Diagnostics, field: &Field, value: &ValueAny, attr_path: AttributePath) {
    match (field.check, value) {
        (Check::IntRange(min, max), ValueAny::Number(n)) => {
            if *n < min || *n > max {
                diags.error(
                    format!("`{}` is out of range", field.name),
                    format!(
                        "`{}` must be between {} and {}, got {}.",
                        field.name, min, max, n
                    ),
                    attr_path,
                );
            }
        }
        (Check::MaxLength(len), ValueAny::String(s)) => {
            if s.chars().count() > len {
                diags.error(
                    format!("`{}` is too long", field.name),
                    format!(
                        "`{}` must be at most {} characters long, got {}.",
                        field.name,
                        len,
                        s.chars().count()
                    ),
                    attr_path,
                );
            }
        }
        (Check::OneOf(choices), ValueAny::String(s)) => {
            if !choices.contains(&s.as_str()) {
                diags.error(
                    format!("Invalid `{}`", field.name),
                    format!(
                        "`{}` must be one of {}, got `{}`.",
                        field.name,
                        choices.join(", "),
                        s
                    ),
                    attr_path,
                );
            }
        }
        _ => (),
    }
}
