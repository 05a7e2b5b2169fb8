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

use serde_json::Value;
use tf_provider::value::ValueAny;

use crate::schema::{Field, FieldType, Presence};
use crate::version::{FirmwareVersion, VersionRange};

use super::{attribute, is_set, rows, Payload};

/// Failure to assemble the payload of an object
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("argument `{argument}` is not supported by FortiOS {version}, it requires {supported}")]
    UnsupportedArgument {
        argument: String,
        version: FirmwareVersion,
        supported: VersionRange,
    },
}

enum Expanded {
    Skip,
    Set(Value),
    Clear(Value),
}

/// Assemble the remote payload of a local object
///
/// Only the fields holding a known value are sent. When `prior` is given, the
/// fields it holds and `local` clears are sent as explicit clears.
/// `firmware` is the version of the connected unit, `None` disables gating.
pub fn expand_object(
    fields: &[Field],
    local: &ValueAny,
    prior: Option<&ValueAny>,
    firmware: Option<FirmwareVersion>,
) -> Result<Payload, ExpandError> {
    expand_fields(fields, local, prior, firmware, "")
}

/// Payload emptying every table of an object
///
/// Tables the connected firmware does not support are left out.
pub fn reset_object(fields: &[Field], firmware: Option<FirmwareVersion>) -> Payload {
    fields
        .iter()
        .filter(|field| matches!(field.kind, FieldType::Table(_)))
        .filter(|field| firmware.map_or(true, |version| field.versions.contains(&version)))
        .map(|field| (field.remote_name().into_owned(), Value::Array(Vec::new())))
        .collect()
}

fn expand_fields(
    fields: &[Field],
    local: &ValueAny,
    prior: Option<&ValueAny>,
    firmware: Option<FirmwareVersion>,
    prefix: &str,
) -> Result<Payload, ExpandError> {
    let mut payload = Payload::new();
    for field in fields {
        let argument = if prefix.is_empty() {
            field.name.to_owned()
        } else {
            format!("{}.{}", prefix, field.name)
        };
        let value = attribute(local, field.name);
        let previous = prior.map(|prior| attribute(prior, field.name));

        let expanded = match field.kind {
            FieldType::Block(sub) => match rows(value).first() {
                Some(row) => Expanded::Set(Value::Object(expand_fields(
                    sub,
                    row,
                    previous.and_then(|previous| rows(previous).first()),
                    firmware,
                    &argument,
                )?)),
                None => Expanded::Skip,
            },
            FieldType::Table(table) => {
                let current = rows(value);
                let previous = previous.map(rows).unwrap_or_default();
                if !current.is_empty() {
                    let mut items = Vec::with_capacity(current.len());
                    for (index, row) in current.iter().enumerate() {
                        items.push(Value::Object(expand_fields(
                            table.fields,
                            row,
                            previous.get(index),
                            firmware,
                            &format!("{}.{}", argument, index),
                        )?));
                    }
                    Expanded::Set(Value::Array(items))
                } else if !previous.is_empty() && matches!(value, ValueAny::List(_)) {
                    Expanded::Clear(Value::Array(Vec::new()))
                } else {
                    Expanded::Skip
                }
            }
            _ if is_set(value) => Expanded::Set(expand_scalar(value)),
            _ if field.presence == Presence::Optional
                && !field.sensitive
                && matches!(value, ValueAny::Null)
                && previous.is_some_and(is_set) =>
            {
                Expanded::Clear(Value::Null)
            }
            _ => Expanded::Skip,
        };

        match expanded {
            Expanded::Skip => (),
            Expanded::Set(value) => {
                check_version(field, firmware, argument)?;
                payload.insert(field.remote_name().into_owned(), value);
            }
            Expanded::Clear(value) => {
                payload.insert(field.remote_name().into_owned(), value);
            }
        }
    }
    Ok(payload)
}

fn expand_scalar(value: &ValueAny) -> Value {
    match value {
        ValueAny::String(s) => Value::String(s.clone()),
        ValueAny::Number(n) => Value::from(*n),
        ValueAny::Bool(b) => Value::Bool(*b),
        ValueAny::List(items) => Value::Array(items.iter().map(expand_scalar).collect()),
        ValueAny::Map(_) | ValueAny::Null | ValueAny::Unknown => Value::Null,
    }
}

fn check_version(
    field: &Field,
    firmware: Option<FirmwareVersion>,
    argument: String,
) -> Result<(), ExpandError> {
    match firmware {
        Some(version) if !field.versions.contains(&version) => {
            Err(ExpandError::UnsupportedArgument {
                argument,
                version,
                supported: field.versions,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mapping::{flatten_object, FlattenOptions};

    use super::*;

    const SIP: &[Field] = &[
        Field::string("status"),
        Field::string("open_register_pinhole"),
        Field::integer("max_dialogs"),
    ];
    const MEMBERS: &[Field] = &[Field::string("name"), Field::integer("weight")];
    const FIELDS: &[Field] = &[
        Field::string("name").required(),
        Field::integer("status_ttl").since(FirmwareVersion::new(7, 0, 0)),
        Field::string("comments").optional(),
        Field::string("type"),
        Field::block("sip", SIP),
        Field::table("members", MEMBERS, Some("name")),
    ];

    fn local(value: Value) -> ValueAny {
        serde_json::from_value(value).expect("valid local value")
    }

    #[test]
    fn nested_block_is_renamed() {
        let object = local(json!({
            "name": "default",
            "sip": [{"status": "enable", "open_register_pinhole": "enable"}],
        }));
        let payload = expand_object(FIELDS, &object, None, None).expect("payload");
        assert_eq!(
            Value::Object(payload),
            json!({
                "name": "default",
                "sip": {"status": "enable", "open-register-pinhole": "enable"},
            })
        );
    }

    #[test]
    fn unset_fields_are_omitted() {
        let object = local(json!({
            "name": null,
            "status_ttl": 300,
            "comments": null,
            "type": null,
            "sip": [],
            "members": [],
        }));
        let payload = expand_object(FIELDS, &object, None, None).expect("payload");
        assert_eq!(Value::Object(payload), json!({"status-ttl": 300}));

        let mut object = object;
        if let ValueAny::Map(map) = &mut object {
            map.insert("type".to_owned(), ValueAny::Unknown);
        }
        let payload = expand_object(FIELDS, &object, None, None).expect("payload");
        assert!(!payload.contains_key("type"));
    }

    #[test]
    fn cleared_fields_are_sent_on_update() {
        let prior = local(json!({
            "name": "a",
            "comments": "old",
            "type": "simple",
            "members": [{"name": "m1", "weight": 1}],
        }));
        let object = local(json!({
            "name": "a",
            "comments": null,
            "type": null,
            "members": [],
        }));
        let payload = expand_object(FIELDS, &object, Some(&prior), None).expect("payload");
        assert_eq!(
            Value::Object(payload),
            json!({"name": "a", "comments": null, "members": []})
        );

        let payload = expand_object(FIELDS, &object, None, None).expect("payload");
        assert_eq!(Value::Object(payload), json!({"name": "a"}));
    }

    #[test]
    fn firmware_gates_arguments() {
        let object = local(json!({"name": "a", "status_ttl": 300}));

        let error = expand_object(FIELDS, &object, None, Some(FirmwareVersion::new(6, 4, 2)))
            .expect_err("unsupported argument");
        assert_eq!(
            error,
            ExpandError::UnsupportedArgument {
                argument: "status_ttl".to_owned(),
                version: FirmwareVersion::new(6, 4, 2),
                supported: FIELDS[1].versions,
            }
        );
        assert!(error.to_string().contains("status_ttl"));

        assert!(expand_object(FIELDS, &object, None, Some(FirmwareVersion::new(7, 2, 0))).is_ok());

        let object = local(json!({"name": "a"}));
        assert!(expand_object(FIELDS, &object, None, Some(FirmwareVersion::new(6, 4, 2))).is_ok());
    }

    #[test]
    fn reset_empties_tables() {
        assert_eq!(Value::Object(reset_object(FIELDS, None)), json!({"members": []}));
    }

    #[test]
    fn reset_skips_unsupported_tables() {
        const GATED: &[Field] = &[
            Field::table("members", MEMBERS, Some("name")),
            Field::table("members6", MEMBERS, Some("name")).since(FirmwareVersion::new(7, 0, 0)),
        ];
        assert_eq!(
            Value::Object(reset_object(GATED, Some(FirmwareVersion::new(6, 4, 0)))),
            json!({"members": []})
        );
        assert_eq!(
            Value::Object(reset_object(GATED, Some(FirmwareVersion::new(7, 0, 1)))),
            json!({"members": [], "members6": []})
        );
    }

    #[test]
    fn flatten_then_expand_is_identity() {
        let remote = json!({
            "name": "default",
            "status-ttl": 300,
            "comments": "lab",
            "type": "simple",
            "sip": {"status": "enable", "open-register-pinhole": "disable", "max-dialogs": 4},
            "members": [{"name": "m1", "weight": 1}, {"name": "m2", "weight": 2}],
        });
        let Value::Object(payload) = remote.clone() else {
            panic!("not an object");
        };
        let options = FlattenOptions {
            all_tables: true,
            ..Default::default()
        };
        let flattened = ValueAny::Map(flatten_object(FIELDS, &payload, &ValueAny::Null, &options));
        let expanded = expand_object(FIELDS, &flattened, None, None).expect("payload");
        assert_eq!(Value::Object(expanded), remote);
    }
}
