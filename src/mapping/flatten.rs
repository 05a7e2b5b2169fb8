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

use std::collections::BTreeMap;

use serde_json::Value;
use tf_provider::value::ValueAny;

use crate::schema::{Field, FieldType, Presence, Table};

use super::sort::{sort_rows, SortMode};
use super::{as_str, attribute, convert, is_set, rows, Payload, NULL};

/// How sub-blocks are read back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlattenOptions {
    /// Populate blocks and tables even when the local state does not hold them
    pub all_tables: bool,
    pub sort: SortMode,
}

impl FlattenOptions {
    fn populate(&self, local: &ValueAny) -> bool {
        self.all_tables || !rows(local).is_empty()
    }
}

/// Build the local object of a remote payload
///
/// `local` is the prior local object. It decides which sub-blocks are
/// populated and keeps the values the API never reports back.
/// Every field of `fields` is present in the result, null when the payload
/// lacks it.
pub fn flatten_object(
    fields: &[Field],
    remote: &Payload,
    local: &ValueAny,
    options: &FlattenOptions,
) -> BTreeMap<String, ValueAny> {
    fields
        .iter()
        .map(|field| {
            let value = flatten_field(
                field,
                remote.get(field.remote_name().as_ref()),
                attribute(local, field.name),
                options,
            );
            (field.name.to_owned(), value)
        })
        .collect()
}

fn flatten_field(
    field: &Field,
    remote: Option<&Value>,
    local: &ValueAny,
    options: &FlattenOptions,
) -> ValueAny {
    if field.sensitive {
        // never reported in clear by the API
        return match local {
            ValueAny::Unknown => ValueAny::Null,
            local => local.clone(),
        };
    }

    match field.kind {
        FieldType::Block(fields) => {
            if !options.populate(local) {
                return ValueAny::List(Vec::new());
            }
            let object = match remote {
                Some(Value::Object(object)) => Some(object),
                Some(Value::Array(items)) => items.first().and_then(Value::as_object),
                _ => None,
            };
            let prior = rows(local).first().unwrap_or(&NULL);
            ValueAny::List(
                object
                    .map(|object| ValueAny::Map(flatten_object(fields, object, prior, options)))
                    .into_iter()
                    .collect(),
            )
        }
        FieldType::Table(table) => {
            if !options.populate(local) {
                return ValueAny::List(Vec::new());
            }
            let prior_rows = rows(local);
            let mut flattened: Vec<ValueAny> = match remote {
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(Value::as_object)
                    .enumerate()
                    .map(|(index, row)| {
                        let prior = matching_row(&table, prior_rows, row, index);
                        ValueAny::Map(flatten_object(table.fields, row, prior, options))
                    })
                    .collect(),
                _ => Vec::new(),
            };
            if let Some(key) = table.sort_key {
                sort_rows(&mut flattened, key, options.sort);
            }
            ValueAny::List(flattened)
        }
        _ => match remote {
            None | Some(Value::Null) => ValueAny::Null,
            Some(value) => flatten_scalar(field, value, local),
        },
    }
}

fn flatten_scalar(field: &Field, remote: &Value, local: &ValueAny) -> ValueAny {
    let value = match field.kind {
        FieldType::Integer => convert::integer(remote).map(ValueAny::Number),
        FieldType::Ipv4Mask => convert::string(remote)
            .map(|text| ValueAny::String(convert::ipmask_as_local(&text, as_str(local)))),
        FieldType::InterfaceName => convert::interface_name(remote).map(ValueAny::String),
        _ => convert::string(remote).map(ValueAny::String),
    };
    match value {
        Some(ValueAny::String(text))
            if text.is_empty() && field.presence == Presence::Optional && !is_set(local) =>
        {
            ValueAny::Null
        }
        Some(value) => value,
        None => ValueAny::Null,
    }
}

/// Prior local row matching a remote row, by key when the table has one
fn matching_row<'a>(
    table: &Table,
    prior_rows: &'a [ValueAny],
    remote: &Payload,
    index: usize,
) -> &'a ValueAny {
    let by_key = table.sort_key.and_then(|key| {
        let field = table.fields.iter().find(|field| field.name == key)?;
        let remote_key = remote
            .get(field.remote_name().as_ref())
            .and_then(convert::string)?;
        prior_rows.iter().find(|row| match attribute(row, key) {
            ValueAny::String(s) => *s == remote_key,
            ValueAny::Number(n) => n.to_string() == remote_key,
            _ => false,
        })
    });
    by_key.or_else(|| prior_rows.get(index)).unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const MEMBERS: &[Field] = &[
        Field::string("name"),
        Field::integer("weight"),
        Field::string("secret").sensitive(),
    ];
    const SIP: &[Field] = &[
        Field::string("status"),
        Field::string("open_register_pinhole"),
        Field::integer("max_dialogs"),
    ];
    const FIELDS: &[Field] = &[
        Field::string("name").required(),
        Field::integer("status_ttl"),
        Field::string("comments").optional(),
        Field::string("password").optional().sensitive(),
        Field::ipv4_mask("trusthost"),
        Field::interface("interface"),
        Field::block("sip", SIP),
        Field::table("members", MEMBERS, Some("name")),
    ];

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(object) => object,
            _ => panic!("not an object"),
        }
    }

    fn local(value: Value) -> ValueAny {
        serde_json::from_value(value).expect("valid local value")
    }

    #[test]
    fn status_ttl_is_renamed_and_coerced() {
        let object = flatten_object(
            FIELDS,
            &payload(json!({"status-ttl": 42})),
            &ValueAny::Null,
            &Default::default(),
        );
        assert_eq!(object["status_ttl"], ValueAny::Number(42));

        let object = flatten_object(
            FIELDS,
            &payload(json!({"status-ttl": "42"})),
            &ValueAny::Null,
            &Default::default(),
        );
        assert_eq!(object["status_ttl"], ValueAny::Number(42));
    }

    #[test]
    fn missing_fields_are_null() {
        let object = flatten_object(
            FIELDS,
            &payload(json!({"name": "admin"})),
            &ValueAny::Null,
            &Default::default(),
        );
        assert_eq!(object.len(), FIELDS.len());
        assert_eq!(object["name"], ValueAny::String("admin".into()));
        assert_eq!(object["status_ttl"], ValueAny::Null);
        assert_eq!(object["trusthost"], ValueAny::Null);
        assert_eq!(object["sip"], ValueAny::List(vec![]));
    }

    #[test]
    fn sub_blocks_follow_local_state() {
        let remote = payload(json!({
            "sip": {"status": "enable", "max-dialogs": 10},
            "members": [{"name": "a", "weight": 1}],
        }));

        let object = flatten_object(FIELDS, &remote, &ValueAny::Null, &Default::default());
        assert_eq!(object["sip"], ValueAny::List(vec![]));
        assert_eq!(object["members"], ValueAny::List(vec![]));

        let prior = local(json!({"sip": [{"status": "disable"}], "members": []}));
        let object = flatten_object(FIELDS, &remote, &prior, &Default::default());
        assert_eq!(
            object["sip"],
            local(json!([{"status": "enable", "open_register_pinhole": null, "max_dialogs": 10}]))
        );
        assert_eq!(object["members"], ValueAny::List(vec![]));

        let options = FlattenOptions {
            all_tables: true,
            ..Default::default()
        };
        let object = flatten_object(FIELDS, &remote, &ValueAny::Null, &options);
        assert_eq!(
            object["members"],
            local(json!([{"name": "a", "weight": 1, "secret": null}]))
        );
    }

    #[test]
    fn single_block_accepts_one_element_list() {
        let remote = payload(json!({"sip": [{"status": "enable"}]}));
        let options = FlattenOptions {
            all_tables: true,
            ..Default::default()
        };
        let object = flatten_object(FIELDS, &remote, &ValueAny::Null, &options);
        assert_eq!(
            attribute(&rows(&object["sip"])[0], "status"),
            &ValueAny::String("enable".into())
        );
    }

    #[test]
    fn tables_are_sorted_on_request() {
        let remote = payload(json!({
            "members": [{"name": "port10"}, {"name": "port2"}, {"name": "port1"}],
        }));
        let options = FlattenOptions {
            all_tables: true,
            sort: SortMode::Natural,
        };
        let first = flatten_object(FIELDS, &remote, &ValueAny::Null, &options);
        let second = flatten_object(FIELDS, &remote, &ValueAny::Null, &options);
        assert_eq!(first, second);

        let names: Vec<_> = rows(&first["members"])
            .iter()
            .map(|row| attribute(row, "name").clone())
            .collect();
        assert_eq!(
            names,
            ["port1", "port2", "port10"].map(|s| ValueAny::String(s.into()))
        );
    }

    #[test]
    fn sensitive_values_are_kept_from_local() {
        let remote = payload(json!({
            "password": "ENC XXXX",
            "members": [{"name": "b", "secret": "ENC"}, {"name": "a", "secret": "ENC"}],
        }));
        let prior = local(json!({
            "password": "hunter2",
            "members": [{"name": "a", "secret": "sa"}, {"name": "b", "secret": "sb"}],
        }));
        let object = flatten_object(FIELDS, &remote, &prior, &Default::default());
        assert_eq!(object["password"], ValueAny::String("hunter2".into()));

        let members = rows(&object["members"]);
        assert_eq!(attribute(&members[0], "name"), &ValueAny::String("b".into()));
        assert_eq!(attribute(&members[0], "secret"), &ValueAny::String("sb".into()));
        assert_eq!(attribute(&members[1], "secret"), &ValueAny::String("sa".into()));

        let object = flatten_object(
            FIELDS,
            &remote,
            &local(json!({"password": null})),
            &Default::default(),
        );
        assert_eq!(object["password"], ValueAny::Null);
    }

    #[test]
    fn scalar_normalisation() {
        let remote = payload(json!({
            "comments": "",
            "trusthost": "10.0.0.0 255.255.255.0",
            "interface": [{"interface-name": "port1"}],
        }));

        let object = flatten_object(FIELDS, &remote, &ValueAny::Null, &Default::default());
        assert_eq!(object["comments"], ValueAny::Null);
        assert_eq!(
            object["trusthost"],
            ValueAny::String("10.0.0.0 255.255.255.0".into())
        );
        assert_eq!(object["interface"], ValueAny::String("port1".into()));

        let prior = local(json!({"comments": "", "trusthost": "10.0.0.0/24"}));
        let object = flatten_object(FIELDS, &remote, &prior, &Default::default());
        assert_eq!(object["comments"], ValueAny::String("".into()));
        assert_eq!(object["trusthost"], ValueAny::String("10.0.0.0/24".into()));
    }
}
