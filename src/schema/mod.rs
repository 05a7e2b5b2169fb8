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

//! Declarative description of FortiOS objects
//!
//! A [`ResourceDef`] lists the fields of one CMDB object. The same table drives
//! the Terraform schema, the mapping between local state and remote payload,
//! and the static validation of the configuration.

use std::collections::HashMap;

use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, NestedBlock, Schema,
};

mod field;

pub use field::{Check, DefaultValue, Field, FieldType, Presence, Table, ENABLE_DISABLE};

/// Accepted values of `dynamic_sort_subtable`
pub const SORT_MODES: &[&str] = &["false", "true", "natural", "alphabetical"];

/// Static description of a FortiOS object exposed as a resource
#[derive(Debug)]
pub struct ResourceDef {
    /// Resource type name, without the provider prefix
    pub type_name: &'static str,
    /// Camel-cased name used in messages and as the ID of singleton objects
    pub label: &'static str,
    /// CMDB path of the object (`system/admin`)
    pub path: &'static str,
    /// Field holding the key of the object, `None` for singleton objects
    pub key: Option<&'static str>,
    pub description: &'static str,
    pub fields: &'static [Field],
}

impl ResourceDef {
    pub fn is_singleton(&self) -> bool {
        self.key.is_none()
    }

    /// Check if the object has nested blocks or tables
    pub fn has_sub_blocks(&self) -> bool {
        self.fields.iter().any(|field| field.sub_fields().is_some())
    }

    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Schema of the managed resource
    pub fn resource_schema(&self) -> Schema {
        let mut block = fields_block(self.fields, self.description);
        block.attributes.insert(
            "id".to_owned(),
            Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Identifier of the object"),
                constraint: AttributeConstraint::Computed,
                ..Default::default()
            },
        );
        block
            .attributes
            .insert("vdomparam".to_owned(), vdomparam_attribute());
        if self.has_sub_blocks() {
            block.attributes.insert(
                "dynamic_sort_subtable".to_owned(),
                Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain(
                        "Sort sub-tables: false, true, natural or alphabetical. Do not set it when sub-tables are static.",
                    ),
                    constraint: AttributeConstraint::OptionalComputed,
                    ..Default::default()
                },
            );
            block.attributes.insert(
                "get_all_tables".to_owned(),
                Attribute {
                    attr_type: AttributeType::Bool,
                    description: Description::plain(
                        "Read every sub-table, including the ones that are not configured",
                    ),
                    constraint: AttributeConstraint::OptionalComputed,
                    ..Default::default()
                },
            );
        }
        Schema { version: 1, block }
    }

    /// Schema of the data source reading one object
    ///
    /// Only the key and `vdomparam` are inputs, sub-blocks are exposed as
    /// computed lists of objects.
    pub fn data_source_schema(&self) -> Schema {
        let mut attributes: HashMap<String, Attribute> = self
            .fields
            .iter()
            .map(|field| {
                let constraint = if Some(field.name) == self.key {
                    AttributeConstraint::Required
                } else {
                    AttributeConstraint::Computed
                };
                (
                    field.name.to_owned(),
                    Attribute {
                        attr_type: value_type(field),
                        description: field_description(field),
                        constraint,
                        sensitive: field.sensitive,
                        ..Default::default()
                    },
                )
            })
            .collect();
        attributes.insert("vdomparam".to_owned(), vdomparam_attribute());

        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes,
                description: Description::plain(self.description),
                ..Default::default()
            },
        }
    }
}

fn vdomparam_attribute() -> Attribute {
    Attribute {
        attr_type: AttributeType::String,
        description: Description::plain(
            "VDOM the request applies to when the FortiGate unit runs in VDOM mode",
        ),
        constraint: AttributeConstraint::Optional,
        ..Default::default()
    }
}

fn field_description(field: &Field) -> Description {
    let mut description = if field.description.is_empty() {
        field.name.replace('_', " ")
    } else {
        field.description.to_owned()
    };
    if !field.versions.is_any() {
        description = format!("{} (FortiOS {})", description, field.versions);
    }
    Description::plain(description)
}

fn attribute_constraint(presence: Presence) -> AttributeConstraint {
    match presence {
        Presence::Required => AttributeConstraint::Required,
        Presence::Optional => AttributeConstraint::Optional,
        Presence::OptionalComputed => AttributeConstraint::OptionalComputed,
    }
}

fn fields_block(fields: &[Field], description: &str) -> Block {
    let mut attributes = HashMap::new();
    let mut blocks = HashMap::new();
    for field in fields {
        match field.kind {
            FieldType::Block(sub) => {
                blocks.insert(
                    field.name.to_owned(),
                    NestedBlock::Optional(fields_block(sub, &field_description(field).content)),
                );
            }
            FieldType::Table(table) => {
                blocks.insert(
                    field.name.to_owned(),
                    NestedBlock::List(fields_block(
                        table.fields,
                        &field_description(field).content,
                    )),
                );
            }
            _ => {
                attributes.insert(
                    field.name.to_owned(),
                    Attribute {
                        attr_type: value_type(field),
                        description: field_description(field),
                        constraint: attribute_constraint(field.presence),
                        sensitive: field.sensitive,
                        ..Default::default()
                    },
                );
            }
        }
    }
    Block {
        version: 1,
        attributes,
        blocks,
        description: Description::plain(description),
        ..Default::default()
    }
}

/// Terraform type of the value of a field
fn value_type(field: &Field) -> AttributeType {
    match field.kind {
        FieldType::String | FieldType::Ipv4Mask | FieldType::InterfaceName => {
            AttributeType::String
        }
        FieldType::Integer => AttributeType::Number,
        FieldType::Block(fields) | FieldType::Table(Table { fields, .. }) => AttributeType::List(
            AttributeType::Object(
                fields
                    .iter()
                    .map(|field| (field.name.to_owned(), value_type(field)))
                    .collect(),
            )
            .into(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &[Field] = &[
        Field::string("name").max_len(35),
        Field::integer("weight"),
    ];
    const FIELDS: &[Field] = &[
        Field::string("name").required().force_new(),
        Field::string("comments").optional(),
        Field::string("password").optional().sensitive(),
        Field::table("members", ROWS, Some("name")),
    ];
    static DEF: ResourceDef = ResourceDef {
        type_name: "test_object",
        label: "TestObject",
        path: "test/object",
        key: Some("name"),
        description: "Test object",
        fields: FIELDS,
    };

    #[test]
    fn resource_schema_layout() {
        let schema = DEF.resource_schema();
        let attributes = &schema.block.attributes;

        assert_eq!(
            attributes["name"].constraint,
            AttributeConstraint::Required
        );
        assert_eq!(
            attributes["comments"].constraint,
            AttributeConstraint::Optional
        );
        assert!(attributes["password"].sensitive);
        assert_eq!(attributes["id"].constraint, AttributeConstraint::Computed);
        assert!(attributes.contains_key("vdomparam"));
        assert!(attributes.contains_key("dynamic_sort_subtable"));
        assert!(attributes.contains_key("get_all_tables"));
        assert!(!attributes.contains_key("members"));

        match &schema.block.blocks["members"] {
            NestedBlock::List(block) => {
                assert_eq!(block.attributes["weight"].attr_type, AttributeType::Number);
            }
            other => panic!("unexpected nesting: {:?}", other),
        }
    }

    #[test]
    fn data_source_schema_is_computed() {
        let schema = DEF.data_source_schema();
        let attributes = &schema.block.attributes;

        assert_eq!(
            attributes["name"].constraint,
            AttributeConstraint::Required
        );
        assert_eq!(
            attributes["comments"].constraint,
            AttributeConstraint::Computed
        );
        assert!(schema.block.blocks.is_empty());
        assert!(matches!(
            attributes["members"].attr_type,
            AttributeType::List(_)
        ));
        assert!(!attributes.contains_key("id"));
    }

    #[test]
    fn singleton_has_no_key() {
        assert!(!DEF.is_singleton());
        assert!(DEF.has_sub_blocks());
        assert_eq!(DEF.field("comments").map(|f| f.presence), Some(Presence::Optional));
    }
}
