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

use std::borrow::Cow;

use tf_provider::value::ValueAny;

use crate::version::{FirmwareVersion, VersionRange};

/// Shape of a field, both locally and on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Plain string
    String,
    /// Integer, the API may report it as a number or as a numeric string
    Integer,
    /// IPv4 address and netmask, `a.b.c.d m.m.m.m` on the wire, CIDR accepted locally
    Ipv4Mask,
    /// Interface reference, the API may report it as a list of references
    InterfaceName,
    /// Nested block appearing at most once
    Block(&'static [Field]),
    /// Nested block appearing any number of times
    Table(Table),
}

/// Repeated sub-block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub fields: &'static [Field],
    /// Field used to sort rows when `dynamic_sort_subtable` is enabled
    pub sort_key: Option<&'static str>,
}

/// Whether the practitioner must, may, or may not set the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Required,
    /// Optional, a removal from the configuration clears the remote value
    Optional,
    /// Optional, the remote value is kept when the configuration omits it
    OptionalComputed,
}

impl Presence {
    pub fn is_computed(&self) -> bool {
        matches!(self, Presence::OptionalComputed)
    }
}

/// Static validation declared on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    None,
    IntRange(i64, i64),
    MaxLength(usize),
    OneOf(&'static [&'static str]),
}

/// Value used when the configuration leaves a field unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
}

impl DefaultValue {
    pub fn to_value(&self) -> ValueAny {
        match self {
            DefaultValue::Str(s) => ValueAny::String(s.to_string()),
            DefaultValue::Int(n) => ValueAny::Number(*n),
        }
    }
}

/// One entry of a resource table
///
/// The Terraform name uses underscores, the remote name is derived from it by
/// replacing them with hyphens unless an explicit override is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub remote: Option<&'static str>,
    pub kind: FieldType,
    pub presence: Presence,
    pub check: Check,
    pub default: Option<DefaultValue>,
    pub sensitive: bool,
    pub force_new: bool,
    pub versions: VersionRange,
    pub description: &'static str,
}

impl Field {
    const fn new(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            remote: None,
            kind,
            presence: Presence::OptionalComputed,
            check: Check::None,
            default: None,
            sensitive: false,
            force_new: false,
            versions: VersionRange::ANY,
            description: "",
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer)
    }
    pub const fn ipv4_mask(name: &'static str) -> Self {
        Self::new(name, FieldType::Ipv4Mask)
    }
    pub const fn interface(name: &'static str) -> Self {
        Self::new(name, FieldType::InterfaceName)
    }
    pub const fn block(name: &'static str, fields: &'static [Field]) -> Self {
        Self::new(name, FieldType::Block(fields))
    }
    pub const fn table(
        name: &'static str,
        fields: &'static [Field],
        sort_key: Option<&'static str>,
    ) -> Self {
        Self::new(name, FieldType::Table(Table { fields, sort_key }))
    }

    pub const fn required(self) -> Self {
        Self {
            presence: Presence::Required,
            ..self
        }
    }
    pub const fn optional(self) -> Self {
        Self {
            presence: Presence::Optional,
            ..self
        }
    }
    pub const fn range(self, min: i64, max: i64) -> Self {
        Self {
            check: Check::IntRange(min, max),
            ..self
        }
    }
    pub const fn max_len(self, len: usize) -> Self {
        Self {
            check: Check::MaxLength(len),
            ..self
        }
    }
    pub const fn one_of(self, choices: &'static [&'static str]) -> Self {
        Self {
            check: Check::OneOf(choices),
            ..self
        }
    }
    pub const fn default_str(self, value: &'static str) -> Self {
        Self {
            default: Some(DefaultValue::Str(value)),
            ..self
        }
    }
    pub const fn default_int(self, value: i64) -> Self {
        Self {
            default: Some(DefaultValue::Int(value)),
            ..self
        }
    }
    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }
    pub const fn force_new(self) -> Self {
        Self {
            force_new: true,
            ..self
        }
    }
    pub const fn remote(self, remote: &'static str) -> Self {
        Self {
            remote: Some(remote),
            ..self
        }
    }
    pub const fn since(self, version: FirmwareVersion) -> Self {
        Self {
            versions: VersionRange {
                min: Some(version),
                max: self.versions.max,
            },
            ..self
        }
    }
    pub const fn until(self, version: FirmwareVersion) -> Self {
        Self {
            versions: VersionRange {
                min: self.versions.min,
                max: Some(version),
            },
            ..self
        }
    }
    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// Name of the field in the API payload
    pub fn remote_name(&self) -> Cow<'static, str> {
        match self.remote {
            Some(remote) => Cow::Borrowed(remote),
            None => Cow::Owned(self.name.replace('_', "-")),
        }
    }

    /// Sub-fields of a block or a table
    pub fn sub_fields(&self) -> Option<&'static [Field]> {
        match self.kind {
            FieldType::Block(fields) => Some(fields),
            FieldType::Table(table) => Some(table.fields),
            _ => None,
        }
    }
}

/// `enable` or `disable`
pub const ENABLE_DISABLE: &[&str] = &["enable", "disable"];

#[cfg(test)]
mod tests {
    use super::*;

    const SUB: &[Field] = &[Field::string("name")];

    #[test]
    fn remote_name_replaces_underscores() {
        assert_eq!(Field::integer("status_ttl").remote_name(), "status-ttl");
        assert_eq!(
            Field::string("open_register_pinhole").remote_name(),
            "open-register-pinhole"
        );
        assert_eq!(Field::string("id").remote_name(), "id");
        assert_eq!(Field::string("fosid").remote("id").remote_name(), "id");
    }

    #[test]
    fn builders_compose() {
        let field = Field::integer("port")
            .range(1, 65535)
            .default_int(389)
            .since(FirmwareVersion::new(6, 4, 0))
            .until(FirmwareVersion::new(7, 2, 0));
        assert_eq!(field.presence, Presence::OptionalComputed);
        assert_eq!(field.check, Check::IntRange(1, 65535));
        assert_eq!(field.default, Some(DefaultValue::Int(389)));
        assert_eq!(field.versions.min, Some(FirmwareVersion::new(6, 4, 0)));
        assert_eq!(field.versions.max, Some(FirmwareVersion::new(7, 2, 0)));

        let field = Field::table("vdom", SUB, Some("name"));
        assert_eq!(field.sub_fields(), Some(SUB));
        assert_eq!(Field::string("x").sub_fields(), None);
    }
}
