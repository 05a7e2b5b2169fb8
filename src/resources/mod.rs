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

//! Field tables of the FortiOS objects exposed by the provider

use crate::schema::ResourceDef;
use crate::version::FirmwareVersion;

mod firewall_profileprotocoloptions;
mod router_isis;
mod system_admin;
mod user_ldap;
mod voip_profile;

pub use firewall_profileprotocoloptions::FIREWALL_PROFILEPROTOCOLOPTIONS;
pub use router_isis::ROUTER_ISIS;
pub use system_admin::SYSTEM_ADMIN;
pub use user_ldap::USER_LDAP;
pub use voip_profile::VOIP_PROFILE;

const V6_2: FirmwareVersion = FirmwareVersion::new(6, 2, 0);
const V6_4: FirmwareVersion = FirmwareVersion::new(6, 4, 0);
const V7_0: FirmwareVersion = FirmwareVersion::new(7, 0, 0);
const V7_2: FirmwareVersion = FirmwareVersion::new(7, 2, 0);

/// Every object exposed as a resource
pub static ALL: &[&ResourceDef] = &[
    &FIREWALL_PROFILEPROTOCOLOPTIONS,
    &ROUTER_ISIS,
    &SYSTEM_ADMIN,
    &USER_LDAP,
    &VOIP_PROFILE,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tf_provider::value::ValueAny;

    use crate::schema::{Check, Field, FieldType, Presence};

    use super::*;

    fn check_fields(def: &ResourceDef, fields: &[Field]) {
        let mut names = HashSet::new();
        for field in fields {
            assert!(
                names.insert(field.name),
                "{}: duplicate field {}",
                def.type_name,
                field.name
            );
            assert!(
                !field.name.contains('-'),
                "{}: {} is not a Terraform name",
                def.type_name,
                field.name
            );
            if let Some(default) = field.default {
                assert!(field.presence.is_computed(), "{}", field.name);
                match (field.kind, default.to_value(), field.check) {
                    (FieldType::Integer, ValueAny::Number(n), Check::IntRange(min, max)) => {
                        assert!(min <= n && n <= max, "{}", field.name)
                    }
                    (FieldType::String, _, _) | (FieldType::Integer, _, _) => (),
                    _ => panic!("{}: unexpected default", field.name),
                }
            }
            if let FieldType::Table(table) = field.kind {
                if let Some(key) = table.sort_key {
                    assert!(
                        table.fields.iter().any(|sub| sub.name == key),
                        "{}: missing sort key {}",
                        field.name,
                        key
                    );
                }
            }
            if let Some(sub) = field.sub_fields() {
                check_fields(def, sub);
            }
        }
    }

    #[test]
    fn tables_are_consistent() {
        let mut type_names = HashSet::new();
        for def in ALL {
            assert!(type_names.insert(def.type_name));
            check_fields(def, def.fields);

            match def.key {
                Some(key) => {
                    let field = def.field(key).expect("key field");
                    assert_eq!(field.presence, Presence::Required, "{}", def.type_name);
                    assert!(field.force_new, "{}", def.type_name);
                }
                None => assert!(def.fields.iter().all(|f| f.presence != Presence::Required)),
            }

            for reserved in ["id", "vdomparam", "dynamic_sort_subtable", "get_all_tables"] {
                assert!(def.field(reserved).is_none(), "{}: {}", def.type_name, reserved);
            }
        }
    }

    #[test]
    fn schemas_build() {
        for def in ALL {
            let schema = def.resource_schema();
            assert!(schema.block.attributes.contains_key("id"));
            assert_eq!(
                schema.block.attributes.contains_key("get_all_tables"),
                def.has_sub_blocks()
            );
            let schema = def.data_source_schema();
            assert!(schema.block.blocks.is_empty());
        }
    }

    #[test]
    fn version_gated_fields() {
        let status_ttl = USER_LDAP.field("status_ttl").expect("status_ttl");
        assert!(!status_ttl.versions.contains(&FirmwareVersion::new(6, 4, 9)));
        assert!(status_ttl.versions.contains(&V7_0));

        assert!(ROUTER_ISIS.is_singleton());
        assert_eq!(ROUTER_ISIS.label, "RouterIsis");
        assert_eq!(
            VOIP_PROFILE
                .field("sip")
                .and_then(Field::sub_fields)
                .and_then(|sip| sip.iter().find(|f| f.name == "open_register_pinhole"))
                .map(|f| f.remote_name().into_owned()),
            Some("open-register-pinhole".to_owned())
        );
    }
}
