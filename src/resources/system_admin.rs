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

use crate::schema::{Field, ResourceDef, ENABLE_DISABLE};

use super::{V6_4, V7_0, V7_2};

const NAME_ONLY: &[Field] = &[Field::string("name").max_len(79)];

const TWO_FACTOR: &[&str] = &["disable", "fortitoken", "fortitoken-cloud", "email", "sms"];

const FIELDS: &[Field] = &[
    Field::string("name")
        .required()
        .force_new()
        .max_len(64)
        .describe("User name"),
    Field::string("wildcard").one_of(ENABLE_DISABLE),
    Field::string("remote_auth")
        .one_of(ENABLE_DISABLE)
        .describe("Enable authentication of this administrator by a remote server"),
    Field::string("remote_group").max_len(35),
    Field::string("password")
        .optional()
        .sensitive()
        .max_len(128)
        .describe("Admin user password"),
    Field::string("peer_auth").one_of(ENABLE_DISABLE),
    Field::string("peer_group").max_len(35),
    Field::ipv4_mask("trusthost1").describe("Any IPv4 address or subnet address and netmask from which the administrator can connect"),
    Field::ipv4_mask("trusthost2"),
    Field::ipv4_mask("trusthost3"),
    Field::ipv4_mask("trusthost4"),
    Field::ipv4_mask("trusthost5"),
    Field::ipv4_mask("trusthost6"),
    Field::ipv4_mask("trusthost7"),
    Field::ipv4_mask("trusthost8"),
    Field::ipv4_mask("trusthost9"),
    Field::ipv4_mask("trusthost10"),
    Field::string("ip6_trusthost1"),
    Field::string("ip6_trusthost2"),
    Field::string("ip6_trusthost3"),
    Field::string("accprofile")
        .max_len(35)
        .describe("Access profile for this administrator"),
    Field::string("allow_remove_admin_session").one_of(ENABLE_DISABLE),
    Field::string("comments").optional().max_len(255),
    Field::string("schedule").max_len(35),
    Field::string("accprofile_override").one_of(ENABLE_DISABLE),
    Field::string("vdom_override").one_of(ENABLE_DISABLE),
    Field::string("radius_vdom_override").one_of(ENABLE_DISABLE),
    Field::string("force_password_change").one_of(ENABLE_DISABLE),
    Field::string("two_factor").one_of(TWO_FACTOR),
    Field::string("two_factor_authentication")
        .one_of(&["fortitoken", "email", "sms"])
        .since(V6_4),
    Field::string("two_factor_notification")
        .one_of(&["email", "sms"])
        .since(V6_4),
    Field::string("fortitoken").max_len(16),
    Field::string("email_to").max_len(63),
    Field::string("sms_server").one_of(&["fortiguard", "custom"]),
    Field::string("sms_custom_server").max_len(35),
    Field::string("sms_phone").max_len(15),
    Field::string("guest_auth").one_of(ENABLE_DISABLE),
    Field::string("guest_lang").max_len(35),
    Field::string("hidden").one_of(ENABLE_DISABLE).until(V7_0),
    Field::string("history0").sensitive().optional(),
    Field::string("history1").sensitive().optional(),
    Field::integer("login_time_limit").range(0, 1440).since(V7_2),
    Field::table("vdom", NAME_ONLY, Some("name")).describe("Virtual domains"),
    Field::table("guest_usergroups", NAME_ONLY, Some("name")),
];

pub static SYSTEM_ADMIN: ResourceDef = ResourceDef {
    type_name: "system_admin",
    label: "SystemAdmin",
    path: "system/admin",
    key: Some("name"),
    description: "Configure admin users.",
    fields: FIELDS,
};
