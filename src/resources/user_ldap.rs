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

use super::{V6_2, V6_4, V7_0};

const FIELDS: &[Field] = &[
    Field::string("name")
        .required()
        .force_new()
        .max_len(35)
        .describe("LDAP server entry name"),
    Field::string("server")
        .required()
        .max_len(63)
        .describe("LDAP server CN domain name or IP"),
    Field::string("secondary_server").max_len(63),
    Field::string("tertiary_server").max_len(63),
    Field::integer("status_ttl")
        .range(0, 600)
        .since(V7_0)
        .describe("Time for which server reachability is cached so that when a server is unreachable, it will not be retried for at least this period of time"),
    Field::string("server_identity_check").one_of(ENABLE_DISABLE),
    Field::string("source_ip").max_len(63),
    Field::integer("source_port").range(0, 65535).since(V6_4),
    Field::string("cnid")
        .max_len(20)
        .default_str("cn")
        .describe("Common name identifier for the LDAP server"),
    Field::string("dn")
        .required()
        .max_len(511)
        .describe("Distinguished name used to look up entries on the LDAP server"),
    Field::string("type")
        .one_of(&["simple", "anonymous", "regular"])
        .default_str("simple")
        .describe("Authentication type for LDAP searches"),
    Field::string("two_factor").one_of(&["disable", "fortitoken-cloud"]).since(V6_4),
    Field::string("two_factor_authentication")
        .one_of(&["fortitoken", "email", "sms"])
        .since(V6_4),
    Field::string("two_factor_notification")
        .one_of(&["email", "sms"])
        .since(V6_4),
    Field::string("username").max_len(511),
    Field::string("password").optional().sensitive().max_len(128),
    Field::string("group_member_check").one_of(&["user-attr", "group-object", "posix-group-object"]),
    Field::string("group_search_base").max_len(511),
    Field::string("group_filter").max_len(2047),
    Field::string("group_object_filter").max_len(2047),
    Field::string("secure")
        .one_of(&["disable", "starttls", "ldaps"])
        .default_str("disable"),
    Field::string("ssl_min_proto_version")
        .one_of(&["default", "SSLv3", "TLSv1", "TLSv1-1", "TLSv1-2"]),
    Field::string("ca_cert").max_len(79),
    Field::integer("port")
        .range(1, 65535)
        .default_int(389)
        .describe("Port to be used for communication with the LDAP server"),
    Field::string("password_expiry_warning").one_of(ENABLE_DISABLE),
    Field::string("password_renewal").one_of(ENABLE_DISABLE),
    Field::string("member_attr").max_len(63),
    Field::string("account_key_processing").one_of(&["same", "strip"]),
    Field::string("account_key_filter").max_len(2047),
    Field::string("search_type").one_of(&["recursive"]),
    Field::string("client_cert_auth").one_of(ENABLE_DISABLE).since(V7_0),
    Field::string("client_cert").max_len(79).since(V7_0),
    Field::string("obtain_user_info").one_of(ENABLE_DISABLE),
    Field::string("user_info_exchange_server").max_len(35),
    Field::string("interface_select_method")
        .one_of(&["auto", "sdwan", "specify"])
        .since(V6_2),
    Field::interface("interface")
        .max_len(15)
        .since(V6_2)
        .describe("Specify outgoing interface to reach server"),
    Field::string("antiphish").one_of(ENABLE_DISABLE).since(V7_0),
    Field::string("password_attr").max_len(35).since(V7_0),
];

pub static USER_LDAP: ResourceDef = ResourceDef {
    type_name: "user_ldap",
    label: "UserLdap",
    path: "user/ldap",
    key: Some("name"),
    description: "Configure LDAP server entries.",
    fields: FIELDS,
};
