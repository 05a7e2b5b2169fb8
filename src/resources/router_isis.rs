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

use super::{V6_2, V7_0};

const LEVELS: &[&str] = &["level-1-2", "level-1", "level-2"];
const AUTH_MODES: &[&str] = &["md5", "password"];

const ISIS_NET: &[Field] = &[
    Field::integer("id").range(0, 4294967295).describe("ISIS network ID"),
    Field::string("net").max_len(255).describe("ISIS network entity title (NET)"),
];

const ISIS_INTERFACE: &[Field] = &[
    Field::string("name").max_len(15).describe("IS-IS interface name"),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("status6").one_of(ENABLE_DISABLE),
    Field::string("network_type").one_of(&["broadcast", "point-to-point", "loopback"]),
    Field::string("circuit_type").one_of(LEVELS),
    Field::integer("csnp_interval_l1").range(1, 65535),
    Field::integer("csnp_interval_l2").range(1, 65535),
    Field::integer("hello_interval_l1").range(0, 65535),
    Field::integer("hello_interval_l2").range(0, 65535),
    Field::integer("hello_multiplier_l1").range(2, 100),
    Field::integer("hello_multiplier_l2").range(2, 100),
    Field::string("hello_padding").one_of(ENABLE_DISABLE),
    Field::integer("lsp_interval").range(1, 4294967295),
    Field::integer("lsp_retransmit_interval").range(1, 65535),
    Field::integer("metric_l1").range(1, 63),
    Field::integer("metric_l2").range(1, 63),
    Field::integer("wide_metric_l1").range(1, 16777214),
    Field::integer("wide_metric_l2").range(1, 16777214),
    Field::integer("priority_l1").range(0, 127),
    Field::integer("priority_l2").range(0, 127),
    Field::string("auth_mode_l1").one_of(AUTH_MODES),
    Field::string("auth_mode_l2").one_of(AUTH_MODES),
    Field::string("auth_password_l1").optional().sensitive().max_len(128),
    Field::string("auth_password_l2").optional().sensitive().max_len(128),
    Field::string("auth_keychain_l1").max_len(35),
    Field::string("auth_keychain_l2").max_len(35),
    Field::string("auth_send_only_l1").one_of(ENABLE_DISABLE),
    Field::string("auth_send_only_l2").one_of(ENABLE_DISABLE),
    Field::string("mesh_group").one_of(ENABLE_DISABLE),
    Field::integer("mesh_group_id").range(0, 4294967295),
];

const SUMMARY_ADDRESS: &[Field] = &[
    Field::integer("id").range(0, 4294967295).describe("Summary address entry ID"),
    Field::ipv4_mask("prefix").describe("Prefix"),
    Field::string("level").one_of(LEVELS),
];

const SUMMARY_ADDRESS6: &[Field] = &[
    Field::integer("id").range(0, 4294967295).describe("Prefix entry ID"),
    Field::string("prefix6").describe("IPv6 prefix"),
    Field::string("level").one_of(LEVELS),
];

const REDISTRIBUTE: &[Field] = &[
    Field::string("protocol").max_len(35).describe("Protocol name"),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::integer("metric").range(0, 4261412864),
    Field::string("metric_type").one_of(&["external", "internal"]),
    Field::string("level").one_of(LEVELS),
    Field::string("routemap").max_len(35),
];

const FIELDS: &[Field] = &[
    Field::string("is_type")
        .one_of(&["level-1-2", "level-1", "level-2-only"])
        .describe("IS type"),
    Field::string("adv_passive_only").one_of(ENABLE_DISABLE),
    Field::string("adv_passive_only6").one_of(ENABLE_DISABLE),
    Field::string("auth_mode_l1").one_of(AUTH_MODES),
    Field::string("auth_mode_l2").one_of(AUTH_MODES),
    Field::string("auth_password_l1").optional().sensitive().max_len(128),
    Field::string("auth_password_l2").optional().sensitive().max_len(128),
    Field::string("auth_keychain_l1").max_len(35),
    Field::string("auth_keychain_l2").max_len(35),
    Field::string("auth_sendonly_l1").one_of(ENABLE_DISABLE),
    Field::string("auth_sendonly_l2").one_of(ENABLE_DISABLE),
    Field::string("ignore_lsp_errors").one_of(ENABLE_DISABLE),
    Field::integer("lsp_gen_interval_l1").range(1, 120),
    Field::integer("lsp_gen_interval_l2").range(1, 120),
    Field::integer("lsp_refresh_interval").range(1, 65535),
    Field::integer("max_lsp_lifetime").range(350, 65535),
    Field::string("spf_interval_exp_l1"),
    Field::string("spf_interval_exp_l2"),
    Field::string("dynamic_hostname").one_of(ENABLE_DISABLE),
    Field::string("adjacency_check").one_of(ENABLE_DISABLE),
    Field::string("adjacency_check6").one_of(ENABLE_DISABLE),
    Field::string("overload_bit").one_of(ENABLE_DISABLE),
    Field::string("overload_bit_suppress").one_of(&["external", "interlevel"]),
    Field::integer("overload_bit_on_startup").range(5, 86400),
    Field::string("default_originate").one_of(ENABLE_DISABLE),
    Field::string("default_originate6").one_of(ENABLE_DISABLE),
    Field::string("metric_style").one_of(&[
        "narrow",
        "narrow-transition",
        "narrow-transition-l1",
        "narrow-transition-l2",
        "wide",
        "wide-l1",
        "wide-l2",
        "wide-transition",
        "wide-transition-l1",
        "wide-transition-l2",
        "transition",
        "transition-l1",
        "transition-l2",
    ]),
    Field::string("redistribute_l1").one_of(ENABLE_DISABLE),
    Field::string("redistribute_l1_list").max_len(35),
    Field::string("redistribute_l2").one_of(ENABLE_DISABLE),
    Field::string("redistribute_l2_list").max_len(35),
    Field::string("redistribute6_l1").one_of(ENABLE_DISABLE).since(V6_2),
    Field::string("redistribute6_l1_list").max_len(35).since(V6_2),
    Field::string("redistribute6_l2").one_of(ENABLE_DISABLE).since(V6_2),
    Field::string("redistribute6_l2_list").max_len(35).since(V6_2),
    Field::table("isis_net", ISIS_NET, Some("id")).describe("IS-IS net configuration"),
    Field::table("isis_interface", ISIS_INTERFACE, Some("name"))
        .describe("IS-IS interface configuration"),
    Field::table("summary_address", SUMMARY_ADDRESS, Some("id"))
        .describe("IS-IS summary addresses"),
    Field::table("summary_address6", SUMMARY_ADDRESS6, Some("id"))
        .since(V6_2)
        .describe("IS-IS IPv6 summary address"),
    Field::table("redistribute", REDISTRIBUTE, Some("protocol"))
        .describe("IS-IS redistribute protocols"),
    Field::table("redistribute6", REDISTRIBUTE, Some("protocol"))
        .since(V7_0)
        .describe("IS-IS IPv6 redistribution for routing protocols"),
];

pub static ROUTER_ISIS: ResourceDef = ResourceDef {
    type_name: "router_isis",
    label: "RouterIsis",
    path: "router/isis",
    key: None,
    description: "Configure IS-IS.",
    fields: FIELDS,
};
