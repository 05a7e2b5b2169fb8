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

use super::{V6_4, V7_0};

const SIP: &[Field] = &[
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("rtp").one_of(ENABLE_DISABLE),
    Field::string("nat_port_range").max_len(63).since(V7_0),
    Field::string("open_register_pinhole")
        .one_of(ENABLE_DISABLE)
        .describe("Enable/disable open pinhole for REGISTER Contact port"),
    Field::string("open_contact_pinhole").one_of(ENABLE_DISABLE),
    Field::string("strict_register").one_of(ENABLE_DISABLE),
    Field::integer("register_rate").range(0, 65535),
    Field::integer("invite_rate").range(0, 65535),
    Field::integer("max_dialogs").range(0, 4294967295),
    Field::integer("max_line_length").range(78, 4096),
    Field::string("block_long_lines").one_of(ENABLE_DISABLE),
    Field::string("block_unknown").one_of(ENABLE_DISABLE),
    Field::integer("call_keepalive").range(0, 10080),
    Field::string("block_ack").one_of(ENABLE_DISABLE),
    Field::string("block_bye").one_of(ENABLE_DISABLE),
    Field::string("block_cancel").one_of(ENABLE_DISABLE),
    Field::string("block_info").one_of(ENABLE_DISABLE),
    Field::string("block_invite").one_of(ENABLE_DISABLE),
    Field::string("block_message").one_of(ENABLE_DISABLE),
    Field::string("block_notify").one_of(ENABLE_DISABLE),
    Field::string("block_options").one_of(ENABLE_DISABLE),
    Field::string("block_register").one_of(ENABLE_DISABLE),
    Field::string("block_subscribe").one_of(ENABLE_DISABLE),
    Field::string("block_update").one_of(ENABLE_DISABLE),
    Field::string("contact_fixup").one_of(ENABLE_DISABLE),
    Field::string("nat_trace").one_of(ENABLE_DISABLE),
    Field::string("log_violations").one_of(ENABLE_DISABLE),
    Field::string("log_call_summary").one_of(ENABLE_DISABLE),
    Field::string("preserve_override").one_of(ENABLE_DISABLE),
    Field::string("no_sdp_fixup").one_of(ENABLE_DISABLE),
    Field::string("hnt_restrict_source_ip").one_of(ENABLE_DISABLE),
    Field::integer("provisional_invite_expiry_time").range(10, 3600),
    Field::string("ssl_mode").one_of(&["off", "full"]),
    Field::string("ssl_server_certificate").max_len(35),
    Field::string("ssl_client_certificate").max_len(35),
    Field::string("ssl_min_version")
        .one_of(&["ssl-3.0", "tls-1.0", "tls-1.1", "tls-1.2", "tls-1.3"]),
    Field::string("ssl_max_version")
        .one_of(&["ssl-3.0", "tls-1.0", "tls-1.1", "tls-1.2", "tls-1.3"]),
    Field::string("ssl_auth_client").max_len(35),
    Field::string("ssl_auth_server").max_len(35),
];

const SCCP: &[Field] = &[
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("block_mcast").one_of(ENABLE_DISABLE),
    Field::string("verify_header").one_of(ENABLE_DISABLE),
    Field::string("log_call_summary").one_of(ENABLE_DISABLE),
    Field::string("log_violations").one_of(ENABLE_DISABLE),
    Field::integer("max_calls").range(0, 65535),
];

const MSRP: &[Field] = &[
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("log_violations").one_of(ENABLE_DISABLE),
    Field::integer("max_msg_size").range(0, 65535),
    Field::string("max_msg_size_action").one_of(&["pass", "block", "reset", "monitor"]),
];

const FIELDS: &[Field] = &[
    Field::string("name")
        .required()
        .force_new()
        .max_len(35)
        .describe("Profile name"),
    Field::string("feature_set")
        .one_of(&["flow", "proxy", "ips", "voipd"])
        .since(V6_4),
    Field::string("comment").optional().max_len(255),
    Field::block("sip", SIP).describe("SIP"),
    Field::block("sccp", SCCP).describe("SCCP"),
    Field::block("msrp", MSRP).since(V7_0).describe("MSRP"),
];

pub static VOIP_PROFILE: ResourceDef = ResourceDef {
    type_name: "voip_profile",
    label: "VoipProfile",
    path: "voip/profile",
    key: Some("name"),
    description: "Configure VoIP profiles.",
    fields: FIELDS,
};
