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

use super::{V6_2, V6_4, V7_0, V7_2};

const TCP_WINDOW_TYPES: &[&str] = &["system", "static", "dynamic", "auto-tuning"];

const HTTP: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("inspect_all").one_of(ENABLE_DISABLE),
    Field::string("options").describe("One or more options that can be applied to the session"),
    Field::integer("comfort_interval").range(1, 900),
    Field::integer("comfort_amount").range(1, 65535),
    Field::string("range_block").one_of(ENABLE_DISABLE),
    Field::string("strip_x_forwarded_for").one_of(ENABLE_DISABLE),
    Field::string("post_lang"),
    Field::string("streaming_content_bypass").one_of(ENABLE_DISABLE),
    Field::string("switching_protocols").one_of(&["bypass", "block"]),
    Field::string("fortinet_bar").one_of(ENABLE_DISABLE),
    Field::integer("fortinet_bar_port").range(1, 65535),
    Field::string("proxy_after_tcp_handshake").one_of(ENABLE_DISABLE).since(V6_2),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::integer("stream_based_uncompressed_limit").range(0, 4095).since(V6_4),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
    Field::string("tcp_window_type").one_of(TCP_WINDOW_TYPES),
    Field::integer("tcp_window_minimum").range(65536, 1048576),
    Field::integer("tcp_window_maximum").range(1048576, 16777216),
    Field::integer("tcp_window_size").range(65536, 16777216),
    Field::string("ssl_offloaded").one_of(&["no", "yes"]),
    Field::string("address_ip_rating").one_of(ENABLE_DISABLE).since(V7_0),
    Field::string("unknown_http_version").one_of(&["reject", "tunnel", "best-effort"]),
    Field::string("tunnel_non_http").one_of(ENABLE_DISABLE),
    Field::integer("block_page_status_code").range(100, 599),
    Field::integer("retry_count").range(0, 100),
    Field::string("verify_dns_for_policy_matching").one_of(ENABLE_DISABLE).since(V7_2),
];

const FTP: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("inspect_all").one_of(ENABLE_DISABLE),
    Field::string("options"),
    Field::integer("comfort_interval").range(1, 900),
    Field::integer("comfort_amount").range(1, 65535),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::integer("stream_based_uncompressed_limit").range(0, 4095).since(V6_4),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
    Field::string("tcp_window_type").one_of(TCP_WINDOW_TYPES),
    Field::integer("tcp_window_minimum").range(65536, 1048576),
    Field::integer("tcp_window_maximum").range(1048576, 16777216),
    Field::integer("tcp_window_size").range(65536, 16777216),
    Field::string("ssl_offloaded").one_of(&["no", "yes"]),
    Field::string("explicit_ftp_tls").one_of(ENABLE_DISABLE).since(V7_0),
];

const DNS: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
];

/// IMAP and POP3
const MAILBOX: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("inspect_all").one_of(ENABLE_DISABLE),
    Field::string("proxy_after_tcp_handshake").one_of(ENABLE_DISABLE).since(V6_2),
    Field::string("options"),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
    Field::string("ssl_offloaded").one_of(&["no", "yes"]),
];

const SMTP: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("inspect_all").one_of(ENABLE_DISABLE),
    Field::string("proxy_after_tcp_handshake").one_of(ENABLE_DISABLE).since(V6_2),
    Field::string("options"),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
    Field::string("server_busy").one_of(ENABLE_DISABLE),
    Field::string("ssl_offloaded").one_of(&["no", "yes"]),
];

const NNTP: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("inspect_all").one_of(ENABLE_DISABLE),
    Field::string("proxy_after_tcp_handshake").one_of(ENABLE_DISABLE).since(V6_2),
    Field::string("options"),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
];

const SERVER_KEYTAB: &[Field] = &[
    Field::string("principal").max_len(511).describe("Service principal"),
    Field::string("keytab")
        .optional()
        .sensitive()
        .max_len(8191)
        .describe("Base64 encoded keytab file containing credential of the server"),
];

const CIFS: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("options"),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
    Field::string("tcp_window_type").one_of(TCP_WINDOW_TYPES),
    Field::integer("tcp_window_minimum").range(65536, 1048576),
    Field::integer("tcp_window_maximum").range(1048576, 16777216),
    Field::integer("tcp_window_size").range(65536, 16777216),
    Field::string("server_credential_type")
        .one_of(&["none", "credential-replication", "credential-keytab"])
        .since(V6_4),
    Field::string("domain_controller").max_len(63).since(V6_4),
    Field::table("server_keytab", SERVER_KEYTAB, Some("principal")).since(V6_4),
];

const MAPI: &[Field] = &[
    Field::integer("ports").range(1, 65535),
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("options"),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
];

const SSH: &[Field] = &[
    Field::string("options"),
    Field::integer("comfort_interval").range(1, 900),
    Field::integer("comfort_amount").range(1, 65535),
    Field::integer("oversize_limit").range(1, 4095),
    Field::integer("uncompressed_oversize_limit").range(0, 4095),
    Field::integer("uncompressed_nest_limit").range(2, 100),
    Field::integer("stream_based_uncompressed_limit").range(0, 4095).since(V6_4),
    Field::string("scan_bzip2").one_of(ENABLE_DISABLE),
    Field::string("tcp_window_type").one_of(TCP_WINDOW_TYPES),
    Field::integer("tcp_window_minimum").range(65536, 1048576),
    Field::integer("tcp_window_maximum").range(1048576, 16777216),
    Field::integer("tcp_window_size").range(65536, 16777216),
    Field::string("ssl_offloaded").one_of(&["no", "yes"]),
];

const MAIL_SIGNATURE: &[Field] = &[
    Field::string("status").one_of(ENABLE_DISABLE),
    Field::string("signature").max_len(1023),
];

const FIELDS: &[Field] = &[
    Field::string("name")
        .required()
        .force_new()
        .max_len(47)
        .describe("Name"),
    Field::string("comment").optional().max_len(255),
    Field::string("feature_set").one_of(&["flow", "proxy"]).since(V7_2),
    Field::string("replacemsg_group").max_len(35),
    Field::string("oversize_log").one_of(ENABLE_DISABLE),
    Field::string("switching_protocols_log").one_of(ENABLE_DISABLE),
    Field::string("rpc_over_http").one_of(ENABLE_DISABLE),
    Field::block("http", HTTP).describe("Configure HTTP protocol options"),
    Field::block("ftp", FTP).describe("Configure FTP protocol options"),
    Field::block("imap", MAILBOX).describe("Configure IMAP protocol options"),
    Field::block("mapi", MAPI).describe("Configure MAPI protocol options"),
    Field::block("pop3", MAILBOX).describe("Configure POP3 protocol options"),
    Field::block("smtp", SMTP).describe("Configure SMTP protocol options"),
    Field::block("nntp", NNTP).describe("Configure NNTP protocol options"),
    Field::block("ssh", SSH).describe("Configure SFTP and SCP protocol options"),
    Field::block("dns", DNS).describe("Configure DNS protocol options"),
    Field::block("cifs", CIFS).since(V6_2).describe("Configure CIFS protocol options"),
    Field::block("mail_signature", MAIL_SIGNATURE).describe("Configure Mail signature"),
];

pub static FIREWALL_PROFILEPROTOCOLOPTIONS: ResourceDef = ResourceDef {
    type_name: "firewall_profileprotocoloptions",
    label: "FirewallProfileProtocolOptions",
    path: "firewall/profile-protocol-options",
    key: Some("name"),
    description: "Configure protocol options.",
    fields: FIELDS,
};
