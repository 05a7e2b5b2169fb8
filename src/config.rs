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

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::{Value, ValueBool, ValueString};
use tf_provider::{AttributePath, Diagnostics};

use crate::client::RestConfig;

/// Provider block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub hostname: ValueString<'a>,
    pub token: ValueString<'a>,
    pub insecure: ValueBool,
    pub cabundlefile: ValueString<'a>,
    pub vdom: ValueString<'a>,
    pub http_proxy: ValueString<'a>,
    pub import_all_tables: ValueBool,
}

/// Configuration resolved from the provider block and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rest: RestConfig,
    pub import_all_tables: bool,
}

impl ProviderConfig<'_> {
    pub fn schema() -> Schema {
        let string = |description: &'static str| Attribute {
            attr_type: AttributeType::String,
            description: Description::plain(description),
            constraint: AttributeConstraint::Optional,
            ..Default::default()
        };
        let boolean = |description: &'static str| Attribute {
            attr_type: AttributeType::Bool,
            description: Description::plain(description),
            constraint: AttributeConstraint::Optional,
            ..Default::default()
        };
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "hostname" => string("Address of the FortiGate unit. Can be set with FORTIOS_ACCESS_HOSTNAME."),
                    "token" => Attribute {
                        sensitive: true,
                        ..string("REST API token. Can be set with FORTIOS_ACCESS_TOKEN.")
                    },
                    "insecure" => boolean("Skip the verification of the certificate of the unit. Can be set with FORTIOS_INSECURE."),
                    "cabundlefile" => string("PEM file holding the CA certificates trusted for the unit. Can be set with FORTIOS_CA_CABUNDLE."),
                    "vdom" => string("Default VDOM of the requests. Can be set with FORTIOS_VDOM."),
                    "http_proxy" => string("Proxy used to reach the unit. Can be set with FORTIOS_HTTP_PROXY."),
                    "import_all_tables" => boolean("Read every sub-table of the objects, including the ones that are not configured. Can be set with FORTIOS_IMPORT_TABLE."),
                },
                description: Description::plain("FortiOS"),
                ..Default::default()
            },
        }
    }

    /// Resolve the settings, falling back to the process environment
    pub fn resolve(&self, diags: &mut Diagnostics) -> Option<Settings> {
        self.resolve_with(diags, |name| std::env::var(name).ok())
    }

    /// Resolve the settings, falling back to `env` for unset attributes
    pub fn resolve_with<F>(&self, diags: &mut Diagnostics, env: F) -> Option<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hostname = string(
            diags,
            "hostname",
            &self.hostname,
            "FORTIOS_ACCESS_HOSTNAME",
            &env,
        );
        let token = string(diags, "token", &self.token, "FORTIOS_ACCESS_TOKEN", &env);
        let insecure = boolean(diags, "insecure", &self.insecure, "FORTIOS_INSECURE", &env);
        let cabundle = string(
            diags,
            "cabundlefile",
            &self.cabundlefile,
            "FORTIOS_CA_CABUNDLE",
            &env,
        );
        let vdom = string(diags, "vdom", &self.vdom, "FORTIOS_VDOM", &env);
        let http_proxy = string(
            diags,
            "http_proxy",
            &self.http_proxy,
            "FORTIOS_HTTP_PROXY",
            &env,
        );
        let import_all_tables = boolean(
            diags,
            "import_all_tables",
            &self.import_all_tables,
            "FORTIOS_IMPORT_TABLE",
            &env,
        );

        if hostname.is_none() {
            diags.error(
                "Missing FortiOS hostname",
                "Set `hostname` in the provider block or the FORTIOS_ACCESS_HOSTNAME environment variable.",
                AttributePath::new("hostname"),
            );
        }
        if token.is_none() {
            diags.error(
                "Missing FortiOS API token",
                "Set `token` in the provider block or the FORTIOS_ACCESS_TOKEN environment variable.",
                AttributePath::new("token"),
            );
        }
        if !diags.errors.is_empty() {
            return None;
        }

        Some(Settings {
            rest: RestConfig {
                hostname: hostname?,
                token: token?,
                insecure: insecure.unwrap_or(false),
                cabundle,
                vdom,
                http_proxy,
            },
            import_all_tables: import_all_tables.unwrap_or(false),
        })
    }
}

fn string<F>(
    diags: &mut Diagnostics,
    name: &'static str,
    value: &ValueString<'_>,
    variable: &str,
    env: &F,
) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::Value(value) => Some(value.to_string()),
        Value::Null => env(variable).filter(|value| !value.is_empty()),
        Value::Unknown => {
            diags.error_short(
                format!("`{}` is not known during configuration", name),
                AttributePath::new(name),
            );
            None
        }
    }
}

fn boolean<F>(
    diags: &mut Diagnostics,
    name: &'static str,
    value: &ValueBool,
    variable: &str,
    env: &F,
) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::Value(value) => Some(*value),
        Value::Null => match env(variable)?.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            other => {
                diags.error(
                    format!("Invalid {} environment variable", variable),
                    format!("`{}` is not a boolean.", other),
                    AttributePath::new(name),
                );
                None
            }
        },
        Value::Unknown => {
            diags.error_short(
                format!("`{}` is not known during configuration", name),
                AttributePath::new(name),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn text(s: &str) -> ValueString<'static> {
        Value::Value(Cow::Owned(s.to_owned()))
    }

    #[test]
    fn attributes_take_precedence() {
        let config = ProviderConfig {
            hostname: text("192.0.2.1"),
            token: text("secret"),
            vdom: text("root"),
            insecure: Value::Value(true),
            ..Default::default()
        };
        let mut diags = Diagnostics::default();
        let settings = config
            .resolve_with(
                &mut diags,
                env(&[
                    ("FORTIOS_ACCESS_HOSTNAME", "198.51.100.1"),
                    ("FORTIOS_VDOM", "other"),
                    ("FORTIOS_IMPORT_TABLE", "true"),
                ]),
            )
            .expect("settings");
        assert!(diags.errors.is_empty());
        assert_eq!(settings.rest.hostname, "192.0.2.1");
        assert_eq!(settings.rest.vdom.as_deref(), Some("root"));
        assert!(settings.rest.insecure);
        assert!(settings.import_all_tables);
        assert_eq!(settings.rest.cabundle, None);
    }

    #[test]
    fn environment_fallback() {
        let mut diags = Diagnostics::default();
        let settings = ProviderConfig::default()
            .resolve_with(
                &mut diags,
                env(&[
                    ("FORTIOS_ACCESS_HOSTNAME", "192.0.2.1:8443"),
                    ("FORTIOS_ACCESS_TOKEN", "secret"),
                    ("FORTIOS_INSECURE", "false"),
                    ("FORTIOS_CA_CABUNDLE", "/etc/fortios/ca.pem"),
                    ("FORTIOS_HTTP_PROXY", "http://proxy:3128"),
                ]),
            )
            .expect("settings");
        assert_eq!(settings.rest.hostname, "192.0.2.1:8443");
        assert_eq!(settings.rest.token, "secret");
        assert!(!settings.rest.insecure);
        assert_eq!(settings.rest.cabundle.as_deref(), Some("/etc/fortios/ca.pem"));
        assert_eq!(settings.rest.http_proxy.as_deref(), Some("http://proxy:3128"));
        assert!(!settings.import_all_tables);
    }

    #[test]
    fn missing_and_invalid_values() {
        let mut diags = Diagnostics::default();
        let settings = ProviderConfig {
            token: Value::Unknown,
            ..Default::default()
        }
        .resolve_with(&mut diags, env(&[("FORTIOS_INSECURE", "maybe")]));
        assert!(settings.is_none());
        let attributes: Vec<_> = diags.errors.iter().map(|diag| diag.attribute.clone()).collect();
        assert!(attributes.contains(&AttributePath::new("hostname")));
        assert!(attributes.contains(&AttributePath::new("token")));
        assert!(attributes.contains(&AttributePath::new("insecure")));
    }

    #[test]
    fn schema_hides_token() {
        let schema = ProviderConfig::schema();
        assert!(schema.block.attributes["token"].sensitive);
        assert_eq!(schema.block.attributes.len(), 7);
    }
}
