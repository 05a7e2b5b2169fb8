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

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tf_provider::schema::Schema;
use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, DynamicDataSource, DynamicResource, Provider};
use tracing::info;

use crate::client::{FortiClient, RestClient};
use crate::config::ProviderConfig;
use crate::data_source::FortiosDataSource;
use crate::resource::FortiosResource;
use crate::resources;
use crate::session::{Session, SessionSlot};

#[derive(Debug, Default, Clone)]
pub struct FortiosProvider {
    session: SessionSlot,
}

impl FortiosProvider {
    /// Provider already bound to `client`, configuration is then a no-op
    pub fn with_client(client: Arc<dyn FortiClient>, import_all_tables: bool) -> Self {
        Self {
            session: SessionSlot::new(Session {
                client,
                import_all_tables,
            }),
        }
    }
}

#[async_trait]
impl Provider for FortiosProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ProviderConfig::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        if let Value::Value(hostname) = &config.hostname {
            if hostname.trim().is_empty() {
                diags.error_short("`hostname` must not be empty", AttributePath::new("hostname"));
            }
        }
        if let Value::Value(token) = &config.token {
            if token.is_empty() {
                diags.error_short("`token` must not be empty", AttributePath::new("token"));
            }
        }
        Some(())
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        if self.session.is_set().await {
            return Some(());
        }

        let settings = config.resolve(diags)?;
        info!(
            hostname = %settings.rest.hostname,
            vdom = ?settings.rest.vdom,
            %terraform_version,
            "Connecting to FortiOS"
        );
        match RestClient::connect(&settings.rest).await {
            Ok(client) => {
                self.session
                    .set(Session {
                        client: Arc::new(client),
                        import_all_tables: settings.import_all_tables,
                    })
                    .await;
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to connect to FortiOS", format!("{:#}", err));
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        Some(
            resources::ALL
                .iter()
                .map(|def| {
                    (
                        def.type_name.to_owned(),
                        Box::new(FortiosResource::new(def, self.session.clone()))
                            as Box<dyn DynamicResource>,
                    )
                })
                .collect(),
        )
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        Some(
            resources::ALL
                .iter()
                .filter(|def| !def.is_singleton())
                .map(|def| {
                    (
                        def.type_name.to_owned(),
                        Box::new(FortiosDataSource::new(def, self.session.clone()))
                            as Box<dyn DynamicDataSource>,
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::client::memory::MemoryClient;

    use super::*;

    #[test]
    fn every_object_is_registered() {
        let provider = FortiosProvider::default();
        let mut diags = Diagnostics::default();
        let resources = provider.get_resources(&mut diags).expect("resources");
        assert_eq!(resources.len(), resources::ALL.len());
        assert!(resources.contains_key("router_isis"));
        assert!(resources.contains_key("user_ldap"));

        let data_sources = provider.get_data_sources(&mut diags).expect("data sources");
        assert!(data_sources.contains_key("system_admin"));
        assert!(!data_sources.contains_key("router_isis"));
    }

    #[tokio::test]
    async fn empty_hostname_is_rejected() {
        let provider = FortiosProvider::default();
        let mut diags = Diagnostics::default();
        provider
            .validate(
                &mut diags,
                ProviderConfig {
                    hostname: Value::Value(Cow::Borrowed(" ")),
                    token: Value::Unknown,
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].attribute, AttributePath::new("hostname"));
    }

    #[tokio::test]
    async fn configured_provider_keeps_its_client() {
        let provider = FortiosProvider::with_client(Arc::new(MemoryClient::new(None)), true);
        let mut diags = Diagnostics::default();
        let configured = provider
            .configure(&mut diags, "1.9.0".to_owned(), ProviderConfig::default())
            .await;
        assert_eq!(configured, Some(()));
        assert!(diags.errors.is_empty());
        let session = provider.session.get(&mut diags).await.expect("session");
        assert!(session.import_all_tables);
    }
}
