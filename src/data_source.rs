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

use async_trait::async_trait;
use tf_provider::schema::Schema;
use tf_provider::value::{ValueAny, ValueEmpty};
use tf_provider::{AttributePath, DataSource, Diagnostics};
use tracing::debug;

use crate::client::RequestOptions;
use crate::mapping::{as_str, attribute, flatten_object, FlattenOptions, SortMode};
use crate::resource::RETRIES;
use crate::schema::ResourceDef;
use crate::session::SessionSlot;

/// Read-only view of one keyed FortiOS object
#[derive(Debug, Clone)]
pub struct FortiosDataSource {
    def: &'static ResourceDef,
    session: SessionSlot,
}

impl FortiosDataSource {
    pub fn new(def: &'static ResourceDef, session: SessionSlot) -> Self {
        Self { def, session }
    }
}

#[async_trait]
impl DataSource for FortiosDataSource {
    type State<'a> = ValueAny;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(self.def.data_source_schema())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let key = self.def.key?;
        let Some(mkey) = as_str(attribute(&config, key)).filter(|mkey| !mkey.is_empty()) else {
            diags.error_short(
                format!("`{}` must be a known, non empty string", key),
                AttributePath::new(key),
            );
            return None;
        };
        let session = self.session.get(diags).await?;
        let vdom = as_str(attribute(&config, "vdomparam")).map(str::to_owned);

        debug!(data_source = self.def.label, mkey, "Reading");
        let options = RequestOptions {
            vdom: vdom.clone().filter(|vdom| !vdom.is_empty()),
            retries: RETRIES,
        };
        match session.client.read(self.def.path, Some(mkey), &options).await {
            Ok(Some(remote)) => {
                let options = FlattenOptions {
                    all_tables: true,
                    sort: SortMode::default(),
                };
                let mut state = flatten_object(self.def.fields, &remote, &ValueAny::Null, &options);
                // the key is echoed as configured
                state.insert(key.to_owned(), ValueAny::String(mkey.to_owned()));
                state.insert(
                    "vdomparam".to_owned(),
                    vdom.map(ValueAny::String).unwrap_or(ValueAny::Null),
                );
                Some(ValueAny::Map(state))
            }
            Ok(None) => {
                diags.root_error(
                    format!("Error describing {} data source", self.def.label),
                    format!("{} `{}` does not exist", self.def.label, mkey),
                );
                None
            }
            Err(err) => {
                diags.root_error(
                    format!("Error describing {} data source", self.def.label),
                    err.to_string(),
                );
                None
            }
        }
    }
}
