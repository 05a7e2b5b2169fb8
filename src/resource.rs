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

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tf_provider::schema::Schema;
use tf_provider::value::{Value, ValueAny, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, Resource};
use tracing::{debug, info, warn};

use crate::client::RequestOptions;
use crate::mapping::{
    as_str, attribute, expand_object, flatten_object, is_set, object_mut, reset_object,
    FlattenOptions, Payload, SortMode,
};
use crate::schema::{Field, FieldType, ResourceDef};
use crate::session::{Session, SessionSlot};
use crate::validate::validate_config;

/// Retries requested from the client on each call
pub const RETRIES: u32 = 1;

/// Private state carried from an import to the next read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PendingImport {
    pub imported: bool,
}

/// Resource mirroring one FortiOS object described by a [`ResourceDef`]
#[derive(Debug, Clone)]
pub struct FortiosResource {
    def: &'static ResourceDef,
    session: SessionSlot,
}

impl FortiosResource {
    pub fn new(def: &'static ResourceDef, session: SessionSlot) -> Self {
        Self { def, session }
    }

    fn options(state: &ValueAny) -> RequestOptions {
        RequestOptions {
            vdom: as_str(attribute(state, "vdomparam"))
                .filter(|vdom| !vdom.is_empty())
                .map(str::to_owned),
            retries: RETRIES,
        }
    }

    /// Remote key of the object, `None` for singleton objects
    fn mkey<'s>(&self, state: &'s ValueAny) -> Option<&'s str> {
        if self.def.is_singleton() {
            None
        } else {
            as_str(attribute(state, "id"))
        }
    }

    /// ID of a freshly written object
    fn new_id(&self, mkey: Option<String>, state: &ValueAny) -> String {
        mkey.filter(|mkey| !mkey.is_empty())
            .or_else(|| {
                let key = self.def.key?;
                match attribute(state, key) {
                    ValueAny::String(s) => Some(s.clone()),
                    ValueAny::Number(n) => Some(n.to_string()),
                    _ => None,
                }
            })
            .unwrap_or_else(|| self.def.label.to_owned())
    }

    /// Options of a refresh
    ///
    /// Sub-blocks absent from `state` are populated in all-tables mode and
    /// while an import is pending.
    fn read_options(&self, session: &Session, state: &ValueAny, importing: bool) -> FlattenOptions {
        FlattenOptions {
            all_tables: importing
                || session.import_all_tables
                || matches!(attribute(state, "get_all_tables"), ValueAny::Bool(true)),
            ..Self::write_options(state)
        }
    }

    /// Options of the read following a write, only the planned sub-blocks
    /// are populated so the result matches the plan
    fn write_options(state: &ValueAny) -> FlattenOptions {
        FlattenOptions {
            all_tables: false,
            sort: SortMode::from_setting(as_str(attribute(state, "dynamic_sort_subtable"))),
        }
    }

    /// Local state of a remote object
    fn build_state(
        &self,
        remote: &Payload,
        prior: &ValueAny,
        id: String,
        options: &FlattenOptions,
    ) -> ValueAny {
        let mut state = flatten_object(self.def.fields, remote, prior, options);
        state.insert("id".to_owned(), ValueAny::String(id));
        state.insert("vdomparam".to_owned(), known(attribute(prior, "vdomparam")));
        if self.def.has_sub_blocks() {
            for (name, default) in self.extra_defaults() {
                let value = match attribute(prior, name) {
                    value if is_set(value) => value.clone(),
                    _ => default,
                };
                state.insert(name.to_owned(), value);
            }
        }
        ValueAny::Map(state)
    }

    fn extra_defaults(&self) -> [(&'static str, ValueAny); 2] {
        [
            ("dynamic_sort_subtable", ValueAny::String("false".to_owned())),
            ("get_all_tables", ValueAny::Bool(false)),
        ]
    }

    /// Read the object back after a write
    async fn resync(
        &self,
        diags: &mut Diagnostics,
        session: &Session,
        state: &ValueAny,
        id: String,
        action: &str,
    ) -> Option<ValueAny> {
        let mkey = (!self.def.is_singleton()).then_some(id.as_str());
        match session
            .client
            .read(self.def.path, mkey, &Self::options(state))
            .await
        {
            Ok(Some(remote)) => Some(self.build_state(
                &remote,
                state,
                id,
                &Self::write_options(state),
            )),
            Ok(None) => {
                diags.root_error(
                    format!("Error {} {} resource", action, self.def.label),
                    format!(
                        "{} `{}` cannot be found after being written",
                        self.def.label, id
                    ),
                );
                None
            }
            Err(err) => {
                diags.root_error(
                    format!("Error reading {} resource", self.def.label),
                    err.to_string(),
                );
                None
            }
        }
    }

    fn import_state(&self, id: String) -> ValueAny {
        let mut state: BTreeMap<String, ValueAny> = self
            .def
            .fields
            .iter()
            .map(|field| (field.name.to_owned(), empty_value(field)))
            .collect();
        state.insert("id".to_owned(), ValueAny::String(id));
        state.insert("vdomparam".to_owned(), ValueAny::Null);
        if self.def.has_sub_blocks() {
            state.extend(
                self.extra_defaults()
                    .into_iter()
                    .map(|(name, value)| (name.to_owned(), value)),
            );
        }
        ValueAny::Map(state)
    }
}

fn known(value: &ValueAny) -> ValueAny {
    match value {
        ValueAny::Unknown => ValueAny::Null,
        value => value.clone(),
    }
}

fn empty_value(field: &Field) -> ValueAny {
    match field.kind {
        FieldType::Block(_) | FieldType::Table(_) => ValueAny::List(Vec::new()),
        _ => ValueAny::Null,
    }
}

/// Fill the values left to the provider when planning
///
/// Defaults are applied when `defaults` is set, computed values without one
/// become unknown.
fn plan_fields(fields: &[Field], object: &mut ValueAny, defaults: bool) {
    let Some(object) = object_mut(object) else {
        return;
    };
    for field in fields {
        let value = object
            .entry(field.name.to_owned())
            .or_insert(ValueAny::Null);
        match field.sub_fields() {
            Some(sub) => {
                if matches!(value, ValueAny::Null) {
                    *value = ValueAny::List(Vec::new());
                }
                if let ValueAny::List(rows) = value {
                    for row in rows {
                        plan_fields(sub, row, defaults);
                    }
                }
            }
            None => {
                if !matches!(value, ValueAny::Null) || field.sensitive {
                    continue;
                }
                match field.default {
                    Some(default) if defaults => *value = default.to_value(),
                    _ if field.presence.is_computed() => *value = ValueAny::Unknown,
                    _ => (),
                }
            }
        }
    }
}

#[async_trait]
impl Resource for FortiosResource {
    type State<'a> = ValueAny;
    type PrivateState<'a> = Value<PendingImport>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(self.def.resource_schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        validate_config(diags, self.def, &config);
        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let session = self.session.get(diags).await?;
        let Some(id) = as_str(attribute(&state, "id")).map(str::to_owned) else {
            diags.root_error_short(format!("{} resource has no ID", self.def.label));
            return None;
        };
        let importing = matches!(
            private_state,
            Value::Value(PendingImport { imported: true })
        );

        debug!(resource = self.def.label, %id, importing, "Reading");
        match session
            .client
            .read(self.def.path, self.mkey(&state), &Self::options(&state))
            .await
        {
            Ok(Some(remote)) => {
                let options = self.read_options(&session, &state, importing);
                Some((self.build_state(&remote, &state, id, &options), Value::Null))
            }
            Ok(None) => {
                warn!(
                    resource = self.def.label,
                    %id,
                    "Object not found, removing it from the state"
                );
                Some((ValueAny::Null, Value::Null))
            }
            Err(err) => {
                diags.root_error(
                    format!("Error reading {} resource", self.def.label),
                    err.to_string(),
                );
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut planned = proposed_state;
        plan_fields(self.def.fields, &mut planned, true);
        if let Some(object) = object_mut(&mut planned) {
            object.insert("id".to_owned(), ValueAny::Unknown);
            if self.def.has_sub_blocks() {
                for (name, default) in self.extra_defaults() {
                    let value = object.entry(name.to_owned()).or_insert(ValueAny::Null);
                    if matches!(value, ValueAny::Null) {
                        *value = default;
                    }
                }
            }
        }
        Some((planned, Value::Null))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>, Vec<AttributePath>)> {
        if proposed_state == prior_state {
            return Some((proposed_state, prior_private_state, Vec::new()));
        }

        let replace: Vec<AttributePath> = self
            .def
            .fields
            .iter()
            .filter(|field| field.force_new)
            .filter(|field| {
                attribute(&prior_state, field.name) != attribute(&proposed_state, field.name)
            })
            .map(|field| AttributePath::new(field.name))
            .collect();

        let mut planned = proposed_state;
        plan_fields(self.def.fields, &mut planned, false);
        if !replace.is_empty() {
            if let Some(object) = object_mut(&mut planned) {
                object.insert("id".to_owned(), ValueAny::Unknown);
            }
        }
        Some((planned, prior_private_state, replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        _prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(Value::Null)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let session = self.session.get(diags).await?;
        let payload = match expand_object(
            self.def.fields,
            &planned_state,
            None,
            session.client.firmware_version(),
        ) {
            Ok(payload) => payload,
            Err(err) => {
                diags.root_error(
                    format!("Error creating {} resource while getting object", self.def.label),
                    err.to_string(),
                );
                return None;
            }
        };

        let options = Self::options(&planned_state);
        let response = if self.def.is_singleton() {
            session
                .client
                .update(self.def.path, None, &payload, &options)
                .await
        } else {
            session.client.create(self.def.path, &payload, &options).await
        };
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                diags.root_error(
                    format!("Error creating {} resource", self.def.label),
                    err.to_string(),
                );
                return None;
            }
        };

        let id = self.new_id(response.mkey, &planned_state);
        info!(resource = self.def.label, %id, "Created");
        let state = self
            .resync(diags, &session, &planned_state, id, "creating")
            .await?;
        Some((state, Value::Null))
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let session = self.session.get(diags).await?;
        let payload = match expand_object(
            self.def.fields,
            &planned_state,
            Some(&prior_state),
            session.client.firmware_version(),
        ) {
            Ok(payload) => payload,
            Err(err) => {
                diags.root_error(
                    format!("Error updating {} resource while getting object", self.def.label),
                    err.to_string(),
                );
                return None;
            }
        };

        let response = match session
            .client
            .update(
                self.def.path,
                self.mkey(&prior_state),
                &payload,
                &Self::options(&planned_state),
            )
            .await
        {
            Ok(response) => response,
            Err(err) => {
                diags.root_error(
                    format!("Error updating {} resource", self.def.label),
                    err.to_string(),
                );
                return None;
            }
        };

        let id = match response.mkey.filter(|mkey| !mkey.is_empty()) {
            Some(mkey) => mkey,
            None => self.new_id(
                as_str(attribute(&prior_state, "id")).map(str::to_owned),
                &planned_state,
            ),
        };
        info!(resource = self.def.label, %id, "Updated");
        let state = self
            .resync(diags, &session, &planned_state, id, "updating")
            .await?;
        Some((state, Value::Null))
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let session = self.session.get(diags).await?;
        let options = Self::options(&prior_state);
        let firmware = session.client.firmware_version();
        let result = match self.mkey(&prior_state) {
            Some(mkey) => session.client.delete(self.def.path, mkey, &options).await,
            None if self.def.is_singleton() => session
                .client
                .update(
                    self.def.path,
                    None,
                    &reset_object(self.def.fields, firmware),
                    &options,
                )
                .await
                .map(|_| ()),
            None => {
                diags.root_error_short(format!("{} resource has no ID", self.def.label));
                return None;
            }
        };
        match result {
            Ok(()) => {
                info!(resource = self.def.label, "Deleted");
                Some(())
            }
            Err(err) => {
                diags.root_error(
                    format!("Error deleting {} resource", self.def.label),
                    err.to_string(),
                );
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        if id.is_empty() {
            diags.root_error_short(format!(
                "Cannot import {} with an empty ID",
                self.def.label
            ));
            return None;
        }
        debug!(resource = self.def.label, %id, "Importing");
        Some((
            self.import_state(id),
            Value::Value(PendingImport { imported: true }),
        ))
    }
}
