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

use std::sync::Arc;

use tf_provider::Diagnostics;
use tokio::sync::RwLock;

use crate::client::FortiClient;

/// Connection shared by every resource once the provider is configured
#[derive(Debug, Clone)]
pub struct Session {
    pub client: Arc<dyn FortiClient>,
    /// Read every sub-table, even the ones the configuration does not hold
    pub import_all_tables: bool,
}

/// Slot filled at configure time
///
/// Resources are registered before the provider is configured, they hold a
/// clone of the slot and look the session up on each request.
#[derive(Debug, Clone, Default)]
pub struct SessionSlot(Arc<RwLock<Option<Session>>>);

impl SessionSlot {
    pub fn new(session: Session) -> Self {
        Self(Arc::new(RwLock::new(Some(session))))
    }

    pub async fn set(&self, session: Session) {
        *self.0.write().await = Some(session);
    }

    pub async fn is_set(&self) -> bool {
        self.0.read().await.is_some()
    }

    /// Get the session, reporting an error if the provider is not configured
    pub async fn get(&self, diags: &mut Diagnostics) -> Option<Session> {
        let session = self.0.read().await.clone();
        if session.is_none() {
            diags.root_error(
                "FortiOS provider is not configured",
                "The provider must be configured before resources can reach the FortiGate unit.",
            );
        }
        session
    }
}
