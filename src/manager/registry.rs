// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry of connected controllers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::controller::Controller;
use crate::error::Error;
use crate::event::{ClimateEvent, DeviceId, EventBus};
use crate::protocol::DeviceClient;

use super::{CompanionConfig, ServiceCall, ServiceReply};

/// Controllers of one host integration, keyed by [`DeviceId`].
///
/// All controllers added here publish on the registry's event bus.
pub struct CompanionRegistry<C: DeviceClient> {
    controllers: RwLock<HashMap<DeviceId, Arc<Controller<C>>>>,
    event_bus: EventBus,
}

impl<C: DeviceClient> CompanionRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_event_bus(EventBus::new())
    }

    /// Creates an empty registry publishing on `event_bus`.
    #[must_use]
    pub fn with_event_bus(event_bus: EventBus) -> Self {
        Self {
            controllers: RwLock::new(HashMap::new()),
            event_bus,
        }
    }

    /// Subscribes to the events of every registered controller.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ClimateEvent> {
        self.event_bus.subscribe()
    }

    // =========================================================================
    // Controller management
    // =========================================================================

    /// Connects a device and registers its controller.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Controller::connect`].
    pub async fn connect(&self, client: C, config: &CompanionConfig) -> Result<DeviceId, Error> {
        let controller = Controller::connect(client, config).await?;
        Ok(self.add(controller).await.id())
    }

    /// Registers an already connected controller.
    pub async fn add(&self, controller: Controller<C>) -> Arc<Controller<C>> {
        let controller = Arc::new(controller.with_event_bus(self.event_bus.clone()));
        let device_id = controller.id();

        self.controllers
            .write()
            .await
            .insert(device_id, Arc::clone(&controller));
        tracing::debug!(device = %device_id, unique_id = controller.unique_id(), "Controller registered");

        controller
    }

    /// Removes a controller.
    ///
    /// Returns `true` if it was registered.
    pub async fn remove(&self, device_id: DeviceId) -> bool {
        self.controllers.write().await.remove(&device_id).is_some()
    }

    /// Returns a registered controller.
    pub async fn get(&self, device_id: DeviceId) -> Option<Arc<Controller<C>>> {
        self.controllers.read().await.get(&device_id).cloned()
    }

    /// Returns all registered ids.
    pub async fn device_ids(&self) -> Vec<DeviceId> {
        self.controllers.read().await.keys().copied().collect()
    }

    /// Returns the number of registered controllers.
    pub async fn len(&self) -> usize {
        self.controllers.read().await.len()
    }

    /// Returns `true` if no controller is registered.
    pub async fn is_empty(&self) -> bool {
        self.controllers.read().await.is_empty()
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Runs a service call on the targeted controllers, or on all of them
    /// when `targets` is `None`, then refreshes each of them with one poll.
    ///
    /// Controllers are served one after the other. Unknown targets are
    /// reported as `Error::DeviceNotFound`.
    pub async fn dispatch(
        &self,
        call: &ServiceCall,
        targets: Option<&[DeviceId]>,
    ) -> Vec<(DeviceId, Result<ServiceReply, Error>)> {
        let mut results = Vec::new();
        let mut selected = Vec::new();
        {
            let controllers = self.controllers.read().await;
            match targets {
                Some(ids) => {
                    for id in ids {
                        match controllers.get(id) {
                            Some(controller) => selected.push(Arc::clone(controller)),
                            None => results.push((*id, Err(Error::DeviceNotFound))),
                        }
                    }
                }
                None => selected.extend(controllers.values().cloned()),
            }
        }

        tracing::debug!(service = call.name(), targets = selected.len(), "Dispatching service");
        for controller in &selected {
            let reply = match call {
                ServiceCall::LearnCommand { slot, timeout } => controller
                    .learn_command(*slot, *timeout)
                    .await
                    .map(ServiceReply::Learned),
                ServiceCall::SendCommand {
                    command,
                    repeats,
                    delay,
                } => controller
                    .send_command(command, *repeats, *delay)
                    .await
                    .map(ServiceReply::Sent),
            };
            results.push((controller.id(), reply));
        }

        for controller in &selected {
            controller.update().await;
        }

        results
    }
}

impl<C: DeviceClient> Default for CompanionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DeviceClient> fmt::Debug for CompanionRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanionRegistry")
            .field("event_bus", &self.event_bus)
            .finish_non_exhaustive()
    }
}
