// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
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

//! The scene-binding discovery phase.
//!
//! Two passes feed one classification routine and are disjoint by
//! ownership: the local hierarchy walk acts only on markers with no
//! explicit owner, and the global index pass acts only on markers owned by
//! this context. A marker is therefore never processed twice, and markers
//! on inactive or detached nodes are still reachable when explicitly
//! owned.

use std::sync::Arc;

use rhiza_core::container::DiContainer;
use rhiza_core::scene::{BindStrategy, Component, SceneBinding, SceneBindingIndex};

use crate::context::SceneContext;

impl SceneContext {
    /// Discovers scene-binding markers belonging to this context and
    /// registers their targets into `container`.
    ///
    /// Never fails: markers that are disabled, empty, or carry broken
    /// target references are logged and skipped.
    pub fn install_scene_bindings(
        &self,
        container: &mut DiContainer,
        index: &SceneBindingIndex,
    ) {
        // Local pass: ownerless markers reachable from the root.
        for component in self.root().collect_injectable_components() {
            let Ok(binding) = component.as_any_arc().downcast::<SceneBinding>() else {
                continue;
            };
            if binding.owner().is_none() {
                self.install_scene_binding(container, &binding);
            }
        }

        // Global pass: markers that claimed this context explicitly. The
        // hierarchy walk cannot see inactive or detached nodes, which is
        // why this second source exists at all.
        for binding in index.iter_live() {
            if binding.owner() == Some(self.id()) {
                self.install_scene_binding(container, &binding);
            }
        }
    }

    fn install_scene_binding(&self, container: &mut DiContainer, binding: &Arc<SceneBinding>) {
        if !binding.is_enabled() {
            return;
        }

        if binding.targets().is_empty() {
            log::warn!(
                "SceneContext: scene binding '{}' has an empty component list",
                binding.component_name()
            );
            return;
        }

        let identifier = if binding.identifier().trim().is_empty() {
            None
        } else {
            Some(binding.identifier())
        };

        for slot in binding.targets() {
            let Some(component) = slot else {
                log::warn!(
                    "SceneContext: found missing component on scene binding '{}'",
                    binding.component_name()
                );
                continue;
            };

            let instance = component.clone().as_any_arc();
            match binding.strategy() {
                BindStrategy::ToSelf => {
                    container
                        .bind(identifier, component.as_any().type_id())
                        .from_instance(instance);
                }
                BindStrategy::AllInterfaces => {
                    container
                        .bind_all_interfaces(identifier, component.as_ref())
                        .from_instance(instance);
                }
                BindStrategy::AllInterfacesAndSelf => {
                    container
                        .bind_all_interfaces_and_self(identifier, component.as_ref())
                        .from_instance(instance);
                }
            }
        }
    }
}
