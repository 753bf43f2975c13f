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

//! Scene nodes and the bottom-up injectable-component walk.

use std::sync::Arc;

use super::component::{Component, ComponentSlot};

/// Name of the editor's backup-storage node. Missing component slots on it
/// are a known harmless artifact and are skipped without a warning.
pub const BACKUP_STORAGE_NODE: &str = "scene_backup_storage";

/// A node in the scene hierarchy: a name, an active flag, component slots,
/// and child nodes.
///
/// An inactive node is invisible to the local hierarchy walk, subtree
/// included; markers on inactive nodes are only reachable through the
/// global [`SceneBindingIndex`](super::SceneBindingIndex).
pub struct SceneNode {
    name: String,
    active: bool,
    components: Vec<ComponentSlot>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an active, empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the node participates in the local hierarchy walk.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activates or deactivates the node (and thereby its subtree).
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Attaches a component to this node.
    pub fn add_component(&mut self, component: Arc<dyn Component>) {
        self.components.push(Some(component));
    }

    /// Records a broken component reference on this node, as a scene
    /// loader does when a referenced script cannot be resolved.
    pub fn add_missing_component(&mut self) {
        self.components.push(None);
    }

    /// Attaches `child` under this node.
    pub fn attach_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// The node's component slots, in declaration order.
    #[must_use]
    pub fn components(&self) -> &[ComponentSlot] {
        &self.components
    }

    /// The node's children, in attachment order.
    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Collects every injectable component reachable from this node,
    /// bottom-up (children before the node's own components).
    ///
    /// Installer-typed components are excluded: installers are injected
    /// before they are installed, never alongside ordinary components.
    /// A missing component slot logs a warning and is skipped, except on
    /// the well-known [`BACKUP_STORAGE_NODE`].
    #[must_use]
    pub fn collect_injectable_components(&self) -> Vec<Arc<dyn Component>> {
        let mut collected = Vec::new();
        self.collect_injectable_into(&mut collected);
        collected
    }

    fn collect_injectable_into(&self, out: &mut Vec<Arc<dyn Component>>) {
        if !self.active {
            return;
        }

        for child in &self.children {
            child.collect_injectable_into(out);
        }

        for slot in &self.components {
            match slot {
                Some(component) => {
                    if component.as_installer().is_some() {
                        continue;
                    }
                    out.push(component.clone());
                }
                None => {
                    if self.name != BACKUP_STORAGE_NODE {
                        log::warn!(
                            "SceneNode: found missing component on '{}', possible broken reference",
                            self.name
                        );
                    }
                }
            }
        }
    }
}
