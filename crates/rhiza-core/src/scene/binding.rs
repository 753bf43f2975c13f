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

//! The declarative scene-binding marker and its global index.
//!
//! A [`SceneBinding`] expresses "register these components into the
//! container" intent, authored in the scene and read-only to the
//! orchestration. The [`SceneBindingIndex`] is the externally maintained
//! registry of every live marker, including ones on inactive or detached
//! nodes that the local hierarchy walk cannot see.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::component::{Component, ComponentSlot};

/// Identity of a composition root, used to claim ownership of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Generates a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The rule determining under which type(s) a component instance is
/// registered.
///
/// The set is closed: every dispatch site matches exhaustively, so adding
/// a variant fails compilation until each one is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindStrategy {
    /// Register under the component's concrete type only.
    ToSelf,
    /// Register under every interface the component declares.
    AllInterfaces,
    /// Register under every declared interface and the concrete type.
    AllInterfacesAndSelf,
}

/// A declarative marker component: "register these target components into
/// the container under this strategy".
///
/// A marker is only acted upon by a given composition root if it is
/// enabled and its owner is either unset (claimed by whichever root finds
/// it in its subtree) or set to that root specifically (found through the
/// global index).
pub struct SceneBinding {
    name: String,
    identifier: String,
    strategy: BindStrategy,
    owner: Option<ContextId>,
    enabled: bool,
    targets: Vec<ComponentSlot>,
}

impl SceneBinding {
    /// Creates an enabled, ownerless, anonymous marker with no targets.
    pub fn new(name: impl Into<String>, strategy: BindStrategy) -> Self {
        Self {
            name: name.into(),
            identifier: String::new(),
            strategy,
            owner: None,
            enabled: true,
            targets: Vec::new(),
        }
    }

    /// Sets the binding identifier. Whitespace-only identifiers are
    /// treated as anonymous at classification time.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Claims this marker for a specific composition root.
    #[must_use]
    pub fn owned_by(mut self, owner: ContextId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Disables the marker; disabled markers are skipped entirely.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Adds a target component.
    #[must_use]
    pub fn with_target(mut self, target: Arc<dyn Component>) -> Self {
        self.targets.push(Some(target));
        self
    }

    /// Records a broken target reference, as scene loading does when a
    /// referenced component cannot be resolved.
    #[must_use]
    pub fn with_missing_target(mut self) -> Self {
        self.targets.push(None);
        self
    }

    /// The raw, untrimmed identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The binding strategy.
    #[must_use]
    pub fn strategy(&self) -> BindStrategy {
        self.strategy
    }

    /// The owning root, if the marker was explicitly claimed.
    #[must_use]
    pub fn owner(&self) -> Option<ContextId> {
        self.owner
    }

    /// Whether the marker is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The target component slots, in declaration order.
    #[must_use]
    pub fn targets(&self) -> &[ComponentSlot] {
        &self.targets
    }
}

impl Component for SceneBinding {
    fn component_name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// The global registry of all live scene-binding markers.
///
/// Maintained by the scene loader as markers are created; entries are held
/// weakly so the index never extends a marker's lifetime. Iteration skips
/// markers that have since been dropped.
#[derive(Default)]
pub struct SceneBindingIndex {
    entries: Vec<Weak<SceneBinding>>,
}

impl SceneBindingIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a marker in the index.
    pub fn register(&mut self, binding: &Arc<SceneBinding>) {
        self.entries.push(Arc::downgrade(binding));
    }

    /// Returns every marker still alive, in registration order.
    #[must_use]
    pub fn iter_live(&self) -> Vec<Arc<SceneBinding>> {
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    /// Drops index entries whose markers are gone.
    pub fn prune(&mut self) {
        self.entries.retain(|entry| entry.strong_count() > 0);
    }

    /// Number of index entries, dead ones included until [`prune`](Self::prune).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
