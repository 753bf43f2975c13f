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

//! The slice of the scene graph the composition root reads.
//!
//! This module is a contract, not a scene engine: nodes, components, the
//! declarative scene-binding marker, and the installer-template hook are
//! exactly what the orchestration needs to enumerate and classify, nothing
//! more. The scene system that authors and loads these structures lives
//! outside this crate.

mod binding;
mod component;
mod node;
mod template;

pub use binding::{BindStrategy, ContextId, SceneBinding, SceneBindingIndex};
pub use component::{Component, ComponentSlot};
pub use node::{SceneNode, BACKUP_STORAGE_NODE};
pub use template::InstallerTemplate;
