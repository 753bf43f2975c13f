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

//! # Rhiza Core
//!
//! Contracts and core types shared by the composition-root orchestration:
//! the container surface installers configure, the installer and scene
//! component traits, and the declarative scene-binding model.

#![warn(missing_docs)]

pub mod container;
pub mod error;
pub mod installer;
pub mod scene;

pub use container::DiContainer;
pub use error::CompositionError;
pub use installer::{ArgumentOverrides, Installer, InstallerDescriptor, TypedValue};
pub use scene::{
    BindStrategy, Component, ContextId, InstallerTemplate, SceneBinding, SceneBindingIndex,
    SceneNode,
};
