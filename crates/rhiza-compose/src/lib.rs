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

//! # Rhiza Compose
//!
//! The composition-root orchestration: aggregating installers from their
//! declared sources into one deterministic install sequence, and
//! discovering declarative scene-binding markers through the local
//! hierarchy walk and the global marker index.
//!
//! Both phases run synchronously during setup, installers first:
//!
//! ```no_run
//! use rhiza_compose::SceneContext;
//! use rhiza_core::{DiContainer, SceneBindingIndex, SceneNode};
//!
//! # fn main() -> Result<(), rhiza_core::CompositionError> {
//! let mut context = SceneContext::new(SceneNode::new("root"));
//! let mut container = DiContainer::new();
//! let index = SceneBindingIndex::new();
//!
//! context.install_installers_default(&mut container)?;
//! context.install_scene_bindings(&mut container, &index);
//! # Ok(())
//! # }
//! ```

mod context;
mod installers;
mod scene_bindings;

pub use context::SceneContext;
