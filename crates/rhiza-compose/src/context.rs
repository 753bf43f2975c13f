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

//! The composition root: identity, scene root, and declared installers.

use std::sync::Arc;

use rhiza_core::installer::Installer;
use rhiza_core::scene::{ContextId, InstallerTemplate, SceneNode};

/// A composition root anchored at a scene node.
///
/// Holds the four installer source lists in their fixed installation
/// order: programmatic installers (set only through code), inline
/// installers declared on the root, data-asset-backed installers, and
/// installer templates instantiated lazily at install time.
///
/// The scene-declared lists hold `Option` slots because they are resolved
/// from serialized scene references; a slot left `None` by loading is a
/// configuration error reported by `install_installers`.
pub struct SceneContext {
    id: ContextId,
    root: SceneNode,
    programmatic_installers: Vec<Arc<dyn Installer>>,
    inline_installers: Vec<Option<Arc<dyn Installer>>>,
    asset_installers: Vec<Option<Arc<dyn Installer>>>,
    installer_templates: Vec<Option<Arc<dyn InstallerTemplate>>>,
}

impl SceneContext {
    /// Creates a context rooted at `root` with a fresh identity and no
    /// declared installers.
    #[must_use]
    pub fn new(root: SceneNode) -> Self {
        Self {
            id: ContextId::new(),
            root,
            programmatic_installers: Vec::new(),
            inline_installers: Vec::new(),
            asset_installers: Vec::new(),
            installer_templates: Vec::new(),
        }
    }

    /// This context's identity, matched against marker ownership.
    #[must_use]
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// The scene node this context is rooted at.
    #[must_use]
    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    /// Mutable access to the root node.
    pub fn root_mut(&mut self) -> &mut SceneNode {
        &mut self.root
    }

    /// Programmatically supplied installers, installed first.
    #[must_use]
    pub fn programmatic_installers(&self) -> &[Arc<dyn Installer>] {
        &self.programmatic_installers
    }

    /// Replaces the programmatic installer list.
    pub fn set_programmatic_installers(
        &mut self,
        installers: impl IntoIterator<Item = Arc<dyn Installer>>,
    ) {
        self.programmatic_installers.clear();
        self.programmatic_installers.extend(installers);
    }

    /// Appends a programmatic installer.
    pub fn add_programmatic_installer(&mut self, installer: Arc<dyn Installer>) {
        self.programmatic_installers.push(installer);
    }

    /// Inline installer slots declared on the root.
    #[must_use]
    pub fn inline_installers(&self) -> &[Option<Arc<dyn Installer>>] {
        &self.inline_installers
    }

    /// Replaces the inline installer slots.
    pub fn set_inline_installers(
        &mut self,
        installers: impl IntoIterator<Item = Option<Arc<dyn Installer>>>,
    ) {
        self.inline_installers.clear();
        self.inline_installers.extend(installers);
    }

    /// Appends a resolved inline installer.
    pub fn add_inline_installer(&mut self, installer: Arc<dyn Installer>) {
        self.inline_installers.push(Some(installer));
    }

    /// Data-asset-backed installer slots.
    #[must_use]
    pub fn asset_installers(&self) -> &[Option<Arc<dyn Installer>>] {
        &self.asset_installers
    }

    /// Replaces the data-asset-backed installer slots.
    pub fn set_asset_installers(
        &mut self,
        installers: impl IntoIterator<Item = Option<Arc<dyn Installer>>>,
    ) {
        self.asset_installers.clear();
        self.asset_installers.extend(installers);
    }

    /// Appends a resolved data-asset-backed installer.
    pub fn add_asset_installer(&mut self, installer: Arc<dyn Installer>) {
        self.asset_installers.push(Some(installer));
    }

    /// Installer template slots, instantiated lazily at install time.
    #[must_use]
    pub fn installer_templates(&self) -> &[Option<Arc<dyn InstallerTemplate>>] {
        &self.installer_templates
    }

    /// Replaces the installer template slots.
    pub fn set_installer_templates(
        &mut self,
        templates: impl IntoIterator<Item = Option<Arc<dyn InstallerTemplate>>>,
    ) {
        self.installer_templates.clear();
        self.installer_templates.extend(templates);
    }

    /// Appends a resolved installer template.
    pub fn add_installer_template(&mut self, template: Arc<dyn InstallerTemplate>) {
        self.installer_templates.push(Some(template));
    }
}
