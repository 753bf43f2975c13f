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

//! The installer aggregation phase.
//!
//! Builds the effective installer sequence from the context's declared
//! sources in fixed category order (programmatic, inline, asset,
//! template), instantiating templates lazily, then installs each exactly
//! once, routing override arguments to the first installer matching each
//! override entry's type.

use std::sync::Arc;

use rhiza_core::container::DiContainer;
use rhiza_core::error::CompositionError;
use rhiza_core::installer::{ArgumentOverrides, Installer, InstallerDescriptor};
use rhiza_core::scene::SceneNode;

use crate::context::SceneContext;

impl SceneContext {
    /// Installs all declared installers with no argument overrides.
    pub fn install_installers_default(
        &mut self,
        container: &mut DiContainer,
    ) -> Result<(), CompositionError> {
        let mut overrides = ArgumentOverrides::new();
        self.install_installers(container, &mut overrides)
    }

    /// Installs all declared installers, in fixed source order, consuming
    /// matching entries from `overrides`.
    ///
    /// Each override entry is applied to at most one installer: the first
    /// one in the sequence whose runtime type matches. Entries matching no
    /// installer are left in the table untouched. Any unresolved slot in a
    /// declared list, or a template whose instantiation yields no
    /// installer component, aborts the whole call.
    pub fn install_installers(
        &mut self,
        container: &mut DiContainer,
        overrides: &mut ArgumentOverrides,
    ) -> Result<(), CompositionError> {
        let descriptors = self.collect_descriptors()?;

        for descriptor in descriptors {
            // Templates sit at the end of the sequence and are instantiated
            // here, when reached, never earlier.
            let installer = self.resolve_descriptor(descriptor)?;
            let type_id = installer.as_any().type_id();
            match overrides.take(type_id) {
                Some(args) => container.install_with_args(installer.as_ref(), args)?,
                None => container.install(installer.as_ref())?,
            }
        }

        Ok(())
    }

    /// Validates the declared source lists and consolidates them into
    /// descriptors, in the fixed category order. Origin is decided here,
    /// once; nothing downstream re-derives it.
    fn collect_descriptors(&self) -> Result<Vec<InstallerDescriptor>, CompositionError> {
        let mut descriptors = Vec::new();

        for installer in self.programmatic_installers() {
            descriptors.push(InstallerDescriptor::Instance(installer.clone()));
        }

        for (index, slot) in self.inline_installers().iter().enumerate() {
            let installer = slot.as_ref().ok_or(CompositionError::NullInstaller {
                source_list: "inline",
                index,
            })?;
            descriptors.push(InstallerDescriptor::Inline(installer.clone()));
        }

        for (index, slot) in self.asset_installers().iter().enumerate() {
            let installer = slot.as_ref().ok_or(CompositionError::NullInstaller {
                source_list: "asset",
                index,
            })?;
            descriptors.push(InstallerDescriptor::Asset(installer.clone()));
        }

        for (index, slot) in self.installer_templates().iter().enumerate() {
            let template = slot.as_ref().ok_or(CompositionError::NullInstaller {
                source_list: "template",
                index,
            })?;
            descriptors.push(InstallerDescriptor::Template(template.clone()));
        }

        Ok(descriptors)
    }

    /// Turns a descriptor into a concrete installer, instantiating
    /// templates into the hierarchy as children of the root.
    fn resolve_descriptor(
        &mut self,
        descriptor: InstallerDescriptor,
    ) -> Result<Arc<dyn Installer>, CompositionError> {
        match descriptor {
            InstallerDescriptor::Instance(installer)
            | InstallerDescriptor::Inline(installer)
            | InstallerDescriptor::Asset(installer) => Ok(installer),
            InstallerDescriptor::Template(template) => {
                log::debug!(
                    "SceneContext: instantiating installer template '{}'",
                    template.template_name()
                );
                let instance = template.instantiate();
                let installer = find_installer_component(&instance).ok_or_else(|| {
                    CompositionError::MissingTemplateInstaller {
                        template: template.template_name().to_string(),
                    }
                })?;
                self.root_mut().attach_child(instance);
                Ok(installer)
            }
        }
    }
}

/// Locates the first installer component on `node` or its descendants.
fn find_installer_component(node: &SceneNode) -> Option<Arc<dyn Installer>> {
    for slot in node.components() {
        if let Some(component) = slot {
            if let Some(installer) = component.clone().as_installer_arc() {
                return Some(installer);
            }
        }
    }
    node.children().iter().find_map(find_installer_component)
}
