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

//! The component contract for scene-attached objects.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::installer::Installer;

/// A slot holding a component on a scene node.
///
/// `None` models a broken reference left behind by scene loading (a missing
/// script); the injectable walk warns about and skips such slots.
pub type ComponentSlot = Option<Arc<dyn Component>>;

/// An object attached to a scene node that may participate in injection.
///
/// Interface membership is declared explicitly: a component lists the
/// `TypeId`s of the `dyn Trait` object types it implements, and the
/// container registers interface bindings under exactly those ids. This is
/// the declared stand-in for runtime interface reflection.
pub trait Component: Any + Send + Sync {
    /// Diagnostic name used in log messages.
    fn component_name(&self) -> &str;

    /// `TypeId`s of the `dyn Trait` object types this component implements.
    ///
    /// Defaults to none; components bound with an interface strategy
    /// override this.
    fn implemented_interfaces(&self) -> Vec<TypeId> {
        Vec::new()
    }

    /// Returns this component as an installer, if it is one.
    ///
    /// Installer components are skipped by the injectable walk, since
    /// installers are injected before they are installed.
    fn as_installer(&self) -> Option<&dyn Installer> {
        None
    }

    /// Owned variant of [`as_installer`](Component::as_installer), used
    /// when the installer must outlive the borrow of its node.
    fn as_installer_arc(self: Arc<Self>) -> Option<Arc<dyn Installer>> {
        None
    }

    /// Upcast used to recover the concrete runtime type.
    fn as_any(&self) -> &dyn Any;

    /// Owned upcast used when registering the instance into the container.
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
