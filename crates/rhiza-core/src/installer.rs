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

//! The installer contract and its argument plumbing.
//!
//! An [`Installer`] is a unit of binding-configuration logic: the container
//! hands it a mutable reference to itself and the installer registers
//! whatever bindings it is responsible for. Extra constructor-style
//! arguments can be routed to a specific installer *type* through an
//! [`ArgumentOverrides`] table, consumed at most once per type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::container::DiContainer;
use crate::error::CompositionError;
use crate::scene::InstallerTemplate;

/// A unit of binding-configuration logic applied to the container.
///
/// Implementations must be object-safe; runtime type identity is recovered
/// through [`as_any`](Installer::as_any), which is what the override table
/// keys on.
pub trait Installer: Any + Send + Sync {
    /// Registers this installer's bindings into `container`.
    ///
    /// `args` carries any typed override values supplied for this
    /// installer's type; it is empty for a default installation.
    fn install_bindings(
        &self,
        container: &mut DiContainer,
        args: &[TypedValue],
    ) -> Result<(), CompositionError>;

    /// Diagnostic name used in log and error messages.
    fn installer_name(&self) -> &str;

    /// Upcast used to recover the concrete runtime type.
    fn as_any(&self) -> &dyn Any;
}

/// A type-erased value tagged with the [`TypeId`] of its concrete type.
///
/// These are the "extra constructor arguments" an installer's configuration
/// step can consume. Cloning is cheap (shared `Arc`).
#[derive(Clone)]
pub struct TypedValue {
    type_id: TypeId,
    value: Arc<dyn Any + Send + Sync>,
}

impl TypedValue {
    /// Wraps `value`, recording its concrete type.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// The [`TypeId`] of the wrapped value.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Borrows the wrapped value as `T`, or `None` on a type mismatch.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedValue")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

/// A mapping from installer runtime type to the extra arguments that one
/// installer of that type should receive.
///
/// Each entry is consumed at most once: [`take`](ArgumentOverrides::take)
/// removes it, so a second installer of the same type falls back to a
/// default installation. Entries matching no installer are deliberately
/// left in place without complaint, so callers may supply a superset for
/// multiple possible installer configurations.
#[derive(Default)]
pub struct ArgumentOverrides {
    entries: HashMap<TypeId, Vec<TypedValue>>,
}

impl ArgumentOverrides {
    /// Creates an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers override arguments for installers of concrete type `I`.
    ///
    /// A previous entry for the same type is replaced.
    pub fn insert_for<I: Installer>(&mut self, args: Vec<TypedValue>) {
        self.entries.insert(TypeId::of::<I>(), args);
    }

    /// Registers override arguments keyed by an explicit [`TypeId`].
    pub fn insert(&mut self, type_id: TypeId, args: Vec<TypedValue>) {
        self.entries.insert(type_id, args);
    }

    /// Removes and returns the entry for `type_id`, if any.
    pub fn take(&mut self, type_id: TypeId) -> Option<Vec<TypedValue>> {
        self.entries.remove(&type_id)
    }

    /// Number of entries still unconsumed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One unit of binding logic gathered from a composition root's declared
/// sources, with its origin decided once at collection time.
///
/// The origin is a closed set: either the installer already exists as a
/// materialized instance, or it is a template that must be instantiated
/// into the hierarchy before its configuration can run. Consolidating this
/// into one variant per origin means origin is never re-derived by
/// inspection later in the pipeline.
#[derive(Clone)]
pub enum InstallerDescriptor {
    /// An installer supplied programmatically through code.
    Instance(Arc<dyn Installer>),
    /// An installer instance declared inline on the composition root.
    Inline(Arc<dyn Installer>),
    /// An installer backed by a data asset rather than a scene object.
    Asset(Arc<dyn Installer>),
    /// A template to be instantiated as a child of the root immediately
    /// before installation.
    Template(Arc<dyn InstallerTemplate>),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopInstaller;

    impl Installer for NoopInstaller {
        fn install_bindings(
            &self,
            _container: &mut DiContainer,
            _args: &[TypedValue],
        ) -> Result<(), CompositionError> {
            Ok(())
        }

        fn installer_name(&self) -> &str {
            "NoopInstaller"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_typed_value_downcast() {
        let value = TypedValue::new(42u32);
        assert_eq!(value.type_id(), TypeId::of::<u32>());
        assert_eq!(value.downcast_ref::<u32>(), Some(&42));
        assert!(value.downcast_ref::<i64>().is_none());
    }

    #[test]
    fn test_overrides_consumed_once() {
        let mut overrides = ArgumentOverrides::new();
        overrides.insert_for::<NoopInstaller>(vec![TypedValue::new("hello".to_string())]);

        let installer = NoopInstaller;
        let type_id = installer.as_any().type_id();

        let args = overrides.take(type_id).expect("entry should be present");
        assert_eq!(args.len(), 1);
        assert_eq!(
            args[0].downcast_ref::<String>().map(String::as_str),
            Some("hello")
        );

        // Second lookup for the same type finds nothing.
        assert!(overrides.take(type_id).is_none());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_unmatched_entries_left_in_place() {
        let mut overrides = ArgumentOverrides::new();
        overrides.insert(TypeId::of::<f32>(), vec![TypedValue::new(1.0f32)]);

        assert!(overrides.take(TypeId::of::<u8>()).is_none());
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_insert_for_keys_by_concrete_type() {
        let mut overrides = ArgumentOverrides::new();
        overrides.insert_for::<NoopInstaller>(vec![]);
        assert!(overrides.take(TypeId::of::<NoopInstaller>()).is_some());
    }
}
