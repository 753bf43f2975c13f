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

//! The container surface consumed by the composition root.
//!
//! [`DiContainer`] carries the instance-binding registry the orchestration
//! populates: a type-map keyed by `(TypeId, identifier)` where a single
//! component instance may be registered under its concrete type, under each
//! interface it declares, or both. The full constructor-graph resolution
//! engine lives outside this crate; what is specified here is the exact
//! surface installers and the scene-binding scanner call into.
//!
//! Bindings registered twice under the same key replace the earlier value,
//! the same way a service locator replaces a re-inserted service.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CompositionError;
use crate::installer::{Installer, TypedValue};
use crate::scene::Component;

/// Key under which an instance binding is registered: a type plus an
/// optional identifier distinguishing multiple bindings of the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingKey {
    /// The bound type: a concrete component type or a `dyn Trait` object
    /// type declared by the component.
    pub type_id: TypeId,
    /// Optional identifier; `None` is the anonymous binding.
    pub identifier: Option<String>,
}

/// The dependency container's binding registry.
#[derive(Default)]
pub struct DiContainer {
    instances: HashMap<BindingKey, Arc<dyn Any + Send + Sync>>,
}

impl DiContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Runs `installer`'s configuration with no extra arguments.
    pub fn install(&mut self, installer: &dyn Installer) -> Result<(), CompositionError> {
        log::debug!("DiContainer: installing '{}'", installer.installer_name());
        installer.install_bindings(self, &[])
    }

    /// Runs `installer`'s configuration, supplying typed override values.
    pub fn install_with_args(
        &mut self,
        installer: &dyn Installer,
        args: Vec<TypedValue>,
    ) -> Result<(), CompositionError> {
        log::debug!(
            "DiContainer: installing '{}' with {} override argument(s)",
            installer.installer_name(),
            args.len()
        );
        installer.install_bindings(self, &args)
    }

    /// Starts a binding for a single type under an optional identifier.
    pub fn bind(&mut self, identifier: Option<&str>, type_id: TypeId) -> BindingBuilder<'_> {
        BindingBuilder {
            container: self,
            keys: vec![BindingKey {
                type_id,
                identifier: identifier.map(str::to_owned),
            }],
        }
    }

    /// Starts a binding under every interface `component` declares.
    pub fn bind_all_interfaces(
        &mut self,
        identifier: Option<&str>,
        component: &dyn Component,
    ) -> BindingBuilder<'_> {
        let keys = component
            .implemented_interfaces()
            .into_iter()
            .map(|type_id| BindingKey {
                type_id,
                identifier: identifier.map(str::to_owned),
            })
            .collect();
        BindingBuilder {
            container: self,
            keys,
        }
    }

    /// Starts a binding under every declared interface and the concrete
    /// type of `component`.
    pub fn bind_all_interfaces_and_self(
        &mut self,
        identifier: Option<&str>,
        component: &dyn Component,
    ) -> BindingBuilder<'_> {
        let mut builder = self.bind_all_interfaces(identifier, component);
        builder.keys.push(BindingKey {
            type_id: component.as_any().type_id(),
            identifier: identifier.map(str::to_owned),
        });
        builder
    }

    /// Convenience for binding an owned value under its concrete type.
    pub fn bind_instance<T: Send + Sync + 'static>(
        &mut self,
        identifier: Option<&str>,
        value: T,
    ) {
        self.bind(identifier, TypeId::of::<T>())
            .from_instance(Arc::new(value));
    }

    /// Looks up the type-erased instance bound under `type_id` and
    /// `identifier`, if any.
    #[must_use]
    pub fn resolve_instance(
        &self,
        type_id: TypeId,
        identifier: Option<&str>,
    ) -> Option<Arc<dyn Any + Send + Sync>> {
        let key = BindingKey {
            type_id,
            identifier: identifier.map(str::to_owned),
        };
        self.instances.get(&key).cloned()
    }

    /// Looks up the instance bound under concrete type `T`.
    #[must_use]
    pub fn resolve<T: Send + Sync + 'static>(&self, identifier: Option<&str>) -> Option<Arc<T>> {
        self.resolve_instance(TypeId::of::<T>(), identifier)
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// Number of registered instance bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// In-flight binding produced by the [`DiContainer::bind`] family; finished
/// by supplying the instance to register.
pub struct BindingBuilder<'a> {
    container: &'a mut DiContainer,
    keys: Vec<BindingKey>,
}

impl BindingBuilder<'_> {
    /// Registers `instance` under every key of this binding. The same
    /// shared instance backs all of them, so resolving by different types
    /// observes identity-equal values.
    pub fn from_instance(self, instance: Arc<dyn Any + Send + Sync>) {
        for key in self.keys {
            self.container.instances.insert(key, instance.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Pingable: Send + Sync {}

    struct Probe {
        label: String,
    }

    impl Pingable for Probe {}

    impl Component for Probe {
        fn component_name(&self) -> &str {
            &self.label
        }

        fn implemented_interfaces(&self) -> Vec<TypeId> {
            vec![TypeId::of::<dyn Pingable>()]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    }

    #[test]
    fn test_bind_and_resolve_instance() {
        let mut container = DiContainer::new();
        container.bind_instance(None, 7u64);

        let resolved = container.resolve::<u64>(None).unwrap();
        assert_eq!(*resolved, 7);
        assert!(container.resolve::<u32>(None).is_none());
    }

    #[test]
    fn test_identifier_separates_bindings() {
        let mut container = DiContainer::new();
        container.bind_instance(Some("left"), 1i32);
        container.bind_instance(Some("right"), 2i32);

        assert_eq!(*container.resolve::<i32>(Some("left")).unwrap(), 1);
        assert_eq!(*container.resolve::<i32>(Some("right")).unwrap(), 2);
        assert!(container.resolve::<i32>(None).is_none());
    }

    #[test]
    fn test_rebinding_replaces_previous_value() {
        let mut container = DiContainer::new();
        container.bind_instance(None, "old".to_string());
        container.bind_instance(None, "new".to_string());

        assert_eq!(container.resolve::<String>(None).unwrap().as_str(), "new");
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_bind_all_interfaces_and_self_shares_instance() {
        let mut container = DiContainer::new();
        let probe = Arc::new(Probe {
            label: "probe".to_string(),
        });

        container
            .bind_all_interfaces_and_self(None, probe.as_ref())
            .from_instance(probe.clone());

        let by_self = container
            .resolve_instance(TypeId::of::<Probe>(), None)
            .unwrap();
        let by_interface = container
            .resolve_instance(TypeId::of::<dyn Pingable>(), None)
            .unwrap();

        let by_self = by_self.downcast::<Probe>().unwrap();
        let by_interface = by_interface.downcast::<Probe>().unwrap();
        assert!(Arc::ptr_eq(&by_self, &by_interface));
        assert!(Arc::ptr_eq(&by_self, &probe));
    }
}
