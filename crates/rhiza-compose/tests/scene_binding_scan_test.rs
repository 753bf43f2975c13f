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

use std::any::{Any, TypeId};
use std::sync::Arc;

use rhiza_compose::SceneContext;
use rhiza_core::scene::{
    BindStrategy, Component, ContextId, SceneBinding, SceneBindingIndex, SceneNode,
};
use rhiza_core::DiContainer;

// --- DUMMY COMPONENTS FOR THESE TESTS ---

trait AudioSource: Send + Sync {}
trait Recorder: Send + Sync {}

/// A component declaring two interfaces.
struct Microphone {
    gain: u8,
}

impl AudioSource for Microphone {}
impl Recorder for Microphone {}

impl Component for Microphone {
    fn component_name(&self) -> &str {
        "microphone"
    }

    fn implemented_interfaces(&self) -> Vec<TypeId> {
        vec![TypeId::of::<dyn AudioSource>(), TypeId::of::<dyn Recorder>()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A plain component with no interfaces.
struct Speaker;

impl Component for Speaker {
    fn component_name(&self) -> &str {
        "speaker"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Another plain component, type-distinct from [`Speaker`].
struct Mixer;

impl Component for Mixer {
    fn component_name(&self) -> &str {
        "mixer"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Attaches `binding` to a fresh child node under the context root.
fn attach_marker(context: &mut SceneContext, binding: Arc<SceneBinding>) {
    let mut holder = SceneNode::new("marker_holder");
    holder.add_component(binding);
    context.root_mut().attach_child(holder);
}

// --- TESTS ---

#[test]
fn test_self_strategy_binds_concrete_type() {
    // --- 1. ARRANGE ---
    let mut context = SceneContext::new(SceneNode::new("root"));
    let microphone = Arc::new(Microphone { gain: 3 });
    let marker = Arc::new(
        SceneBinding::new("mic_binding", BindStrategy::ToSelf).with_target(microphone.clone()),
    );
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    let index = SceneBindingIndex::new();

    // --- 2. ACT ---
    context.install_scene_bindings(&mut container, &index);

    // --- 3. ASSERT ---
    let resolved = container
        .resolve::<Microphone>(None)
        .expect("concrete type should be bound");
    assert_eq!(resolved.gain, 3);
    assert!(Arc::ptr_eq(&resolved, &microphone));

    // Only the concrete type was registered.
    assert!(container
        .resolve_instance(TypeId::of::<dyn AudioSource>(), None)
        .is_none());
}

#[test]
fn test_all_interfaces_and_self_fan_out() {
    let mut context = SceneContext::new(SceneNode::new("root"));
    let microphone = Arc::new(Microphone { gain: 8 });
    let marker = Arc::new(
        SceneBinding::new("mic_binding", BindStrategy::AllInterfacesAndSelf)
            .with_target(microphone.clone()),
    );
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &SceneBindingIndex::new());

    // Three resolvable bindings, all backed by the identical instance.
    let by_self = container
        .resolve::<Microphone>(None)
        .expect("concrete binding");
    let by_audio = container
        .resolve_instance(TypeId::of::<dyn AudioSource>(), None)
        .expect("AudioSource binding")
        .downcast::<Microphone>()
        .unwrap();
    let by_recorder = container
        .resolve_instance(TypeId::of::<dyn Recorder>(), None)
        .expect("Recorder binding")
        .downcast::<Microphone>()
        .unwrap();

    assert!(Arc::ptr_eq(&by_self, &microphone));
    assert!(Arc::ptr_eq(&by_audio, &microphone));
    assert!(Arc::ptr_eq(&by_recorder, &microphone));
}

#[test]
fn test_all_interfaces_does_not_bind_concrete_type() {
    let mut context = SceneContext::new(SceneNode::new("root"));
    let microphone = Arc::new(Microphone { gain: 1 });
    let marker = Arc::new(
        SceneBinding::new("mic_binding", BindStrategy::AllInterfaces)
            .with_target(microphone.clone()),
    );
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &SceneBindingIndex::new());

    assert!(container
        .resolve_instance(TypeId::of::<dyn AudioSource>(), None)
        .is_some());
    assert!(container.resolve::<Microphone>(None).is_none());
}

#[test]
fn test_empty_target_list_is_skipped() {
    let mut context = SceneContext::new(SceneNode::new("root"));
    let marker = Arc::new(SceneBinding::new("empty", BindStrategy::ToSelf));
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &SceneBindingIndex::new());

    assert!(container.is_empty(), "no bind calls must be made");
}

#[test]
fn test_disabled_marker_is_skipped() {
    let mut context = SceneContext::new(SceneNode::new("root"));
    let marker = Arc::new(
        SceneBinding::new("off", BindStrategy::ToSelf)
            .with_target(Arc::new(Speaker))
            .disabled(),
    );
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &SceneBindingIndex::new());

    assert!(container.is_empty());
}

#[test]
fn test_missing_target_skipped_valid_target_bound() {
    let mut context = SceneContext::new(SceneNode::new("root"));
    let marker = Arc::new(
        SceneBinding::new("partial", BindStrategy::ToSelf)
            .with_missing_target()
            .with_target(Arc::new(Speaker)),
    );
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &SceneBindingIndex::new());

    assert!(container.resolve::<Speaker>(None).is_some());
    assert_eq!(container.len(), 1);
}

#[test]
fn test_whitespace_identifier_is_anonymous() {
    // Identifier of whitespace only: binding registers as anonymous.
    let mut context = SceneContext::new(SceneNode::new("root"));
    let marker = Arc::new(
        SceneBinding::new("blank_id", BindStrategy::ToSelf)
            .with_identifier("  ")
            .owned_by(context.id())
            .with_target(Arc::new(Speaker)),
    );

    let mut index = SceneBindingIndex::new();
    index.register(&marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &index);

    assert!(container.resolve::<Speaker>(None).is_some());
    assert!(container.resolve::<Speaker>(Some("  ")).is_none());
}

#[test]
fn test_identifier_distinguishes_bindings() {
    let mut context = SceneContext::new(SceneNode::new("root"));
    let marker = Arc::new(
        SceneBinding::new("named", BindStrategy::ToSelf)
            .with_identifier("main")
            .with_target(Arc::new(Speaker)),
    );
    attach_marker(&mut context, marker);

    let mut container = DiContainer::new();
    context.install_scene_bindings(&mut container, &SceneBindingIndex::new());

    assert!(container.resolve::<Speaker>(Some("main")).is_some());
    assert!(container.resolve::<Speaker>(None).is_none());
}

#[test]
fn test_passes_are_disjoint_by_ownership() {
    // --- 1. ARRANGE ---
    let mut context = SceneContext::new(SceneNode::new("root"));
    let foreign_context = ContextId::new();

    // Ownerless marker in the subtree: claimed by the local pass.
    let local_marker = Arc::new(
        SceneBinding::new("local", BindStrategy::ToSelf).with_target(Arc::new(Speaker)),
    );
    attach_marker(&mut context, local_marker.clone());

    // Marker owned by a different root, visible both in the subtree and in
    // the index: neither pass may claim it.
    let foreign_marker = Arc::new(
        SceneBinding::new("foreign", BindStrategy::ToSelf)
            .owned_by(foreign_context)
            .with_target(Arc::new(Microphone { gain: 0 })),
    );
    attach_marker(&mut context, foreign_marker.clone());

    // Marker owned by this root but sitting on an inactive node: invisible
    // to the walk, reachable only through the index.
    let owned_marker = Arc::new(
        SceneBinding::new("owned", BindStrategy::ToSelf)
            .owned_by(context.id())
            .with_target(Arc::new(Mixer)),
    );
    let mut inactive_holder = SceneNode::new("inactive_holder");
    inactive_holder.add_component(owned_marker.clone());
    inactive_holder.set_active(false);
    context.root_mut().attach_child(inactive_holder);

    let mut index = SceneBindingIndex::new();
    index.register(&local_marker);
    index.register(&foreign_marker);
    index.register(&owned_marker);

    let mut container = DiContainer::new();

    // --- 2. ACT ---
    context.install_scene_bindings(&mut container, &index);

    // --- 3. ASSERT ---
    assert!(
        container.resolve::<Speaker>(None).is_some(),
        "ownerless marker is claimed by the local pass"
    );
    assert!(
        container.resolve::<Mixer>(None).is_some(),
        "owned marker on an inactive node is claimed by the global pass"
    );
    assert!(
        container.resolve::<Microphone>(None).is_none(),
        "a marker owned by a different root is never claimed"
    );
}
