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

//! The installer-template hook into the scene's instantiation machinery.

use super::node::SceneNode;

/// An installer definition that must be instantiated into the live
/// hierarchy before its configuration can run.
///
/// Instantiation is a blocking call producing a fresh subtree; the
/// composition root attaches that subtree under itself and locates the
/// installer component on it. One template may be instantiated by several
/// roots; each instantiation is independent.
pub trait InstallerTemplate: Send + Sync {
    /// Diagnostic name used in log and error messages.
    fn template_name(&self) -> &str;

    /// Produces a fresh instance of the template's subtree.
    fn instantiate(&self) -> SceneNode;
}
