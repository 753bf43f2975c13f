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

//! Fatal configuration errors raised during composition-root setup.
//!
//! Setup is a one-shot process: any of these errors unwinds the entire
//! `install_installers` call and the caller is expected to discard the
//! partially populated container. Recoverable conditions (empty binding
//! target lists, broken component references outside the installer lists)
//! are logged and skipped instead and never surface here.

use std::fmt;

/// An error that aborts composition-root setup.
#[derive(Debug)]
pub enum CompositionError {
    /// A declared installer source list contains an unresolved (dangling)
    /// entry, typically a scene reference that failed to load.
    NullInstaller {
        /// Which source list the slot belongs to (`"inline"`, `"asset"`,
        /// `"template"`).
        source_list: &'static str,
        /// Position of the empty slot within that list.
        index: usize,
    },
    /// An installer template was instantiated but no installer component
    /// could be found anywhere on the instantiated subtree.
    MissingTemplateInstaller {
        /// Name of the offending template.
        template: String,
    },
    /// An installer's own configuration step failed.
    InstallerFailed {
        /// Name of the installer that failed.
        installer: String,
        /// Description of the failure.
        message: String,
    },
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionError::NullInstaller { source_list, index } => {
                write!(
                    f,
                    "Found unresolved installer in '{source_list}' list at index {index}"
                )
            }
            CompositionError::MissingTemplateInstaller { template } => {
                write!(
                    f,
                    "Expected to find an installer component on instantiated template '{template}'"
                )
            }
            CompositionError::InstallerFailed { installer, message } => {
                write!(f, "Installer '{installer}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for CompositionError {}
