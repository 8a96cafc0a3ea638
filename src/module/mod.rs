// SPDX-License-Identifier: MPL-2.0
//! Modules that own embedded resources.
//!
//! A [`Module`] pairs a descriptor string with the resource table shipped by
//! that module. The [`ModuleRegistry`] knows the designated entry module and
//! the [`Locator`] used to pick a host out of a declaration chain.

pub mod descriptor;
pub mod locator;

pub use descriptor::ModuleDescriptor;
pub use locator::{Locator, WIDGET_MODULE};

use crate::resource::{self, ResourceMap, ResourceTable};
use std::fmt;
use std::io::Read;
use std::sync::Arc;

/// A named unit owning a table of embedded resources.
#[derive(Clone)]
pub struct Module {
    full_name: String,
    descriptor: ModuleDescriptor,
    resources: Arc<dyn ResourceTable>,
}

impl Module {
    pub fn new(full_name: impl Into<String>, resources: impl ResourceTable + 'static) -> Self {
        Self::with_shared(full_name, Arc::new(resources))
    }

    /// Creates a module backed by a table shared with other owners.
    pub fn with_shared(full_name: impl Into<String>, resources: Arc<dyn ResourceTable>) -> Self {
        let full_name = full_name.into();
        let descriptor = ModuleDescriptor::parse(&full_name);
        Self {
            full_name,
            descriptor,
            resources,
        }
    }

    /// Creates a module that ships no resources at all.
    pub fn without_resources(full_name: impl Into<String>) -> Self {
        Self::new(full_name, ResourceMap::new())
    }

    /// Full descriptor string this module was created with.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Simple name, the first segment of the descriptor.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    pub fn resources(&self) -> &dyn ResourceTable {
        self.resources.as_ref()
    }

    /// Fully qualified name of `path` inside this module.
    #[must_use]
    pub fn resource_name(&self, path: &str) -> String {
        resource::qualify(self.name(), path)
    }

    /// Opens a resource by its fully qualified name.
    pub fn open(&self, qualified_name: &str) -> Option<Box<dyn Read + '_>> {
        self.resources.open(qualified_name)
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Module {}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}

/// Entry module plus the rules for resolving a host module.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    entry: Module,
    locator: Locator,
}

impl ModuleRegistry {
    pub fn new(entry: Module) -> Self {
        Self {
            entry,
            locator: Locator::default(),
        }
    }

    #[must_use]
    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    /// Module used whenever no host module could be resolved.
    pub fn entry(&self) -> &Module {
        &self.entry
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Picks the host module out of a declaration chain (innermost first).
    pub fn resolve_host(&self, chain: &[Module]) -> Option<Module> {
        let host = self.locator.locate(chain).cloned();
        match &host {
            Some(module) => log::debug!("Resolved host module '{}'", module.full_name()),
            None => log::debug!(
                "No host module in declaration chain, entry module '{}' will be used",
                self.entry.full_name()
            ),
        }
        host
    }
}
