//! Resource registry.
//!
//! The navigation layer never resolves types at runtime: every resource the
//! admin panel exposes is described up front by a [`ResourceDescriptor`],
//! registered at startup. A descriptor carries the resource's admin route
//! name and, when visibility is permission-gated, the capability subject to
//! check against.

use std::collections::HashMap;

use clementine_core::ResourceSymbol;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The JSON document could not be parsed as a descriptor list.
    #[error("malformed registry document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A descriptor had an empty resource name.
    #[error("descriptor at index {0} has a blank resource name")]
    BlankResource(usize),
}

/// Describes one resource the admin panel can navigate to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource symbol this descriptor is keyed by (e.g. `products`).
    pub resource: ResourceSymbol,
    /// Admin route name; defaults to `admin_{resource}` when absent.
    #[serde(default)]
    pub route: Option<String>,
    /// Capability subject for the `admin` permission gate.
    ///
    /// `None` means no permission check applies to this resource's tab.
    #[serde(default)]
    pub guard: Option<String>,
}

impl ResourceDescriptor {
    /// Create an ungated descriptor with the default route name.
    #[must_use]
    pub fn new(resource: &str) -> Self {
        Self {
            resource: ResourceSymbol::from(resource),
            route: None,
            guard: None,
        }
    }

    /// Set an explicit route name.
    #[must_use]
    pub fn route(mut self, route: &str) -> Self {
        self.route = Some(route.to_string());
        self
    }

    /// Gate this resource's visibility on the `admin` capability for `subject`.
    #[must_use]
    pub fn guarded_by(mut self, subject: &str) -> Self {
        self.guard = Some(subject.to_string());
        self
    }

    /// The route name for this resource.
    #[must_use]
    pub fn route_name(&self) -> String {
        self.route
            .clone()
            .unwrap_or_else(|| format!("admin_{}", self.resource))
    }
}

/// Registry of all navigable resources, populated at startup.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    descriptors: HashMap<ResourceSymbol, ResourceDescriptor>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Re-registering a resource replaces the earlier
    /// entry (last write wins) and logs a warning.
    pub fn register(&mut self, descriptor: ResourceDescriptor) {
        if self
            .descriptors
            .insert(descriptor.resource.clone(), descriptor.clone())
            .is_some()
        {
            warn!(resource = %descriptor.resource, "duplicate resource registration");
        }
    }

    /// Load a registry from a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Malformed`] when the document does not parse,
    /// or [`RegistryError::BlankResource`] when a descriptor names nothing.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let descriptors: Vec<ResourceDescriptor> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for (idx, descriptor) in descriptors.into_iter().enumerate() {
            if descriptor.resource.as_str().trim().is_empty() {
                return Err(RegistryError::BlankResource(idx));
            }
            registry.register(descriptor);
        }
        debug!(resources = registry.len(), "loaded resource registry");
        Ok(registry)
    }

    /// Look up the descriptor for a resource symbol.
    #[must_use]
    pub fn descriptor(&self, resource: &str) -> Option<&ResourceDescriptor> {
        self.descriptors.get(resource)
    }

    /// The route name for a resource: the registered one, else the
    /// `admin_{resource}` convention.
    #[must_use]
    pub fn route_name(&self, resource: &str) -> String {
        self.descriptor(resource)
            .map_or_else(|| format!("admin_{resource}"), ResourceDescriptor::route_name)
    }

    /// Number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl FromIterator<ResourceDescriptor> for ResourceRegistry {
    fn from_iter<T: IntoIterator<Item = ResourceDescriptor>>(iter: T) -> Self {
        let mut registry = Self::new();
        for descriptor in iter {
            registry.register(descriptor);
        }
        registry
    }
}
