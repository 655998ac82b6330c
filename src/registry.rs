//! Static service registry
//!
//! The dashboard shows a fixed, ordered list of service names supplied by
//! configuration. Lookups of names outside the list fail fast.

use tracing::debug;

use crate::errors::{DashboardError, Result};

/// Service names shown when configuration does not supply its own list.
pub const DEFAULT_SERVICES: [&str; 3] = ["Discovery", "Catalyst", "Landscape"];

/// Ordered, duplicate-free set of dashboard services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRegistry {
    names: Vec<String>,
}

impl ServiceRegistry {
    /// Build a registry from an ordered list of names. Blank or duplicate
    /// names are rejected.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Vec::new();

        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(DashboardError::Config(
                    "service name cannot be empty".to_string(),
                ));
            }
            if registry.contains(&name) {
                return Err(DashboardError::Config(format!(
                    "duplicate service name: {}",
                    name
                )));
            }
            registry.push(name);
        }

        if registry.is_empty() {
            return Err(DashboardError::Config(
                "at least one service must be registered".to_string(),
            ));
        }

        debug!("registered {} services", registry.len());
        Ok(Self { names: registry })
    }

    /// Resolve a name to its registered entry, failing fast on unknown names.
    pub fn lookup(&self, name: &str) -> Result<&str> {
        self.names
            .iter()
            .find(|registered| registered.as_str() == name)
            .map(String::as_str)
            .ok_or_else(|| DashboardError::UnknownService(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|registered| registered == name)
    }

    /// Registered names in display order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self {
            names: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
